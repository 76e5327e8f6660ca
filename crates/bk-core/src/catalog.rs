//! Value tables for persona generation.
//!
//! Every attribute except age is drawn uniformly from a fixed list; age is
//! drawn uniformly from an inclusive range. The draw is a pure function of
//! the random source handed in, so a seeded RNG reproduces the same cards.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::attribute::{Attribute, Reveals};
use crate::error::{CoreError, CoreResult};
use crate::id::PlayerId;
use crate::persona::Persona;
use crate::scenario::{Scenario, standard_scenarios};

/// Stock professions.
pub const PROFESSIONS: &[&str] = &[
    "Врач",
    "Инженер",
    "Учитель",
    "Программист",
    "Механик",
    "Биолог",
    "Военный",
    "Повар",
];

/// Stock health states.
pub const HEALTH_STATES: &[&str] = &["Здоров", "Легкая травма", "Хроническая болезнь", "Аллергия"];

/// Stock hobbies.
pub const HOBBIES: &[&str] = &["Садоводство", "Охота", "Чтение", "Спорт", "Музыка", "Кулинария"];

/// Stock phobias.
pub const PHOBIAS: &[&str] = &["Темнота", "Замкнутое пространство", "Высота", "Пауки", "Вода"];

/// Stock character traits.
pub const TRAITS: &[&str] = &["Лидер", "Эгоист", "Альтруист", "Трус", "Храбрец", "Умный"];

/// Stock baggage items.
pub const BAGGAGE: &[&str] = &[
    "Рюкзак с едой",
    "Аптечка",
    "Оружие",
    "Инструменты",
    "Книги",
    "Семена",
];

/// Stock extra facts.
pub const FACTS: &[&str] = &[
    "Был в армии",
    "Знает 3 языка",
    "Выжил в катастрофе",
    "Имеет детей",
    "Умеет выживать",
];

/// Youngest age a persona can be drawn with.
pub const MIN_AGE: u32 = 18;
/// Oldest age a persona can be drawn with.
pub const MAX_AGE: u32 = 67;

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Tables for persona and scenario generation. Never holds an empty table.
#[derive(Debug, Clone)]
pub struct Catalog {
    professions: Vec<String>,
    health: Vec<String>,
    hobbies: Vec<String>,
    phobias: Vec<String>,
    traits: Vec<String>,
    baggage: Vec<String>,
    facts: Vec<String>,
    ages: RangeInclusive<u32>,
    scenarios: Vec<Scenario>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The stock tables and the five stock scenarios.
    pub fn standard() -> Self {
        Self {
            professions: owned(PROFESSIONS),
            health: owned(HEALTH_STATES),
            hobbies: owned(HOBBIES),
            phobias: owned(PHOBIAS),
            traits: owned(TRAITS),
            baggage: owned(BAGGAGE),
            facts: owned(FACTS),
            ages: MIN_AGE..=MAX_AGE,
            scenarios: standard_scenarios(),
        }
    }

    /// Replace the value table for a text attribute.
    ///
    /// Age has no table; use [`Catalog::with_ages`] for it.
    pub fn with_table<I, S>(mut self, attr: Attribute, values: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(CoreError::EmptyTable(attr.to_string()));
        }
        let slot = match attr {
            Attribute::Profession => &mut self.professions,
            Attribute::Health => &mut self.health,
            Attribute::Hobby => &mut self.hobbies,
            Attribute::Phobia => &mut self.phobias,
            Attribute::Trait => &mut self.traits,
            Attribute::Baggage => &mut self.baggage,
            Attribute::Fact => &mut self.facts,
            Attribute::Age => return Err(CoreError::UnknownAttribute(attr.to_string())),
        };
        *slot = values;
        Ok(self)
    }

    /// Replace the inclusive age range.
    pub fn with_ages(mut self, ages: RangeInclusive<u32>) -> CoreResult<Self> {
        if ages.is_empty() {
            return Err(CoreError::EmptyTable(Attribute::Age.to_string()));
        }
        self.ages = ages;
        Ok(self)
    }

    /// Replace the scenario list.
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> CoreResult<Self> {
        if scenarios.is_empty() {
            return Err(CoreError::EmptyTable("scenarios".to_string()));
        }
        self.scenarios = scenarios;
        Ok(self)
    }

    /// The value table for a text attribute; `None` for age.
    pub fn table(&self, attr: Attribute) -> Option<&[String]> {
        let table = match attr {
            Attribute::Profession => &self.professions,
            Attribute::Health => &self.health,
            Attribute::Hobby => &self.hobbies,
            Attribute::Phobia => &self.phobias,
            Attribute::Trait => &self.traits,
            Attribute::Baggage => &self.baggage,
            Attribute::Fact => &self.facts,
            Attribute::Age => return None,
        };
        Some(table)
    }

    /// The inclusive age range.
    pub fn ages(&self) -> &RangeInclusive<u32> {
        &self.ages
    }

    /// All scenarios.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Draw a fresh persona: every attribute independently, all hidden, not voted.
    pub fn draw_persona<R: Rng + ?Sized>(&self, name: impl Into<String>, rng: &mut R) -> Persona {
        Persona {
            id: PlayerId::random(rng),
            name: name.into(),
            profession: pick(&self.professions, rng),
            age: rng.random_range(self.ages.clone()),
            health: pick(&self.health, rng),
            hobby: pick(&self.hobbies, rng),
            phobia: pick(&self.phobias, rng),
            r#trait: pick(&self.traits, rng),
            baggage: pick(&self.baggage, rng),
            fact: pick(&self.facts, rng),
            revealed: Reveals::hidden(),
            voted: false,
        }
    }

    /// Draw one scenario uniformly.
    pub fn draw_scenario<R: Rng + ?Sized>(&self, rng: &mut R) -> Scenario {
        self.scenarios[rng.random_range(0..self.scenarios.len())].clone()
    }
}

fn pick<R: Rng + ?Sized>(table: &[String], rng: &mut R) -> String {
    table[rng.random_range(0..table.len())].clone()
}
