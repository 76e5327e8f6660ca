//! The eight persona attributes and their reveal flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the eight descriptive attributes on a persona card.
///
/// The display name is not an attribute: it is always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// What the persona does for a living.
    Profession,
    /// Age in years.
    Age,
    /// State of health.
    Health,
    /// Pastime.
    Hobby,
    /// Fear.
    Phobia,
    /// Character trait.
    Trait,
    /// What the persona carries into the shelter.
    Baggage,
    /// An extra fact about the persona.
    Fact,
}

impl Attribute {
    /// All attributes in card order.
    pub const ALL: [Attribute; 8] = [
        Self::Profession,
        Self::Age,
        Self::Health,
        Self::Hobby,
        Self::Phobia,
        Self::Trait,
        Self::Baggage,
        Self::Fact,
    ];

    /// Lowercase name used in parsing and serialization.
    pub fn name(self) -> &'static str {
        match self {
            Self::Profession => "profession",
            Self::Age => "age",
            Self::Health => "health",
            Self::Hobby => "hobby",
            Self::Phobia => "phobia",
            Self::Trait => "trait",
            Self::Baggage => "baggage",
            Self::Fact => "fact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// Per-attribute visibility flags. Everything starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveals {
    flags: [bool; 8],
}

impl Reveals {
    /// All attributes hidden.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Whether the attribute is visible to other players.
    pub fn is_revealed(&self, attr: Attribute) -> bool {
        self.flags[attr.index()]
    }

    /// Flip one attribute's flag and return the new value.
    pub fn toggle(&mut self, attr: Attribute) -> bool {
        let flag = &mut self.flags[attr.index()];
        *flag = !*flag;
        *flag
    }

    /// Set one attribute's flag explicitly.
    pub fn set(&mut self, attr: Attribute, revealed: bool) {
        self.flags[attr.index()] = revealed;
    }

    /// Number of revealed attributes.
    pub fn revealed_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("profession".parse::<Attribute>().unwrap(), Attribute::Profession);
        assert_eq!(" Trait ".parse::<Attribute>().unwrap(), Attribute::Trait);
        assert_eq!("FACT".parse::<Attribute>().unwrap(), Attribute::Fact);
    }

    #[test]
    fn parse_unknown() {
        let err = "charisma".parse::<Attribute>().unwrap_err();
        assert_eq!(err, CoreError::UnknownAttribute("charisma".to_string()));
    }

    #[test]
    fn name_is_not_an_attribute() {
        assert!("name".parse::<Attribute>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for attr in Attribute::ALL {
            assert_eq!(attr.to_string(), attr.name());
            assert_eq!(attr.name().parse::<Attribute>().unwrap(), attr);
        }
    }

    #[test]
    fn starts_hidden() {
        let r = Reveals::hidden();
        assert!(Attribute::ALL.iter().all(|a| !r.is_revealed(*a)));
        assert_eq!(r.revealed_count(), 0);
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut r = Reveals::hidden();
        assert!(r.toggle(Attribute::Hobby));
        assert!(r.is_revealed(Attribute::Hobby));
        assert!(!r.toggle(Attribute::Hobby));
        assert!(!r.is_revealed(Attribute::Hobby));
    }

    #[test]
    fn toggle_is_independent() {
        let mut r = Reveals::hidden();
        r.toggle(Attribute::Profession);
        assert!(!r.is_revealed(Attribute::Age));
        assert_eq!(r.revealed_count(), 1);
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&Attribute::Baggage).unwrap();
        assert_eq!(json, "\"baggage\"");
    }
}
