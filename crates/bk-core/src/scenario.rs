//! Disaster scenarios attached to sessions.

use serde::{Deserialize, Serialize};

/// The disaster a session is played against. Fixed when the session is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short label, e.g. "Эпидемия".
    pub kind: String,
    /// Narrative description of the catastrophe.
    pub description: String,
    /// How many people the shelter holds and for how long.
    pub shelter_info: String,
}

impl Scenario {
    /// Build a scenario from its three texts.
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        shelter_info: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            shelter_info: shelter_info.into(),
        }
    }
}

/// The five stock scenarios as `(kind, description, shelter_info)`.
pub const STANDARD_SCENARIOS: &[(&str, &str, &str)] = &[
    (
        "Ядерная война",
        "Началась глобальная ядерная война. Мир в руинах, радиация повсюду.",
        "Бункер рассчитан на 4 человека. Запасов хватит на 5 лет.",
    ),
    (
        "Эпидемия",
        "Смертельный вирус охватил планету. 95% населения мертвы.",
        "Бункер с системой очистки воздуха. Вместимость 4 человека, запасы на 3 года.",
    ),
    (
        "Астероид",
        "Гигантский астероид столкнулся с Землей. Планета в огне.",
        "Глубокий подземный бункер на 4 человека. Автономность 6 лет.",
    ),
    (
        "Зомби-апокалипсис",
        "Мертвые восстали. Цивилизация пала за 72 часа.",
        "Укреплённый бункер, вместимость 4 человека, провизии на 4 года.",
    ),
    (
        "Инопланетное вторжение",
        "Враждебные пришельцы уничтожают человечество. Сопротивление бесполезно.",
        "Подземное убежище с маскировкой. Места для 4 человек, запасы на 5 лет.",
    ),
];

/// The stock scenarios as owned values.
pub fn standard_scenarios() -> Vec<Scenario> {
    STANDARD_SCENARIOS
        .iter()
        .map(|(kind, description, info)| Scenario::new(*kind, *description, *info))
        .collect()
}
