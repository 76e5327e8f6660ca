//! Human-readable notification texts.
//!
//! Defaults are the stock Russian strings; swap them out through
//! [`crate::GameConfig::with_messages`].

/// Notification texts emitted by the registry and the round controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Session name was blank.
    pub blank_session_name: String,
    /// Player name was blank.
    pub blank_player_name: String,
    /// A session was created.
    pub session_created: String,
    /// Join target does not exist.
    pub session_not_found: String,
    /// Join target is full.
    pub session_full: String,
    /// Join target is past the waiting phase.
    pub session_started: String,
    /// Appended to the player's name on a successful join.
    pub player_joined: String,
    /// Appended to the join message for the first player.
    pub admin_granted: String,
    /// A round started.
    pub round_started: String,
    /// Voting opened.
    pub voting_started: String,
    /// The countdown reached zero.
    pub time_up: String,
    /// A vote flag was toggled.
    pub vote_recorded: String,
    /// A persona was replaced by the editor.
    pub persona_updated: String,
    /// A referenced player is not in the session.
    pub player_not_found: String,
    /// A non-administrator tried an administrator action.
    pub admin_only: String,
    /// Voting was requested before any round started.
    pub round_not_started: String,
    /// A reveal named no known attribute.
    pub unknown_attribute: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            blank_session_name: "Введите название сессии".to_string(),
            blank_player_name: "Введите имя игрока".to_string(),
            session_created: "Сессия создана!".to_string(),
            session_not_found: "Сессия не найдена".to_string(),
            session_full: "Сессия полна".to_string(),
            session_started: "Игра уже началась".to_string(),
            player_joined: "присоединился к игре!".to_string(),
            admin_granted: "Вы администратор!".to_string(),
            round_started: "Раунд начался!".to_string(),
            voting_started: "Начинается голосование!".to_string(),
            time_up: "Время вышло! Переходим к голосованию".to_string(),
            vote_recorded: "Голос учтён".to_string(),
            persona_updated: "Карточка обновлена".to_string(),
            player_not_found: "Игрок не найден".to_string(),
            admin_only: "Только администратор может это сделать".to_string(),
            round_not_started: "Раунд ещё не начался".to_string(),
            unknown_attribute: "Неизвестная характеристика".to_string(),
        }
    }
}

impl Messages {
    /// Join announcement, with the admin note for the first player.
    pub fn joined(&self, name: &str, is_admin: bool) -> String {
        if is_admin {
            format!("{name} {} {}", self.player_joined, self.admin_granted)
        } else {
            format!("{name} {}", self.player_joined)
        }
    }
}
