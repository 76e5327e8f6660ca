//! Session registry: creating sessions and admitting players.

use rand::SeedableRng;
use rand::rngs::StdRng;

use bk_core::{Catalog, CoreError, Player, PlayerId, RoundTimer, Session, SessionId};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::feedback::{Cue, Feedback};

/// Name of the lobby opened by [`SessionRegistry::with_default_lobby`].
pub const DEFAULT_LOBBY: &str = "Бункер №47";

/// Owns every session and the random source used to populate them.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
    catalog: Catalog,
    config: GameConfig,
    rng: StdRng,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SessionRegistry {
    /// An empty registry using the stock catalog.
    ///
    /// Seeded from the configuration when it carries a seed, from the OS
    /// otherwise.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            sessions: Vec::new(),
            catalog: Catalog::standard(),
            rng,
            config,
        }
    }

    /// Use a custom catalog for scenarios and personas.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Start with existing sessions, e.g. a lobby restored by the caller.
    ///
    /// Fails if two of them share an ID.
    pub fn with_sessions(mut self, sessions: Vec<Session>) -> GameResult<Self> {
        for (i, session) in sessions.iter().enumerate() {
            if sessions[..i].iter().any(|s| s.id() == session.id()) {
                return Err(GameError::DuplicateSession(session.id()));
            }
        }
        self.sessions = sessions;
        Ok(self)
    }

    /// Open the stock empty lobby next to any existing sessions.
    pub fn with_default_lobby(mut self) -> Self {
        self.open_session(DEFAULT_LOBBY);
        self
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All sessions in creation order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session exists.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Look up a session.
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    /// Look up a session for mutation.
    pub fn get_mut(&mut self, id: SessionId) -> GameResult<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Look up a session for mutation, reporting a miss as an error notification.
    pub fn session_mut(&mut self, id: SessionId, feedback: &mut Feedback) -> GameResult<&mut Session> {
        let messages = &self.config.messages;
        match self.sessions.iter_mut().find(|s| s.id() == id) {
            Some(session) => Ok(session),
            None => {
                tracing::warn!(session = %id, "unknown session");
                feedback.error(&messages.session_not_found);
                Err(GameError::SessionNotFound(id))
            }
        }
    }

    /// Create an empty session with a randomly drawn scenario.
    pub fn create_session(&mut self, name: &str, feedback: &mut Feedback) -> GameResult<&Session> {
        let name = name.trim();
        if name.is_empty() {
            feedback.error(&self.config.messages.blank_session_name);
            return Err(GameError::Validation("session name is blank".to_string()));
        }

        feedback.success(&self.config.messages.session_created);
        Ok(self.open_session(name))
    }

    /// Admit a player with a freshly drawn persona.
    ///
    /// The first player admitted to a session becomes its administrator.
    pub fn join_session(
        &mut self,
        session_id: SessionId,
        player_name: &str,
        feedback: &mut Feedback,
    ) -> GameResult<Player> {
        let messages = &self.config.messages;
        let player_name = player_name.trim();
        if player_name.is_empty() {
            feedback.error(&messages.blank_player_name);
            return Err(GameError::Validation("player name is blank".to_string()));
        }

        let Some(index) = self.sessions.iter().position(|s| s.id() == session_id) else {
            tracing::warn!(session = %session_id, "join rejected: unknown session");
            feedback.error(&messages.session_not_found);
            return Err(GameError::SessionNotFound(session_id));
        };

        let mut persona = self.catalog.draw_persona(player_name, &mut self.rng);
        while is_seated(&self.sessions, persona.id) {
            persona.id = PlayerId::random(&mut self.rng);
        }
        let player = match self.sessions[index].admit(persona) {
            Ok(player) => player.clone(),
            Err(err) => {
                tracing::warn!(session = %session_id, error = %err, "join rejected");
                let text = match err {
                    CoreError::SessionFull { .. } => &messages.session_full,
                    _ => &messages.session_started,
                };
                feedback.error(text);
                return Err(err.into());
            }
        };

        tracing::info!(
            session = %session_id,
            player = %player.id(),
            name = %player.name(),
            admin = player.is_admin,
            "player joined"
        );
        feedback.play(Cue::Admission);
        feedback.success(messages.joined(player.name(), player.is_admin));
        Ok(player)
    }

    /// Append an empty session under an ID no other session holds.
    fn open_session(&mut self, name: &str) -> &Session {
        let mut id = SessionId::random(&mut self.rng);
        while self.get(id).is_some() {
            id = SessionId::random(&mut self.rng);
        }
        let scenario = self.catalog.draw_scenario(&mut self.rng);
        tracing::info!(session = %id, %name, scenario = %scenario.kind, "created session");

        self.sessions.push(Session::new(
            id,
            name,
            self.config.capacity,
            scenario,
            RoundTimer::new(self.config.round_seconds),
        ));
        &self.sessions[self.sessions.len() - 1]
    }
}

fn is_seated(sessions: &[Session], id: PlayerId) -> bool {
    sessions.iter().any(|s| s.player(id).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Severity;
    use bk_core::{Attribute, Phase};

    fn registry() -> SessionRegistry {
        SessionRegistry::new(GameConfig::default())
    }

    #[test]
    fn create_session() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let s = reg.create_session("  Shelter-9  ", &mut fb).unwrap();
        assert_eq!(s.name(), "Shelter-9");
        assert_eq!(s.phase(), Phase::Waiting);
        assert_eq!(s.capacity(), 8);
        assert!(s.is_empty());
        assert!(!s.scenario().description.is_empty());
        assert_eq!(reg.len(), 1);
        assert_eq!(fb.count(Severity::Success), 1);
    }

    #[test]
    fn blank_session_name() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let err = reg.create_session("   ", &mut fb).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
        assert!(reg.is_empty());
        assert_eq!(fb.notifications()[0].text, "Введите название сессии");
        assert_eq!(fb.notifications()[0].severity, Severity::Error);
    }

    #[test]
    fn join_assigns_admin_once() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let id = reg.create_session("Бункер", &mut fb).unwrap().id();
        let alice = reg.join_session(id, "Alice", &mut fb).unwrap();
        let bob = reg.join_session(id, "Bob", &mut fb).unwrap();
        assert!(alice.is_admin);
        assert!(!bob.is_admin);
        assert_eq!(reg.get(id).unwrap().len(), 2);
        assert!(
            Attribute::ALL
                .iter()
                .all(|a| !alice.persona.revealed.is_revealed(*a))
        );
        assert_eq!(fb.cue_count(Cue::Admission), 2);
        let last = fb.notifications().last().unwrap();
        assert_eq!(last.text, "Bob присоединился к игре!");
    }

    #[test]
    fn admin_join_message() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let id = reg.create_session("Бункер", &mut fb).unwrap().id();
        reg.join_session(id, "Alice", &mut fb).unwrap();
        assert!(fb.notifications().last().unwrap().text.ends_with("Вы администратор!"));
    }

    #[test]
    fn join_blank_name() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let id = reg.create_session("Бункер", &mut fb).unwrap().id();
        let err = reg.join_session(id, " ", &mut fb).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
        assert!(reg.get(id).unwrap().is_empty());
    }

    #[test]
    fn join_unknown_session() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        reg.create_session("Бункер", &mut fb).unwrap();
        let ghost = SessionId(uuid_from(99));
        let err = reg.join_session(ghost, "Alice", &mut fb).unwrap_err();
        assert_eq!(err, GameError::SessionNotFound(ghost));
        assert_eq!(reg.len(), 1);
        assert!(reg.sessions()[0].is_empty());
        assert!(fb.cues().is_empty());
    }

    #[test]
    fn join_full_session() {
        let mut reg = SessionRegistry::new(GameConfig::default().with_capacity(2));
        let mut fb = Feedback::new();
        let id = reg.create_session("Тесно", &mut fb).unwrap().id();
        reg.join_session(id, "A", &mut fb).unwrap();
        reg.join_session(id, "B", &mut fb).unwrap();
        let err = reg.join_session(id, "C", &mut fb).unwrap_err();
        assert_eq!(err, GameError::Core(CoreError::SessionFull { capacity: 2 }));
        assert_eq!(reg.get(id).unwrap().len(), 2);
        assert_eq!(fb.notifications().last().unwrap().text, "Сессия полна");
    }

    #[test]
    fn join_after_round_started() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let id = reg.create_session("Бункер", &mut fb).unwrap().id();
        reg.join_session(id, "A", &mut fb).unwrap();
        reg.get_mut(id).unwrap().begin_round();
        let err = reg.join_session(id, "B", &mut fb).unwrap_err();
        assert!(matches!(err, GameError::Core(CoreError::InvalidPhase { .. })));
    }

    #[test]
    fn get_mut_unknown() {
        let mut reg = registry();
        let ghost = SessionId(uuid_from(5));
        assert_eq!(reg.get_mut(ghost).unwrap_err(), GameError::SessionNotFound(ghost));
    }

    #[test]
    fn same_seed_same_sessions() {
        let mut a = SessionRegistry::new(GameConfig::default().with_seed(42));
        let mut b = SessionRegistry::new(GameConfig::default().with_seed(42));
        let mut fb = Feedback::new();
        let sa = a.create_session("X", &mut fb).unwrap().clone();
        let sb = b.create_session("X", &mut fb).unwrap().clone();
        assert_eq!(sa.id(), sb.id());
        assert_eq!(sa.scenario(), sb.scenario());
        let pa = a.join_session(sa.id(), "Alice", &mut fb).unwrap();
        let pb = b.join_session(sb.id(), "Alice", &mut fb).unwrap();
        assert_eq!(pa, pb);
    }

    #[test]
    fn preloaded_sessions() {
        let mut seed_reg = registry();
        let mut fb = Feedback::new();
        let lobby = seed_reg.create_session("Бункер №47", &mut fb).unwrap().clone();
        let reg = registry().with_sessions(vec![lobby.clone()]).unwrap();
        assert_eq!(reg.get(lobby.id()).unwrap().name(), "Бункер №47");
    }

    #[test]
    fn restored_lobby_keeps_new_sessions_apart() {
        let seeded = || SessionRegistry::new(GameConfig::default().with_seed(42));
        let mut fb = Feedback::new();
        let mut first_run = seeded();
        let lobby_id = first_run.create_session("Бункер №47", &mut fb).unwrap().id();
        let alice = first_run.join_session(lobby_id, "Alice", &mut fb).unwrap();
        let lobby = first_run.get(lobby_id).unwrap().clone();

        let mut second_run = seeded().with_sessions(vec![lobby]).unwrap();
        let fresh = second_run.create_session("Новый", &mut fb).unwrap().id();
        assert_ne!(fresh, lobby_id);

        let bob = second_run.join_session(fresh, "Bob", &mut fb).unwrap();
        assert_ne!(bob.id(), alice.id());
        assert_eq!(second_run.get(lobby_id).unwrap().len(), 1);
        assert_eq!(second_run.get(fresh).unwrap().len(), 1);
        assert!(second_run.get(fresh).unwrap().player(bob.id()).is_some());
    }

    #[test]
    fn duplicate_restored_sessions_rejected() {
        let mut source = registry();
        let mut fb = Feedback::new();
        let lobby = source.create_session("Бункер", &mut fb).unwrap().clone();
        let err = registry()
            .with_sessions(vec![lobby.clone(), lobby.clone()])
            .unwrap_err();
        assert_eq!(err, GameError::DuplicateSession(lobby.id()));
    }

    #[test]
    fn unseeded_registries_differ() {
        let mut fb = Feedback::new();
        let a = registry().create_session("X", &mut fb).unwrap().id();
        let b = registry().create_session("X", &mut fb).unwrap().id();
        assert_ne!(a, b);
    }

    #[test]
    fn default_lobby() {
        let mut reg = registry().with_default_lobby();
        let mut fb = Feedback::new();
        assert_eq!(reg.len(), 1);
        let lobby = &reg.sessions()[0];
        assert_eq!(lobby.name(), DEFAULT_LOBBY);
        assert_eq!(lobby.phase(), Phase::Waiting);
        assert!(lobby.is_empty());
        let id = lobby.id();
        reg.join_session(id, "Alice", &mut fb).unwrap();
        assert!(fb.notifications().iter().all(|n| n.severity == Severity::Success));
    }

    #[test]
    fn session_mut_reports_miss() {
        let mut reg = registry();
        let mut fb = Feedback::new();
        let id = reg.create_session("Бункер", &mut fb).unwrap().id();
        fb.drain_notifications();
        assert!(reg.session_mut(id, &mut fb).is_ok());
        assert!(fb.notifications().is_empty());

        let ghost = SessionId(uuid_from(7));
        let err = reg.session_mut(ghost, &mut fb).unwrap_err();
        assert_eq!(err, GameError::SessionNotFound(ghost));
        assert_eq!(fb.count(Severity::Error), 1);
        assert_eq!(fb.notifications()[0].text, "Сессия не найдена");
    }

    #[test]
    fn custom_catalog() {
        let catalog = Catalog::standard()
            .with_table(Attribute::Phobia, ["Клоуны"])
            .unwrap();
        let mut reg = registry().with_catalog(catalog);
        let mut fb = Feedback::new();
        let id = reg.create_session("X", &mut fb).unwrap().id();
        let p = reg.join_session(id, "Alice", &mut fb).unwrap();
        assert_eq!(p.persona.phobia, "Клоуны");
    }

    fn uuid_from(n: u128) -> uuid::Uuid {
        uuid::Uuid::from_u128(n)
    }
}
