//! Sessions, players, and the round phase.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::{PlayerId, SessionId};
use crate::persona::{Persona, PersonaView};
use crate::scenario::Scenario;
use crate::timer::RoundTimer;

/// Default roster capacity.
pub const DEFAULT_CAPACITY: usize = 8;

/// Where a session is in its round cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players are joining; no round has started.
    #[default]
    Waiting,
    /// A round is being played.
    Active,
    /// Players are voting on whom to eliminate.
    Voting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Active => write!(f, "active"),
            Self::Voting => write!(f, "voting"),
        }
    }
}

/// A persona seated in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player's card.
    pub persona: Persona,
    /// Whether this player controls rounds. Only the first joiner does.
    pub is_admin: bool,
}

impl Player {
    /// The player's ID (same as the persona's).
    pub fn id(&self) -> PlayerId {
        self.persona.id
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.persona.name
    }
}

/// Players currently marked for elimination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Marked players in roster order.
    pub marked: Vec<PlayerId>,
    /// Roster size at tally time.
    pub roster: usize,
}

impl VoteTally {
    /// Number of marked players.
    pub fn count(&self) -> usize {
        self.marked.len()
    }

    /// Whether the player is marked.
    pub fn is_marked(&self, id: PlayerId) -> bool {
        self.marked.contains(&id)
    }
}

/// One game: roster, phase, scenario, and round timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    name: String,
    roster: Vec<Player>,
    capacity: usize,
    phase: Phase,
    scenario: Scenario,
    timer: RoundTimer,
    created_at: DateTime<Utc>,
}

impl Session {
    /// An empty session in the waiting phase. Capacity is at least one.
    pub fn new(
        id: SessionId,
        name: impl Into<String>,
        capacity: usize,
        scenario: Scenario,
        timer: RoundTimer,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            roster: Vec::new(),
            capacity: capacity.max(1),
            phase: Phase::Waiting,
            scenario,
            timer,
            created_at: Utc::now(),
        }
    }

    /// Session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Players in join order.
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Maximum number of players.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The scenario chosen at creation.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The round timer.
    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    /// Mutable access to the round timer.
    pub fn timer_mut(&mut self) -> &mut RoundTimer {
        &mut self.timer
    }

    /// When the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of seated players.
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether nobody has joined yet.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Whether the roster is at capacity.
    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity
    }

    /// Look up a player by ID.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id() == id)
    }

    /// Look up a player by ID, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id() == id)
    }

    /// The administrator, once someone has joined.
    pub fn admin(&self) -> Option<&Player> {
        self.roster.iter().find(|p| p.is_admin)
    }

    /// Whether the given player is the administrator.
    pub fn is_admin(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(|p| p.is_admin)
    }

    /// Seat a persona. The first player seated becomes administrator.
    ///
    /// Only allowed while waiting and while there is room; on failure the
    /// roster is untouched.
    pub fn admit(&mut self, persona: Persona) -> CoreResult<&Player> {
        if self.phase != Phase::Waiting {
            return Err(CoreError::InvalidPhase {
                expected: Phase::Waiting,
                actual: self.phase,
            });
        }
        if self.is_full() {
            return Err(CoreError::SessionFull {
                capacity: self.capacity,
            });
        }
        let is_admin = self.roster.is_empty();
        self.roster.push(Player { persona, is_admin });
        assert_roster_invariants(self);
        Ok(&self.roster[self.roster.len() - 1])
    }

    /// Start or restart a round: phase becomes active and the timer re-arms.
    pub fn begin_round(&mut self) {
        self.phase = Phase::Active;
        self.timer.start();
    }

    /// Stop the timer and move to voting. Not allowed before the first round.
    pub fn open_voting(&mut self) -> CoreResult<()> {
        if self.phase == Phase::Waiting {
            return Err(CoreError::InvalidPhase {
                expected: Phase::Active,
                actual: self.phase,
            });
        }
        self.timer.pause();
        self.phase = Phase::Voting;
        Ok(())
    }

    /// Every card in roster order as `viewer` sees it.
    pub fn views_for(&self, viewer: PlayerId) -> Vec<PersonaView> {
        self.roster
            .iter()
            .map(|p| p.persona.view(p.id() == viewer))
            .collect()
    }

    /// Players currently marked for elimination.
    pub fn tally(&self) -> VoteTally {
        VoteTally {
            marked: self
                .roster
                .iter()
                .filter(|p| p.persona.voted)
                .map(Player::id)
                .collect(),
            roster: self.roster.len(),
        }
    }
}

/// Debug-build check that the roster respects capacity and has one admin.
pub fn assert_roster_invariants(session: &Session) {
    debug_assert!(
        session.roster.len() <= session.capacity,
        "session {} holds {} players, capacity {}",
        session.id,
        session.roster.len(),
        session.capacity
    );

    let admins = session.roster.iter().filter(|p| p.is_admin).count();
    debug_assert!(
        admins == usize::from(!session.roster.is_empty()),
        "session {} has {} admins for {} players",
        session.id,
        admins,
        session.roster.len()
    );

    debug_assert!(
        session.roster.first().is_none_or(|p| p.is_admin),
        "session {} admin is not the first joiner",
        session.id
    );
}
