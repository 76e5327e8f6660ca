//! Configuration for the registry and the round controller.

use bk_core::session::DEFAULT_CAPACITY;
use bk_core::timer::ROUND_SECONDS;

use crate::messages::Messages;

/// Remaining seconds at or below which every tick plays the low-time cue.
pub const LOW_TIME_SECONDS: u32 = 10;

/// Configuration shared by [`crate::SessionRegistry`] and [`crate::RoundController`].
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible scenarios, personas, and IDs. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
    /// Roster capacity for new sessions (at least 1).
    pub capacity: usize,
    /// Round length in seconds (at least 1).
    pub round_seconds: u32,
    /// Low-time cue threshold in seconds.
    pub low_time_threshold: u32,
    /// Reject administrator actions from other players.
    pub enforce_admin: bool,
    /// Notification texts.
    pub messages: Messages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            capacity: DEFAULT_CAPACITY,
            round_seconds: ROUND_SECONDS,
            low_time_threshold: LOW_TIME_SECONDS,
            enforce_admin: true,
            messages: Messages::default(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the roster capacity (clamped to at least 1).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Set the round length (clamped to at least 1 second).
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds.max(1);
        self
    }

    /// Set the low-time cue threshold.
    pub fn with_low_time_threshold(mut self, seconds: u32) -> Self {
        self.low_time_threshold = seconds;
        self
    }

    /// Turn administrator checks on or off.
    pub fn with_admin_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_admin = enforce;
        self
    }

    /// Replace the notification texts.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
