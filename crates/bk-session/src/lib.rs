//! Session registry and round controller for Bunker.
//!
//! [`SessionRegistry`] creates sessions and seats players with random
//! persona cards. [`RoundController`] runs the round cycle of a session:
//! countdown, attribute reveals, and elimination votes. Both report what
//! happened through a [`Feedback`] log of notifications and audio cues.

pub mod config;
pub mod error;
pub mod feedback;
pub mod messages;
pub mod registry;
pub mod round;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use feedback::{Cue, Feedback, Notification, Severity};
pub use messages::Messages;
pub use registry::SessionRegistry;
pub use round::RoundController;
