//! Core types for Bunker, a social deduction party game.
//!
//! Players join a session, receive randomly generated persona cards, reveal
//! attributes one by one, and vote on whom to leave outside the shelter
//! within a timed round. This crate holds the data model: identifiers,
//! attributes, personas, scenarios, catalogs, sessions, and the round timer.

/// Persona attributes and reveal flags.
pub mod attribute;
/// Value tables and persona generation.
pub mod catalog;
/// Error types for the core crate.
pub mod error;
/// Session and player identifiers.
pub mod id;
/// Persona cards and viewer-specific views.
pub mod persona;
/// Disaster scenarios.
pub mod scenario;
/// Sessions, players, phase, and vote tally.
pub mod session;
/// The round countdown.
pub mod timer;

pub use attribute::{Attribute, Reveals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use id::{PlayerId, SessionId};
pub use persona::{Persona, PersonaView};
pub use scenario::Scenario;
pub use session::{Phase, Player, Session, VoteTally};
pub use timer::{RoundTimer, TickOutcome};
