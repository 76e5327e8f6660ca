//! Error types for the session layer.

use bk_core::{CoreError, PlayerId, SessionId};
use thiserror::Error;

/// Result type for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors returned by the registry and the round controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Required text was blank.
    #[error("validation error: {0}")]
    Validation(String),

    /// No session with this ID is registered.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// Two sessions handed to the registry share an ID.
    #[error("duplicate session id: {0}")]
    DuplicateSession(SessionId),

    /// A non-administrator attempted an administrator action.
    #[error("player {player} may not {action}")]
    Unauthorized {
        /// The player who asked.
        player: PlayerId,
        /// What they tried to do.
        action: &'static str,
    },

    /// Session or persona rule violation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
