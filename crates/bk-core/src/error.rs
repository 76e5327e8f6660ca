use crate::id::PlayerId;
use crate::session::Phase;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating sessions and personas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The roster already holds as many players as the session allows.
    #[error("session is full ({capacity} players)")]
    SessionFull {
        /// The session's fixed capacity.
        capacity: usize,
    },

    /// No player with this ID is on the roster.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// A string did not name one of the eight persona attributes.
    #[error("unknown attribute: \"{0}\"")]
    UnknownAttribute(String),

    /// A catalog table was given no values to draw from.
    #[error("catalog table \"{0}\" is empty")]
    EmptyTable(String),

    /// The operation is not allowed in the session's current phase.
    #[error("operation requires phase {expected}, session is {actual}")]
    InvalidPhase {
        /// The phase the operation needs.
        expected: Phase,
        /// The phase the session is in.
        actual: Phase,
    },
}
