//! Notifications and audio cues produced by game operations.
//!
//! The core never renders or plays anything itself. Each mutating operation
//! appends at most one [`Notification`] and at most one [`Cue`] to a
//! [`Feedback`] log, which the presentation layer drains.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The action succeeded.
    Success,
    /// The action was rejected.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral status change.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A status message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Presentation severity.
    pub severity: Severity,
    /// Message text.
    pub text: String,
    /// When the message was emitted.
    pub at: DateTime<Utc>,
}

/// A named sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// A player joined.
    Admission,
    /// The round timer ran out.
    Alarm,
    /// Voting opened or a vote was toggled.
    Vote,
    /// An action was confirmed.
    Confirmation,
    /// One second passed with little time left.
    Tick,
}

impl Cue {
    /// File stem the presentation layer maps to a sound asset.
    pub fn asset(self) -> &'static str {
        match self {
            Self::Admission | Self::Confirmation => "success",
            Self::Alarm => "alarm",
            Self::Vote => "vote",
            Self::Tick => "timer-tick",
        }
    }
}

/// Output log of notifications and cues, with a global mute.
///
/// Muting drops cues at the source and never touches game state.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    notifications: Vec<Notification>,
    cues: Vec<Cue>,
    muted: bool,
}

impl Feedback {
    /// An empty, unmuted log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification.
    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(%severity, %text, "notification");
        self.notifications.push(Notification {
            severity,
            text,
            at: Utc::now(),
        });
    }

    /// Record a success notification.
    pub fn success(&mut self, text: impl Into<String>) {
        self.notify(Severity::Success, text);
    }

    /// Record an error notification.
    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(Severity::Error, text);
    }

    /// Record a warning notification.
    pub fn warning(&mut self, text: impl Into<String>) {
        self.notify(Severity::Warning, text);
    }

    /// Record an info notification.
    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(Severity::Info, text);
    }

    /// Record a cue unless muted.
    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        self.cues.push(cue);
    }

    /// Whether cues are currently dropped.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mute or unmute cues.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute switch and return the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Pending cues, oldest first.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Take all pending notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Take all pending cues.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Number of pending notifications with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }

    /// Number of pending occurrences of a cue.
    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}
