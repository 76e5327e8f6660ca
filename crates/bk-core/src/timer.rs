//! Round countdown.
//!
//! The timer does not keep wall-clock time. An external scheduler calls
//! [`RoundTimer::tick`] once per elapsed second while a round runs.

use serde::{Deserialize, Serialize};

/// Default round length in seconds.
pub const ROUND_SECONDS: u32 = 180;

/// Remaining time below which the countdown is shown as critical.
pub const CRITICAL_SECONDS: u32 = 30;

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was stopped or already at zero; nothing changed.
    Idle,
    /// One second counted down.
    Running {
        /// Seconds left after this tick.
        remaining: u32,
    },
    /// One second counted down and the round is nearly over.
    LowTime {
        /// Seconds left after this tick.
        remaining: u32,
    },
    /// The countdown reached zero and the timer stopped.
    Expired,
}

/// Countdown for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(ROUND_SECONDS)
    }
}

impl RoundTimer {
    /// A stopped timer showing the full duration (at least one second).
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Round length in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-arm at the full duration and start counting.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    /// Stop counting, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Count down one second.
    ///
    /// `low_time` is the threshold at or below which a non-zero remainder
    /// reports [`TickOutcome::LowTime`].
    pub fn tick(&mut self, low_time: u32) -> TickOutcome {
        if !self.running || self.remaining == 0 {
            return TickOutcome::Idle;
        }
        self.remaining -= 1;
        match self.remaining {
            0 => {
                self.running = false;
                TickOutcome::Expired
            }
            r if r <= low_time => TickOutcome::LowTime { remaining: r },
            r => TickOutcome::Running { remaining: r },
        }
    }

    /// Remaining time as `m:ss`.
    pub fn clock_text(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    /// Fraction of the round left, from 1.0 at start to 0.0 at expiry.
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.duration)
    }

    /// True while less than [`CRITICAL_SECONDS`] remain.
    pub fn is_critical(&self) -> bool {
        self.remaining < CRITICAL_SECONDS
    }
}
