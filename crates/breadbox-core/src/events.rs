use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerStatus};

/// Every effective timer transition produces an Event.
/// The CLI prints them; a GUI layer would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero on its own.
    TimerCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// Completion was forced via `complete()` rather than reached naturally.
    TimerForced {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// The engine switched between focus and rest mode.
    ModeChanged {
        mode: TimerMode,
        initial_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        status: TimerStatus,
        mode: TimerMode,
        seconds_left: u64,
        initial_seconds: u64,
        last_session_seconds: u64,
        at: DateTime<Utc>,
    },
}
