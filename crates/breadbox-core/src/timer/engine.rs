//! Timer engine implementation.
//!
//! The timer engine is a wall-clock-based state machine. It does not run
//! internal threads - the caller is responsible for calling `tick()`
//! periodically. Remaining time is recomputed from the armed deadline on
//! every tick, so delayed or throttled ticks never cause drift.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused | Finished)
//! Paused -> (Running | Finished)
//! ```
//!
//! Rest mode follows the same shape with `Resting` in place of `Running`.
//! Guarded transitions that don't apply are silent no-ops returning `None`;
//! a race between UI affordances and user input is not an error.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start();
//! // In a loop:
//! engine.tick(); // Returns Some(Event::TimerCompleted) when time is up
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::now_ms;
use crate::events::Event;

pub const DEFAULT_FOCUS_SECONDS: u64 = 25 * 60;
pub const DEFAULT_REST_SECONDS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Finished,
    /// Rest-mode counterpart of `Running`.
    Resting,
}

impl TimerStatus {
    /// True while a countdown is actively consuming wall-clock time.
    pub fn is_counting(self) -> bool {
        matches!(self, TimerStatus::Running | TimerStatus::Resting)
    }
}

/// Core timer state machine.
///
/// Tracks focus and rest countdowns independently; exactly one countdown
/// deadline exists at a time, owned by this instance. Construct separate
/// instances freely - there is no global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    status: TimerStatus,
    seconds_left: u64,
    rest_seconds_left: u64,
    initial_seconds: u64,
    rest_initial_seconds: u64,
    /// Focus duration captured at the instant `start()` was accepted.
    /// Survives a later reset, so a given-up session still reports the
    /// originally intended duration.
    last_session_seconds: u64,
    countdown: Countdown,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::with_durations(DEFAULT_FOCUS_SECONDS, DEFAULT_REST_SECONDS)
    }

    pub fn with_durations(focus_seconds: u64, rest_seconds: u64) -> Self {
        Self {
            mode: TimerMode::Focus,
            status: TimerStatus::Idle,
            seconds_left: focus_seconds,
            rest_seconds_left: rest_seconds,
            initial_seconds: focus_seconds,
            rest_initial_seconds: rest_seconds,
            last_session_seconds: focus_seconds,
            countdown: Countdown::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Seconds left for the active mode.
    pub fn current_seconds_left(&self) -> u64 {
        match self.mode {
            TimerMode::Focus => self.seconds_left,
            TimerMode::Rest => self.rest_seconds_left,
        }
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    pub fn rest_seconds_left(&self) -> u64 {
        self.rest_seconds_left
    }

    pub fn initial_seconds(&self) -> u64 {
        self.initial_seconds
    }

    pub fn rest_initial_seconds(&self) -> u64 {
        self.rest_initial_seconds
    }

    /// Baseline duration for the active mode.
    pub fn current_initial_seconds(&self) -> u64 {
        match self.mode {
            TimerMode::Focus => self.initial_seconds,
            TimerMode::Rest => self.rest_initial_seconds,
        }
    }

    pub fn last_session_seconds(&self) -> u64 {
        self.last_session_seconds
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            status: self.status,
            mode: self.mode,
            seconds_left: self.current_seconds_left(),
            initial_seconds: self.current_initial_seconds(),
            last_session_seconds: self.last_session_seconds,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.start_at(now_ms())
    }

    /// Arm a countdown from the active mode's current seconds.
    ///
    /// No-op while already counting, and never starts from zero.
    pub fn start_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.status.is_counting() {
            return None;
        }
        let duration = self.current_seconds_left();
        if duration == 0 {
            return None;
        }

        // Re-arming drops any stale deadline, so repeated start/resume
        // cycles can never stack countdowns.
        self.countdown.disarm();
        self.countdown.arm_at(duration, now_ms);
        match self.mode {
            TimerMode::Focus => {
                self.last_session_seconds = self.seconds_left;
                self.status = TimerStatus::Running;
            }
            TimerMode::Rest => self.status = TimerStatus::Resting,
        }
        Some(Event::TimerStarted {
            mode: self.mode,
            duration_secs: duration,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(now_ms())
    }

    /// Snapshot the exact remaining seconds, then stop counting.
    pub fn pause_at(&mut self, now_ms: u64) -> Option<Event> {
        if !self.status.is_counting() {
            return None;
        }
        let remaining = self
            .countdown
            .remaining_at(now_ms)
            .unwrap_or(self.current_seconds_left());
        self.countdown.disarm();
        self.set_current_seconds(remaining);
        self.status = TimerStatus::Paused;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: remaining,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.resume_at(now_ms())
    }

    pub fn resume_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.status != TimerStatus::Paused {
            return None;
        }
        let remaining = self.current_seconds_left();
        if remaining == 0 {
            // Nothing left to count; complete immediately.
            self.status = TimerStatus::Finished;
            return Some(Event::TimerCompleted {
                mode: self.mode,
                at: Utc::now(),
            });
        }
        self.countdown.disarm();
        self.countdown.arm_at(remaining, now_ms);
        self.status = match self.mode {
            TimerMode::Focus => TimerStatus::Running,
            TimerMode::Rest => TimerStatus::Resting,
        };
        Some(Event::TimerResumed {
            mode: self.mode,
            remaining_secs: remaining,
            at: Utc::now(),
        })
    }

    /// Restore the active mode's baseline and return to `Idle`.
    ///
    /// Legal from any state.
    pub fn reset(&mut self) -> Option<Event> {
        self.countdown.disarm();
        match self.mode {
            TimerMode::Focus => {
                self.seconds_left = self.initial_seconds;
                self.last_session_seconds = self.initial_seconds;
            }
            TimerMode::Rest => self.rest_seconds_left = self.rest_initial_seconds,
        }
        self.status = TimerStatus::Idle;
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Force immediate completion, zeroing the active mode's countdown.
    pub fn complete(&mut self) -> Option<Event> {
        self.countdown.disarm();
        self.set_current_seconds(0);
        self.status = TimerStatus::Finished;
        Some(Event::TimerForced {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    /// Call periodically while counting. Recomputes remaining seconds from
    /// the armed deadline and returns `Some(Event::TimerCompleted)` exactly
    /// once when the countdown expires.
    pub fn tick_at(&mut self, now_ms: u64) -> Option<Event> {
        if !self.status.is_counting() {
            return None;
        }
        let remaining = self.countdown.remaining_at(now_ms)?;
        self.set_current_seconds(remaining);
        if remaining == 0 {
            self.countdown.disarm();
            self.status = TimerStatus::Finished;
            return Some(Event::TimerCompleted {
                mode: self.mode,
                at: Utc::now(),
            });
        }
        None
    }

    /// Update the focus-mode baseline.
    ///
    /// Applies only while in focus mode. The visible countdown syncs
    /// immediately when not counting; a running or paused session keeps
    /// its current remaining time and picks up the new baseline on the
    /// next reset.
    pub fn set_initial_seconds(&mut self, seconds: u64) {
        if self.mode != TimerMode::Focus {
            return;
        }
        self.initial_seconds = seconds;
        if matches!(self.status, TimerStatus::Idle | TimerStatus::Finished) {
            self.seconds_left = seconds;
            self.last_session_seconds = seconds;
        }
    }

    /// Update the rest-mode baseline.
    ///
    /// The baseline always updates; the visible rest countdown syncs only
    /// when rest mode is active and not counting.
    pub fn set_rest_initial_seconds(&mut self, seconds: u64) {
        self.rest_initial_seconds = seconds;
        if self.mode == TimerMode::Rest
            && matches!(self.status, TimerStatus::Idle | TimerStatus::Finished)
        {
            self.rest_seconds_left = seconds;
        }
    }

    /// Switch to rest mode at its configured baseline.
    ///
    /// Any active countdown is dropped; mode switches never carry one over.
    pub fn transition_to_rest(&mut self) -> Option<Event> {
        self.countdown.disarm();
        self.mode = TimerMode::Rest;
        self.status = TimerStatus::Idle;
        self.rest_seconds_left = self.rest_initial_seconds;
        self.seconds_left = 0;
        Some(Event::ModeChanged {
            mode: self.mode,
            initial_secs: self.rest_initial_seconds,
            at: Utc::now(),
        })
    }

    /// Skip rest and return to focus mode at its configured baseline.
    pub fn skip_rest(&mut self) -> Option<Event> {
        self.countdown.disarm();
        self.mode = TimerMode::Focus;
        self.status = TimerStatus::Idle;
        self.seconds_left = self.initial_seconds;
        self.rest_seconds_left = 0;
        Some(Event::ModeChanged {
            mode: self.mode,
            initial_secs: self.initial_seconds,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_current_seconds(&mut self, seconds: u64) {
        match self.mode {
            TimerMode::Focus => self.seconds_left = seconds,
            TimerMode::Rest => self.rest_seconds_left = seconds,
        }
    }
}
