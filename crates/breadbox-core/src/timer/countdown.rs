//! Drift-corrected countdown primitive.
//!
//! Remaining time is always recomputed from an absolute wall-clock deadline,
//! never accumulated from elapsed ticks. A late, missed, or throttled tick
//! therefore cannot make the displayed time fall behind real elapsed time.

use serde::{Deserialize, Serialize};

/// A single countdown toward a fixed wall-clock deadline.
///
/// Holds only the deadline. The caller drives progress by asking for
/// [`remaining_at`](Countdown::remaining_at) on whatever cadence it likes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Countdown {
    /// Absolute deadline in epoch milliseconds. `None` while disarmed.
    end_at_epoch_ms: Option<u64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown to expire `duration_secs` after `now_ms`.
    ///
    /// A zero duration never arms: the countdown stays (or becomes) inert.
    /// Re-arming replaces any prior deadline.
    pub fn arm_at(&mut self, duration_secs: u64, now_ms: u64) {
        if duration_secs == 0 {
            return;
        }
        self.end_at_epoch_ms = Some(now_ms.saturating_add(duration_secs.saturating_mul(1000)));
    }

    /// Clear the deadline without signaling anything. Idempotent.
    pub fn disarm(&mut self) {
        self.end_at_epoch_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.end_at_epoch_ms.is_some()
    }

    /// Whole seconds remaining at `now_ms`, rounded to the nearest second.
    ///
    /// `None` while disarmed. Never negative: a deadline already in the
    /// past reads as zero.
    pub fn remaining_at(&self, now_ms: u64) -> Option<u64> {
        let end = self.end_at_epoch_ms?;
        let remaining_ms = end.saturating_sub(now_ms);
        Some((remaining_ms + 500) / 1000)
    }
}
