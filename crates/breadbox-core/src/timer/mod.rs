mod countdown;
mod engine;

pub use countdown::Countdown;
pub use engine::{TimerEngine, TimerMode, TimerStatus, DEFAULT_FOCUS_SECONDS, DEFAULT_REST_SECONDS};

/// Current wall clock as milliseconds since the Unix epoch.
pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
