//! Experience and leveling model.
//!
//! Pure functions over two quantities: minutes of completed focus time and
//! experience points. Level is never stored anywhere in the system -- it is
//! always recomputed from experience via [`compute_level`], so it cannot go
//! stale or diverge.
//!
//! Level thresholds are defined in *minutes of cumulative focus* and mapped
//! into experience space through [`experience_from_minutes`]. Tuning the
//! minutes table retunes every threshold without hand-editing experience
//! numbers.

use std::sync::LazyLock;

/// Cumulative focus minutes required to reach each level, indexed by level.
pub const LEVEL_MINUTES_THRESHOLDS: [u64; 11] = [
    0,    // level 0
    20,   // level 1
    60,   // level 2
    180,  // level 3 (3h)
    360,  // level 4 (6h)
    600,  // level 5 (10h)
    900,  // level 6 (15h)
    1200, // level 7 (20h)
    1500, // level 8 (25h)
    1800, // level 9 (30h)
    2100, // level 10 (35h)
];

static LEVEL_THRESHOLDS: LazyLock<Vec<u64>> = LazyLock::new(|| {
    LEVEL_MINUTES_THRESHOLDS
        .iter()
        .map(|&m| experience_from_minutes(m as f64))
        .collect()
});

/// Highest attainable level.
pub const MAX_LEVEL: usize = LEVEL_MINUTES_THRESHOLDS.len() - 1;

/// Experience required to reach each level, indexed by level.
///
/// `thresholds()[0]` is always `0`.
pub fn level_thresholds() -> &'static [u64] {
    &LEVEL_THRESHOLDS
}

/// Convert focus minutes to experience points.
///
/// Slightly superlinear in session length relative to the canonical
/// 25-minute unit: `round(10 * (minutes/25)^1.2)`. Non-positive input
/// yields zero.
pub fn experience_from_minutes(minutes: f64) -> u64 {
    if minutes <= 0.0 {
        return 0;
    }
    let normalized = minutes / 25.0;
    let gain = normalized.powf(1.2) * 10.0;
    gain.round().max(0.0) as u64
}

/// Experience gained from a focus session of `duration_seconds`.
pub fn experience_gain(duration_seconds: u64) -> u64 {
    experience_from_minutes(duration_seconds as f64 / 60.0)
}

/// Current level for a given amount of experience.
///
/// Returns the highest level whose threshold is met, clamped to
/// [`MAX_LEVEL`].
pub fn compute_level(experience: u64) -> usize {
    let thresholds = level_thresholds();
    let mut level = 0;
    for (idx, &threshold) in thresholds.iter().enumerate().rev() {
        if experience >= threshold {
            level = idx;
            break;
        }
    }
    level.min(MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_session_is_ten_xp() {
        assert_eq!(experience_from_minutes(25.0), 10);
    }

    #[test]
    fn non_positive_minutes_yield_zero() {
        assert_eq!(experience_from_minutes(0.0), 0);
        assert_eq!(experience_from_minutes(-5.0), 0);
    }

    #[test]
    fn longer_sessions_gain_superlinearly() {
        // 50 minutes beats two 25-minute sessions.
        assert!(experience_from_minutes(50.0) > 2 * experience_from_minutes(25.0));
    }

    #[test]
    fn gain_from_seconds_matches_minutes() {
        assert_eq!(experience_gain(25 * 60), 10);
        assert_eq!(experience_gain(0), 0);
    }

    #[test]
    fn thresholds_start_at_zero_and_ascend() {
        let t = level_thresholds();
        assert_eq!(t[0], 0);
        for pair in t.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(t.len(), MAX_LEVEL + 1);
    }

    #[test]
    fn level_zero_with_no_experience() {
        assert_eq!(compute_level(0), 0);
    }

    #[test]
    fn level_boundaries() {
        let t = level_thresholds();
        // Exactly at a threshold reaches the level; one below does not.
        assert_eq!(compute_level(t[1]), 1);
        assert_eq!(compute_level(t[1] - 1), 0);
        assert_eq!(compute_level(t[3]), 3);
    }

    #[test]
    fn level_clamps_at_max() {
        assert_eq!(compute_level(u64::MAX), MAX_LEVEL);
    }

    #[test]
    fn level_is_monotonic_in_experience() {
        let mut prev = 0;
        for xp in (0..5000).step_by(7) {
            let level = compute_level(xp);
            assert!(level >= prev);
            prev = level;
        }
    }
}
