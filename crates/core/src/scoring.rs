//! Scoring module - marathon scoring, leveling and gravity curve
//!
//! - Line clears score `LINE_SCORES[n] * level`, using the level before the
//!   clear is counted.
//! - Hard drops score 2 points per row; soft drops 1 point per gravity step.
//! - Level is `lines / 10 + 1`.
//! - Gravity follows the guideline curve, flat past level 20.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, MAX_SPEED_LEVEL, MIN_LEVEL};

/// Score for clearing `lines` rows at once (1-4) at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Score for a hard drop of `rows` rows
pub fn hard_drop_score(rows: i32) -> u32 {
    (rows.max(0) as u32) * 2
}

/// Level reached after clearing `total_lines` lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + MIN_LEVEL
}

/// Seconds per row at `level`
///
/// `(0.8 - (level - 1) * 0.007) ^ (level - 1)` with level clamped to 1..=20.
///
/// # Examples
///
/// ```
/// use marathon_core::scoring::drop_interval;
///
/// assert_eq!(drop_interval(1), 1.0);
/// assert!(drop_interval(2) < drop_interval(1));
/// assert_eq!(drop_interval(25), drop_interval(20));
/// ```
pub fn drop_interval(level: u32) -> f64 {
    let level = level.clamp(MIN_LEVEL, MAX_SPEED_LEVEL);
    let steps = (level - 1) as f64;
    (0.8 - steps * 0.007).powf(steps)
}
