//! Scoring module - row score doubling, level and gravity rules
//!
//! Scoring is tied to discovery order within a single sweep: the first full
//! row found (scanning bottom to top) is worth 10, and each further row in the
//! same sweep is worth double the previous one. Clearing N rows at once
//! therefore scores `10 * (2^N - 1)`.

use crate::types::{BASE_ROW_SCORE, DROP_INTERVALS, DROP_INTERVAL_MIN_MS, LINES_PER_LEVEL};

/// Score for the `nth` row (1-based) cleared within one sweep
pub fn row_score(nth: u32) -> u32 {
    if nth == 0 {
        return 0;
    }
    BASE_ROW_SCORE.saturating_mul(1u32.checked_shl(nth - 1).unwrap_or(u32::MAX))
}

/// Total score for clearing `rows` rows in one sweep
pub fn sweep_score(rows: u32) -> u32 {
    (1..=rows).fold(0u32, |acc, n| acc.saturating_add(row_score(n)))
}

/// Level derived from cumulative lines
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, scaled to `base_ms`.
///
/// `base_ms` is the level 0 interval; higher levels follow the same curve
/// proportionally, never going below `DROP_INTERVAL_MIN_MS` unless the base is
/// already smaller.
pub fn drop_interval_for_level(level: u32, base_ms: u32) -> u32 {
    let idx = (level as usize).min(DROP_INTERVALS.len() - 1);
    let scaled = (base_ms as u64 * DROP_INTERVALS[idx] as u64 / DROP_INTERVALS[0] as u64) as u32;
    scaled.max(DROP_INTERVAL_MIN_MS.min(base_ms))
}
