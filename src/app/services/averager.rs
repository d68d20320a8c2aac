//! Weighted averaging across the season window.
//!
//! Combines one value per season using the fixed weights from
//! [`crate::constants::SEASON_WEIGHTS`] and the fixed 2.7 divisor. The
//! weighting deliberately decreases with recency and the divisor is not a
//! normalization; both are part of the published output format and must not
//! be altered.

use crate::constants::{AVERAGE_DECIMALS, SEASON_WEIGHTS, SEASON_WINDOW, WEIGHT_DIVISOR};

/// Compute the weighted average of one statistic across the season window.
///
/// `window` holds one value per season in chronological order (oldest first)
/// and must be exactly [`SEASON_WINDOW`] values long. The result is rounded
/// to two decimal places, ties rounding away from zero.
pub fn weighted_average(window: &[f64]) -> f64 {
    debug_assert_eq!(window.len(), SEASON_WINDOW);

    let weighted_sum: f64 = window
        .iter()
        .zip(SEASON_WEIGHTS)
        .map(|(value, weight)| value * weight)
        .sum();

    round_to_places(weighted_sum / WEIGHT_DIVISOR, AVERAGE_DECIMALS)
}

/// Round to a fixed number of decimal places, half away from zero.
fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
