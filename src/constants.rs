//! Application constants for the season processor
//!
//! This module contains the input format definition, the averaging weights,
//! and the output naming helpers used throughout the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field separator within a season line
pub const FIELD_SEPARATOR: char = ';';

/// Number of statistic fields per season line
pub const SEASON_FIELD_COUNT: usize = 7;

/// Field names in fixed column order
pub const FIELD_NAMES: &[&str] = &[
    "Wins",
    "Draws",
    "Losses",
    "GoalsScored",
    "GoalsTaken",
    "ShotsAverage",
    "GoalsPerShot",
];

/// UTF-8 byte-order marker optionally present at the start of the file
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Averaging Window
// =============================================================================

/// Per-season weights, in chronological order (oldest season first).
///
/// The window size is the length of this table; the aggregator consumes
/// exactly that many seasons from the front of the input sequence.
pub const SEASON_WEIGHTS: &[f64] = &[1.0, 0.9, 0.8];

/// Number of seasons consumed by the averaging window
pub const SEASON_WINDOW: usize = SEASON_WEIGHTS.len();

/// Fixed divisor applied to the weighted sum.
///
/// Kept as a literal rather than derived from the weights: the published
/// output format depends on this exact value.
pub const WEIGHT_DIVISOR: f64 = 2.7;

/// Decimal places every average is rounded to
pub const AVERAGE_DECIMALS: u32 = 2;

// =============================================================================
// Output
// =============================================================================

/// Extension of the generated summary file
pub const OUTPUT_EXTENSION: &str = "json";

/// Get the summary filename for a team name
pub fn output_filename(team_name: &str) -> String {
    format!("{}.{}", team_name, OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_weights() {
        assert_eq!(SEASON_WINDOW, 3);
        assert_eq!(SEASON_WEIGHTS.len(), SEASON_WINDOW);
        let weight_sum: f64 = SEASON_WEIGHTS.iter().sum();
        assert!((weight_sum - WEIGHT_DIVISOR).abs() < 1e-12);
    }

    #[test]
    fn test_field_names_match_field_count() {
        assert_eq!(FIELD_NAMES.len(), SEASON_FIELD_COUNT);
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("teamA"), "teamA.json");
        assert_eq!(output_filename("teamX.v2"), "teamX.v2.json");
    }
}
