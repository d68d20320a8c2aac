//! Aggregation of the season window into a team summary.
//!
//! Consumes exactly the first [`SEASON_WINDOW`](crate::constants::SEASON_WINDOW)
//! records of the parsed sequence, in order, and applies the weighted averager
//! to each statistic independently. Records beyond the window are ignored.

use tracing::debug;

use crate::app::services::averager::weighted_average;
use crate::constants::SEASON_WINDOW;
use crate::models::{SeasonRecord, StatsSummary};
use crate::{Error, Result};

/// Build the weighted-average summary for a team.
///
/// `seasons` must hold at least the full averaging window, oldest season
/// first. Fails with [`Error::InsufficientData`] otherwise; the window bound
/// is validated here because nothing downstream checks it.
pub fn summarize(seasons: &[SeasonRecord], name: impl Into<String>) -> Result<StatsSummary> {
    if seasons.len() < SEASON_WINDOW {
        return Err(Error::insufficient_data(SEASON_WINDOW, seasons.len()));
    }

    let window = &seasons[..SEASON_WINDOW];
    let name = name.into();
    debug!("aggregating {} seasons for team '{}'", window.len(), name);

    Ok(StatsSummary {
        name,
        wins_average: average_field(window, |s| s.wins),
        draws_average: average_field(window, |s| s.draws),
        losses_average: average_field(window, |s| s.losses),
        goals_scored_average: average_field(window, |s| s.goals_scored),
        goals_taken_average: average_field(window, |s| s.goals_taken),
        shots_average: average_field(window, |s| s.shots_average),
        goals_per_shot_average: average_field(window, |s| s.goals_per_shot),
    })
}

/// Average one statistic across the window.
fn average_field(window: &[SeasonRecord], field: impl Fn(&SeasonRecord) -> f64) -> f64 {
    let values: Vec<f64> = window.iter().map(field).collect();
    weighted_average(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(wins: f64) -> SeasonRecord {
        SeasonRecord {
            wins,
            draws: 0.0,
            losses: 0.0,
            goals_scored: 0.0,
            goals_taken: 0.0,
            shots_average: 0.0,
            goals_per_shot: 0.0,
        }
    }

    fn sample_seasons() -> Vec<SeasonRecord> {
        vec![
            SeasonRecord {
                wins: 10.0,
                draws: 5.0,
                losses: 3.0,
                goals_scored: 30.0,
                goals_taken: 15.0,
                shots_average: 12.5,
                goals_per_shot: 0.2,
            },
            SeasonRecord {
                wins: 8.0,
                draws: 6.0,
                losses: 4.0,
                goals_scored: 25.0,
                goals_taken: 18.0,
                shots_average: 11.0,
                goals_per_shot: 0.18,
            },
            SeasonRecord {
                wins: 12.0,
                draws: 4.0,
                losses: 2.0,
                goals_scored: 33.0,
                goals_taken: 10.0,
                shots_average: 13.2,
                goals_per_shot: 0.22,
            },
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_summarize_hand_computed_values() {
        let summary = summarize(&sample_seasons(), "teamA").unwrap();

        assert_eq!(summary.name, "teamA");
        assert_close(summary.wins_average, 9.93);
        assert_close(summary.draws_average, 5.04);
        assert_close(summary.losses_average, 3.04);
        assert_close(summary.goals_scored_average, 29.22);
        assert_close(summary.goals_taken_average, 14.52);
        assert_close(summary.shots_average, 12.21);
        assert_close(summary.goals_per_shot_average, 0.2);
    }

    #[test]
    fn test_summarize_ignores_records_beyond_window() {
        let mut seasons = sample_seasons();
        let expected = summarize(&seasons, "teamA").unwrap();

        seasons.push(season(100.0));
        let with_extra = summarize(&seasons, "teamA").unwrap();

        assert_eq!(with_extra, expected);
    }

    #[test]
    fn test_summarize_uses_records_in_order() {
        // Swapping seasons changes the result because the weights differ.
        let seasons = sample_seasons();
        let mut reversed = seasons.clone();
        reversed.reverse();

        let forward = summarize(&seasons, "teamA").unwrap();
        let backward = summarize(&reversed, "teamA").unwrap();
        assert_ne!(forward.wins_average, backward.wins_average);
    }

    #[test]
    fn test_summarize_rejects_too_few_seasons() {
        let seasons = vec![season(1.0), season(2.0)];
        let err = summarize(&seasons, "teamA").unwrap_err();

        match err {
            Error::InsufficientData { required, found } => {
                assert_eq!(required, SEASON_WINDOW);
                assert_eq!(found, 2);
            }
            other => panic!("expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_summarize_rejects_empty_input() {
        let err = summarize(&[], "teamA").unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData { found: 0, .. }
        ));
    }
}
