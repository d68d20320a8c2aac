//! Core data structures for season processing.
//!
//! Defines the per-season statistics record and the aggregated team summary
//! that is serialized to JSON.

use serde::{Deserialize, Serialize};

/// Statistics for one competitive season, parsed from one input line.
///
/// All fields are stored as floating-point values regardless of semantic
/// intent (counts and rates alike), matching the input format.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRecord {
    pub wins: f64,
    pub draws: f64,
    pub losses: f64,
    pub goals_scored: f64,
    pub goals_taken: f64,
    pub shots_average: f64,
    pub goals_per_shot: f64,
}

/// Weighted-average summary for one team, built from the season window.
///
/// The serialized key names are part of the published output format. The
/// `ShotsAverage` key holds the averaged per-season ShotsAverage field; the
/// collision with the input field name is intentional and preserved for
/// compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "WinsAverage")]
    pub wins_average: f64,
    #[serde(rename = "DrawsAverage")]
    pub draws_average: f64,
    #[serde(rename = "LossesAverage")]
    pub losses_average: f64,
    #[serde(rename = "GoalsScoredAverage")]
    pub goals_scored_average: f64,
    #[serde(rename = "GoalsTakenAverage")]
    pub goals_taken_average: f64,
    #[serde(rename = "ShotsAverage")]
    pub shots_average: f64,
    #[serde(rename = "GoalsPerShotAverage")]
    pub goals_per_shot_average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_with_published_keys() {
        let summary = StatsSummary {
            name: "teamA".to_string(),
            wins_average: 9.93,
            draws_average: 5.04,
            losses_average: 3.04,
            goals_scored_average: 29.22,
            goals_taken_average: 14.52,
            shots_average: 12.21,
            goals_per_shot_average: 0.2,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["Name"], "teamA");
        for key in [
            "WinsAverage",
            "DrawsAverage",
            "LossesAverage",
            "GoalsScoredAverage",
            "GoalsTakenAverage",
            "ShotsAverage",
            "GoalsPerShotAverage",
        ] {
            assert!(value[key].is_number(), "missing numeric key {}", key);
        }
        assert_eq!(value["ShotsAverage"], 12.21);
    }

    #[test]
    fn test_summary_round_trips() {
        let summary = StatsSummary {
            name: "teamB".to_string(),
            wins_average: 1.0,
            draws_average: 2.0,
            losses_average: 3.0,
            goals_scored_average: 4.0,
            goals_taken_average: 5.0,
            shots_average: 6.0,
            goals_per_shot_average: 7.0,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: StatsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
