//! Recall grades fed to the scheduler.
//!
//! Grades are never chosen by the learner directly: they are derived from whether
//! the answer was right and how long it took. A slow correct answer counts as HARD,
//! a quick one as EASY. Latency stands in for confidence here; it is a heuristic.

use serde::{Deserialize, Serialize};

/// Answer time (ms) that maps to a normalized time of 1.0.
pub const REFERENCE_ANSWER_MS: f64 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    pub fn weight(self) -> f64 {
        match self {
            Grade::Again => 0.0,
            Grade::Hard => 0.5,
            Grade::Good => 1.0,
            Grade::Easy => 1.3,
        }
    }

    pub fn is_passing(self) -> bool {
        self != Grade::Again
    }

    pub fn from_performance(correct: bool, time_spent_ms: u64) -> Grade {
        if !correct {
            return Grade::Again;
        }

        let normalized = time_spent_ms as f64 / REFERENCE_ANSWER_MS;
        if normalized > 2.0 {
            Grade::Hard
        } else if normalized < 0.5 {
            Grade::Easy
        } else {
            Grade::Good
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_is_always_again() {
        assert_eq!(Grade::from_performance(false, 0), Grade::Again);
        assert_eq!(Grade::from_performance(false, 3_000), Grade::Again);
        assert_eq!(Grade::from_performance(false, 60_000), Grade::Again);
    }

    #[test]
    fn test_correct_grade_boundaries() {
        assert_eq!(Grade::from_performance(true, 4_999), Grade::Easy);
        assert_eq!(Grade::from_performance(true, 5_000), Grade::Good);
        assert_eq!(Grade::from_performance(true, 20_000), Grade::Good);
        assert_eq!(Grade::from_performance(true, 20_001), Grade::Hard);
    }

    #[test]
    fn test_weights() {
        let weights: Vec<f64> = Grade::ALL.iter().map(|g| g.weight()).collect();
        assert_eq!(weights, vec![0.0, 0.5, 1.0, 1.3]);
        assert!(!Grade::Again.is_passing());
        assert!(Grade::Hard.is_passing());
    }
}
