//! Fitness tracker analysis

use crate::models::{FitnessData, FitnessSummary, StepRating};

/// Daily step average below which the rating flips to below-target
pub const DAILY_STEP_TARGET: f64 = 8000.0;

/// Compute the average step count and rate it against the daily target.
///
/// The average of an empty sequence is 0.0. An average of exactly 8000
/// counts as on-target (the comparison is strictly less-than). Activities
/// pass through unchanged.
pub fn analyze_fitness(data: &FitnessData) -> FitnessSummary {
    let average_steps = if data.daily_steps.is_empty() {
        0.0
    } else {
        data.daily_steps.iter().map(|&s| s as f64).sum::<f64>() / data.daily_steps.len() as f64
    };

    let rating = if average_steps < DAILY_STEP_TARGET {
        StepRating::BelowTarget
    } else {
        StepRating::OnTarget
    };

    FitnessSummary {
        average_steps,
        rating,
        activities: data.activities.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_steps_average_is_zero() {
        let summary = analyze_fitness(&FitnessData::default());
        assert_eq!(summary.average_steps, 0.0);
        assert_eq!(summary.rating, StepRating::BelowTarget);
    }

    #[test]
    fn test_average_on_target_boundary() {
        // 8000 exactly is on target: the threshold comparison is strict
        let data = FitnessData {
            daily_steps: vec![10000, 6000],
            activities: vec![],
        };
        let summary = analyze_fitness(&data);
        assert_eq!(summary.average_steps, 8000.0);
        assert_eq!(summary.rating, StepRating::OnTarget);
    }

    #[test]
    fn test_below_target() {
        let data = FitnessData {
            daily_steps: vec![4000, 5000, 6000],
            activities: vec![],
        };
        let summary = analyze_fitness(&data);
        assert_eq!(summary.average_steps, 5000.0);
        assert_eq!(summary.rating, StepRating::BelowTarget);
    }

    #[test]
    fn test_activities_pass_through() {
        let data = FitnessData {
            daily_steps: vec![9000],
            activities: vec!["Joggen".to_string(), "Yoga".to_string()],
        };
        let summary = analyze_fitness(&data);
        assert_eq!(summary.activities, vec!["Joggen", "Yoga"]);
    }
}
