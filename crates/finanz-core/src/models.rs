//! Domain models for finanz
//!
//! The wire formats keep the German field names of the data files the
//! assistant has always read (`kategorie`, `betrag`, `Prioritäten`, ...);
//! the Rust side uses English identifiers throughout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single bank transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "kategorie")]
    pub category: String,
    /// Negative = expense, positive = income
    #[serde(rename = "betrag")]
    pub amount: f64,
}

/// Savings priority a user can assign to a spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Hoch,
    Mittel,
    #[default]
    Niedrig,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hoch => "hoch",
            Self::Mittel => "mittel",
            Self::Niedrig => "niedrig",
        }
    }

    /// Fraction of the current spend the user is asked to cut
    pub fn discount(&self) -> f64 {
        match self {
            Self::Hoch => 0.5,
            Self::Mittel => 0.3,
            Self::Niedrig => 0.1,
        }
    }

    /// The discount as an integer percentage for display
    pub fn discount_percent(&self) -> u8 {
        match self {
            Self::Hoch => 50,
            Self::Mittel => 30,
            Self::Niedrig => 10,
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hoch" => Ok(Self::Hoch),
            "mittel" => Ok(Self::Mittel),
            "niedrig" => Ok(Self::Niedrig),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preferences document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Savings priority per category
    #[serde(rename = "Prioritäten", default)]
    pub priorities: BTreeMap<String, Priority>,
}

impl Preferences {
    /// Priority for a category; categories without one count as niedrig
    pub fn priority_for(&self, category: &str) -> Priority {
        self.priorities.get(category).copied().unwrap_or_default()
    }
}

/// Fitness tracker export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessData {
    #[serde(rename = "Schritte_pro_Tag", default)]
    pub daily_steps: Vec<u64>,
    #[serde(rename = "Sportaktivitäten", default)]
    pub activities: Vec<String>,
}

/// Aggregated expenses for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    /// Sum of absolute outflows, always non-negative
    pub total: f64,
}

/// A per-category savings recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSuggestion {
    pub category: String,
    /// Current spend
    pub current: f64,
    /// Suggested reduced spend
    pub suggested: f64,
    pub discount_percent: u8,
    pub priority: Priority,
}

/// Step-count rating against the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRating {
    BelowTarget,
    OnTarget,
}

impl StepRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowTarget => "below_target",
            Self::OnTarget => "on_target",
        }
    }
}

/// Outcome of the fitness analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessSummary {
    pub average_steps: f64,
    pub rating: StepRating,
    /// Declared activities, passed through unchanged
    pub activities: Vec<String>,
}

/// A validated savings goal
///
/// Construction goes through [`SavingsPlan::new`], so a plan in hand always
/// has a positive goal and a horizon of at least one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsPlan {
    /// Total amount to save, in Euro
    pub goal: f64,
    pub horizon_months: u32,
    /// Contribution per month needed to reach the goal
    pub monthly_rate: f64,
}

impl SavingsPlan {
    /// Validate goal and horizon and derive the monthly contribution
    pub fn new(goal: f64, horizon_months: u32) -> Result<Self> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "savings goal must be a positive amount, got {}",
                goal
            )));
        }
        if horizon_months == 0 {
            return Err(Error::InvalidInput(
                "horizon must be at least one month".to_string(),
            ));
        }
        let monthly_rate = goal / horizon_months as f64;
        Ok(Self {
            goal,
            horizon_months,
            monthly_rate,
        })
    }
}
