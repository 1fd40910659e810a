//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `dashboard` - Dashboard, spending and fitness views
//! - `report` - Monthly report generation
//! - `send` - Report delivery via the mail relay
//!
//! Shared utilities (source loading, warning output, bar rendering) live
//! here in the module root.

pub mod dashboard;
pub mod report;
pub mod send;

// Re-export command functions for main.rs
pub use dashboard::*;
pub use report::*;
pub use send::*;

use std::path::Path;

use finanz_core::loader::{
    load_fitness_or_default, load_preferences_or_default, load_transactions_or_default,
    LoadWarning,
};
use finanz_core::models::{FitnessData, Preferences, Transaction};

/// The three data sources after loading, with any degradation warnings
pub struct Sources {
    pub transactions: Vec<Transaction>,
    pub preferences: Preferences,
    pub fitness: FitnessData,
    pub warnings: Vec<LoadWarning>,
}

impl Sources {
    /// True when every data source came back empty
    pub fn all_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.preferences.priorities.is_empty()
            && self.fitness.daily_steps.is_empty()
            && self.fitness.activities.is_empty()
    }
}

/// Load all three data sources, degrading per source: a missing or
/// malformed file becomes an empty default plus a warning, and the run
/// continues with whatever data is available.
pub fn load_sources(transactions: &Path, preferences: &Path, fitness: &Path) -> Sources {
    let (transactions, w1) = load_transactions_or_default(transactions);
    let (preferences, w2) = load_preferences_or_default(preferences);
    let (fitness, w3) = load_fitness_or_default(fitness);
    let warnings = [w1, w2, w3].into_iter().flatten().collect();
    Sources {
        transactions,
        preferences,
        fitness,
        warnings,
    }
}

/// Print degradation warnings to stderr
pub fn print_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("⚠️  {}", warning);
    }
}

/// Render a fixed-width Unicode bar for a value relative to the maximum
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }
    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated. Counts chars, not bytes, so umlauts are safe.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
