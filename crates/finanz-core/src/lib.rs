//! Finanz Core Library
//!
//! Shared functionality for the finanz personal finance assistant:
//! - JSON data source loading with per-source degradation
//! - Expense aggregation per category
//! - Priority-driven savings recommendations
//! - Fitness tracker analysis
//! - Monthly report assembly
//! - Report delivery via an SMTP relay
//!
//! Everything except the loader and the notifier is pure: the presentation
//! layer feeds in plain values and renders whatever comes back.

pub mod error;
pub mod fitness;
pub mod loader;
pub mod models;
pub mod notify;
pub mod report;
pub mod spending;

pub use error::{Error, Result};
pub use fitness::{analyze_fitness, DAILY_STEP_TARGET};
pub use loader::{
    load_fitness, load_fitness_or_default, load_preferences, load_preferences_or_default,
    load_transactions, load_transactions_or_default, LoadWarning,
};
pub use models::{
    CategorySpending, FitnessData, FitnessSummary, Preferences, Priority, SavingsPlan,
    SavingsSuggestion, StepRating, Transaction,
};
pub use notify::{MailSettings, Notifier};
pub use report::{build_report, REPORT_SUBJECT};
pub use spending::{recommend_savings, spend_by_category};
