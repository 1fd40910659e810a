//! JSON data source loading
//!
//! Three flat files feed the assistant: bank transactions, savings
//! preferences, and fitness tracker data. Each source has a strict loader
//! that fails on any defect and a degrading `*_or_default` loader that
//! recovers to the empty default plus a user-visible warning, so one broken
//! file never takes the whole run down.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{FitnessData, Preferences, Transaction};

/// A recovered data source problem, surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file does not exist
    Missing { path: PathBuf },
    /// The file exists but could not be read or parsed
    Unreadable { path: PathBuf, detail: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "Datei {} nicht gefunden.", path.display()),
            Self::Unreadable { path, detail } => write!(
                f,
                "Fehler beim Parsen der Datei {}: {}",
                path.display(),
                detail
            ),
        }
    }
}

/// Load the transactions file (strict)
///
/// The document must be a JSON array of transaction records. A record with
/// a missing or mistyped key rejects the whole load, naming the record index.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&raw)?;

    let mut transactions = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let tx: Transaction = serde_json::from_value(record).map_err(|e| {
            Error::InvalidData(format!("transaction record {} is malformed: {}", index, e))
        })?;
        transactions.push(tx);
    }

    debug!(path = %path.display(), count = transactions.len(), "loaded transactions");
    Ok(transactions)
}

/// Load the preferences file (strict)
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    read_json(path)
}

/// Load the fitness data file (strict)
pub fn load_fitness(path: &Path) -> Result<FitnessData> {
    read_json(path)
}

/// Degrading form of [`load_transactions`]
pub fn load_transactions_or_default(path: &Path) -> (Vec<Transaction>, Option<LoadWarning>) {
    or_default(path, load_transactions(path))
}

/// Degrading form of [`load_preferences`]
pub fn load_preferences_or_default(path: &Path) -> (Preferences, Option<LoadWarning>) {
    or_default(path, load_preferences(path))
}

/// Degrading form of [`load_fitness`]
pub fn load_fitness_or_default(path: &Path) -> (FitnessData, Option<LoadWarning>) {
    or_default(path, load_fitness(path))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "loaded data source");
    Ok(value)
}

/// Map a load failure to the default value plus a warning for the user
fn or_default<T: Default>(path: &Path, result: Result<T>) -> (T, Option<LoadWarning>) {
    match result {
        Ok(value) => (value, None),
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "data source missing, continuing with defaults");
            (
                T::default(),
                Some(LoadWarning::Missing {
                    path: path.to_path_buf(),
                }),
            )
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data source unreadable, continuing with defaults");
            (
                T::default(),
                Some(LoadWarning::Unreadable {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                }),
            )
        }
    }
}
