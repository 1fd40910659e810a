//! Monthly report command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use finanz_core::fitness::analyze_fitness;
use finanz_core::models::SavingsPlan;
use finanz_core::report::build_report;
use finanz_core::spending::{recommend_savings, spend_by_category};

use super::Sources;

/// Build the monthly report from the loaded sources
pub fn assemble_report(sources: &Sources, plan: &SavingsPlan) -> String {
    let spending = spend_by_category(&sources.transactions);
    let suggestions = recommend_savings(&spending, &sources.preferences);
    let fitness = analyze_fitness(&sources.fitness);
    build_report(plan, &spending, &suggestions, &fitness)
}

pub fn cmd_report(sources: &Sources, plan: &SavingsPlan, output: Option<&Path>) -> Result<()> {
    if sources.all_empty() {
        eprintln!("⚠️  Stelle sicher, dass alle Datenquellen vorhanden sind.");
    }

    let report = assemble_report(sources, plan);

    match output {
        Some(path) => {
            fs::write(path, &report).with_context(|| {
                format!(
                    "Bericht konnte nicht nach {} geschrieben werden",
                    path.display()
                )
            })?;
            println!("📄 Bericht gespeichert: {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}
