//! Finanz CLI - Persönlicher Finanzassistent
//!
//! Usage:
//!   finanz dashboard --goal 1200 --horizon 12   Full dashboard view
//!   finanz spending                             Expenses per category
//!   finanz fitness                              Fitness analysis
//!   finanz report --goal 1200 --horizon 12      Monthly report
//!   finanz send --goal 1200 --horizon 12 \
//!     --to du@example.com --from ich@example.com  Email the report

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use finanz_core::models::SavingsPlan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Dashboard { goal, horizon } => {
            let plan = savings_plan(goal, horizon)?;
            let sources = load(&cli);
            commands::cmd_dashboard(&sources, &plan)
        }
        Commands::Spending => {
            let sources = load(&cli);
            commands::cmd_spending(&sources)
        }
        Commands::Fitness => {
            let sources = load(&cli);
            commands::cmd_fitness(&sources)
        }
        Commands::Report {
            goal,
            horizon,
            ref output,
        } => {
            let plan = savings_plan(goal, horizon)?;
            let sources = load(&cli);
            commands::cmd_report(&sources, &plan, output.as_deref())
        }
        Commands::Send {
            goal,
            horizon,
            ref to,
            ref from,
            ref config,
            ref smtp_host,
            smtp_port,
            ref smtp_user,
        } => {
            let plan = savings_plan(goal, horizon)?;
            let sources = load(&cli);
            commands::cmd_send(
                &sources,
                &plan,
                commands::SendArgs {
                    to,
                    from,
                    config,
                    smtp_host: smtp_host.as_deref(),
                    smtp_port,
                    smtp_user: smtp_user.as_deref(),
                },
            )
            .await
        }
    }
}

/// Validate goal and horizon before anything else runs
fn savings_plan(goal: f64, horizon: u32) -> Result<SavingsPlan> {
    SavingsPlan::new(goal, horizon)
        .context("Bitte gib positive Werte für Sparziel und Zeitraum ein.")
}

/// Load the data sources and surface any degradation warnings
fn load(cli: &Cli) -> commands::Sources {
    let sources = commands::load_sources(&cli.transactions, &cli.preferences, &cli.fitness);
    commands::print_warnings(&sources.warnings);
    sources
}
