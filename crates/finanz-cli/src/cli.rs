//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finanz - Persönlicher Finanzassistent
#[derive(Parser)]
#[command(name = "finanz")]
#[command(
    about = "Persönlicher Finanzassistent für Ausgaben, Sparziele und Fitness",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the transactions file
    #[arg(long, default_value = "bankdaten.json", global = true)]
    pub transactions: PathBuf,

    /// Path to the preferences file
    #[arg(long, default_value = "praeferenzen.json", global = true)]
    pub preferences: PathBuf,

    /// Path to the fitness data file
    #[arg(long, default_value = "fitnessdaten.json", global = true)]
    pub fitness: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the full dashboard (savings plan, spending, recommendations, fitness)
    Dashboard {
        /// Savings goal in Euro
        #[arg(short, long)]
        goal: f64,

        /// Months to reach the goal
        #[arg(long)]
        horizon: u32,
    },

    /// Show expenses per category
    Spending,

    /// Show the fitness analysis
    Fitness,

    /// Generate the monthly report
    Report {
        /// Savings goal in Euro
        #[arg(short, long)]
        goal: f64,

        /// Months to reach the goal
        #[arg(long)]
        horizon: u32,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Email the monthly report
    Send {
        /// Savings goal in Euro
        #[arg(short, long)]
        goal: f64,

        /// Months to reach the goal
        #[arg(long)]
        horizon: u32,

        /// Recipient address
        #[arg(long)]
        to: String,

        /// Sender address
        #[arg(long)]
        from: String,

        /// Mail settings file ([smtp] table with host/port/username)
        #[arg(long, default_value = "finanz.toml")]
        config: PathBuf,

        /// Relay host (overrides the settings file)
        #[arg(long)]
        smtp_host: Option<String>,

        /// Relay port (overrides the settings file)
        #[arg(long)]
        smtp_port: Option<u16>,

        /// Relay login user (overrides the settings file; defaults to the sender)
        #[arg(long)]
        smtp_user: Option<String>,
    },
}
