//! Report delivery via the mail relay
//!
//! Relay parameters resolve in two layers: CLI flags beat the `[smtp]`
//! table in the settings file, and the login user falls back to the sender
//! address. The password only ever comes from the environment.

use std::path::Path;

use anyhow::{bail, Context, Result};
use finanz_core::models::SavingsPlan;
use finanz_core::notify::{MailSettings, Notifier};
use tracing::debug;

use super::report::assemble_report;
use super::Sources;

/// Environment variable holding the relay password
pub const SMTP_PASSWORD_ENV: &str = "FINANZ_SMTP_PASSWORD";

/// Relay-related CLI arguments for the send command
pub struct SendArgs<'a> {
    pub to: &'a str,
    pub from: &'a str,
    pub config: &'a Path,
    pub smtp_host: Option<&'a str>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<&'a str>,
}

/// Resolve relay settings from the settings file and CLI overrides
pub fn resolve_mail_settings(args: &SendArgs<'_>) -> Result<MailSettings> {
    let from_file = MailSettings::load(args.config).with_context(|| {
        format!(
            "Konfigurationsdatei {} konnte nicht gelesen werden",
            args.config.display()
        )
    })?;
    debug!(found = from_file.is_some(), "mail settings file probed");

    let host = args
        .smtp_host
        .map(str::to_string)
        .or_else(|| from_file.as_ref().map(|s| s.host.clone()));
    let Some(host) = host else {
        bail!(
            "Kein SMTP-Server angegeben (--smtp-host oder [smtp] in {})",
            args.config.display()
        );
    };

    let port = args
        .smtp_port
        .or_else(|| from_file.as_ref().map(|s| s.port))
        .unwrap_or(587);
    let username = args
        .smtp_user
        .map(str::to_string)
        .or_else(|| from_file.as_ref().map(|s| s.username.clone()))
        .unwrap_or_else(|| args.from.to_string());

    Ok(MailSettings {
        host,
        port,
        username,
    })
}

pub async fn cmd_send(sources: &Sources, plan: &SavingsPlan, args: SendArgs<'_>) -> Result<()> {
    if sources.all_empty() {
        eprintln!("⚠️  Stelle sicher, dass alle Datenquellen vorhanden sind.");
    }

    let settings = resolve_mail_settings(&args)?;
    let password = std::env::var(SMTP_PASSWORD_ENV)
        .with_context(|| format!("{} ist nicht gesetzt", SMTP_PASSWORD_ENV))?;

    let report = assemble_report(sources, plan);

    println!(
        "📤 Sende Monatsbericht an {} über {}:{}...",
        args.to, settings.host, settings.port
    );

    let notifier = Notifier::new(&settings, &password)?;
    notifier
        .send_report(args.from, args.to, &report)
        .await
        .context("Fehler beim Senden der E-Mail")?;

    println!("✅ Bericht wurde per E-Mail gesendet.");
    Ok(())
}
