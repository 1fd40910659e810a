//! Email delivery of the monthly report
//!
//! One-shot submission to an SMTP relay: validate both addresses, build the
//! message, upgrade the connection with STARTTLS, authenticate, send. The
//! caller decides what to do with a failure; there is no retry or queueing.

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::report::REPORT_SUBJECT;

/// Connection parameters for the mail relay
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MailSettings {
    /// Relay hostname, e.g. smtp.example.com
    pub host: String,
    /// Submission port; 587 is the STARTTLS default
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login user, usually the sender address
    pub username: String,
}

fn default_port() -> u16 {
    587
}

/// Shape of the settings file; relay parameters live in the `[smtp]` table
#[derive(Debug, Deserialize)]
struct SettingsFile {
    smtp: MailSettings,
}

impl MailSettings {
    /// Load relay settings from a TOML file's `[smtp]` table.
    ///
    /// A missing file is not an error; the caller falls back to CLI flags.
    pub fn load(path: &Path) -> Result<Option<MailSettings>> {
        if !path.exists() {
            debug!(path = %path.display(), "no mail settings file");
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&raw)?;
        debug!(path = %path.display(), host = %file.smtp.host, "loaded mail settings");
        Ok(Some(file.smtp))
    }
}

/// Parse an address, mapping syntax failures to [`Error::InvalidAddress`]
pub fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| Error::InvalidAddress(format!("{}: {}", address, e)))
}

/// Sends reports through an SMTP relay
pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl Notifier {
    /// Build a STARTTLS transport for the relay. No connection is opened
    /// until a message is actually sent.
    pub fn new(settings: &MailSettings, password: &str) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                password.to_string(),
            ))
            .build();
        Ok(Self {
            transport,
            host: settings.host.clone(),
        })
    }

    /// Send the report as a plain-text mail from sender to recipient.
    ///
    /// Both addresses are validated before any connection is opened. A
    /// transport or authentication failure comes back as [`Error::Smtp`]
    /// with the underlying cause attached.
    pub async fn send_report(&self, sender: &str, recipient: &str, report: &str) -> Result<()> {
        let from = parse_mailbox(sender)?;
        let to = parse_mailbox(recipient)?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(REPORT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(report.to_string())?;

        debug!(host = %self.host, "submitting report to mail relay");
        self.transport.send(message).await?;
        info!(recipient, "report mail accepted by relay");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_mailbox() {
        assert!(parse_mailbox("user@example.com").is_ok());
        assert!(parse_mailbox("Max Mustermann <max@example.com>").is_ok());
        assert!(parse_mailbox("  padded@example.com ").is_ok());

        let err = parse_mailbox("not-an-address").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));
        assert!(parse_mailbox("").is_err());
        assert!(parse_mailbox("zwei@@example.com").is_err());
    }

    #[tokio::test]
    async fn test_send_report_rejects_bad_addresses_before_connecting() {
        let settings = MailSettings {
            host: "localhost".to_string(),
            port: 587,
            username: "user".to_string(),
        };
        let notifier = Notifier::new(&settings, "secret").unwrap();

        // Invalid sender: fails during validation, no connection is attempted
        let err = notifier
            .send_report("kaputt", "ok@example.com", "Bericht")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));

        // Invalid recipient likewise
        let err = notifier
            .send_report("ok@example.com", "kaputt", "Bericht")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));
    }

    #[test]
    fn test_mail_settings_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = MailSettings::load(&dir.path().join("finanz.toml")).unwrap();
        assert!(settings.is_none());
    }

    #[test]
    fn test_mail_settings_load_with_default_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finanz.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[smtp]\nhost = \"smtp.example.com\"\nusername = \"max@example.com\"\n")
            .unwrap();

        let settings = MailSettings::load(&path).unwrap().unwrap();
        assert_eq!(settings.host, "smtp.example.com");
        assert_eq!(settings.port, 587);
        assert_eq!(settings.username, "max@example.com");
    }

    #[test]
    fn test_mail_settings_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finanz.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[smtp]\nhost = 42\n").unwrap();

        assert!(MailSettings::load(&path).is_err());
    }
}
