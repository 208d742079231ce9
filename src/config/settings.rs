use std::time::Duration;

use anyhow::{bail, Result};

/// Runtime configuration, built once at startup from the command line and
/// passed explicitly into the daemon and the DNS client constructor.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Host label of the A record (e.g. "home" for home.example.com).
    pub record_name: String,
    /// Parent domain the record lives under.
    pub domain: String,
    pub api_key: String,
    pub api_secret: String,
    /// How long to wait between reconciliation attempts.
    pub check_interval: Duration,
}

impl Settings {
    /// Validates the four identifiers and fixes the polling interval.
    ///
    /// Empty identifiers abort startup; the daemon never runs with a
    /// blank record name or credential.
    pub fn new(
        record_name: impl Into<String>,
        domain: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        interval_seconds: u64,
    ) -> Result<Self> {
        let record_name = record_name.into();
        let domain = domain.into();
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if record_name.is_empty() {
            bail!("record name must not be empty");
        }
        if domain.is_empty() {
            bail!("domain must not be empty");
        }
        if api_key.is_empty() {
            bail!("API key must not be empty");
        }
        if api_secret.is_empty() {
            bail!("API secret must not be empty");
        }

        Ok(Self {
            record_name,
            domain,
            api_key,
            api_secret,
            check_interval: Duration::from_secs(interval_seconds),
        })
    }
}
