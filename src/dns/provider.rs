use async_trait::async_trait;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

/// A DNS provider managing a single A record chosen at construction.
///
/// The record's endpoint is part of the implementation's identity, so the
/// operations take no domain/name parameters; both always address the
/// same record.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Read the currently published IP, or `None` if no record exists yet.
    async fn query(&self) -> Result<Option<String>>;

    /// Publish a new IP for the record.
    async fn update(&self, ip: &str) -> Result<()>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;
}
