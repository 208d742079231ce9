use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::provider::{Credentials, DnsProvider};
use crate::error::{Error, Result};

const GODADDY_API_BASE: &str = "https://api.godaddy.com/v1";

/// GoDaddy DNS client for one A record.
///
/// The endpoint URL is derived from (domain, record name) once at
/// construction and shared by both the GET and the PUT; it never changes
/// for the lifetime of the client.
pub struct GoDaddyClient {
    client: Client,
    endpoint: String,
    record_name: String,
    credentials: Credentials,
}

/// Record object GoDaddy expects in the PUT body for a non-SRV update.
/// The "string" placeholders and numeric defaults are required by the
/// provider's schema but otherwise inert for A records.
#[derive(Debug, Serialize)]
struct RecordUpdate {
    data: String,
    name: String,
    port: u16,
    priority: u32,
    protocol: String,
    service: String,
    ttl: u32,
    #[serde(rename = "type")]
    record_type: String,
    weight: u32,
}

/// The only field read back from a published record.
#[derive(Debug, Deserialize)]
struct RecordAnswer {
    data: String,
}

fn record_endpoint(api_base: &str, domain: &str, name: &str) -> String {
    format!("{}/domains/{}/records/A/{}", api_base, domain, name)
}

fn update_payload(name: &str, ip: &str) -> [RecordUpdate; 1] {
    [RecordUpdate {
        data: ip.to_string(),
        name: name.to_string(),
        port: 1,
        priority: 0,
        protocol: "string".to_string(),
        service: "string".to_string(),
        ttl: 600,
        record_type: "A".to_string(),
        weight: 0,
    }]
}

impl GoDaddyClient {
    pub fn new(name: &str, domain: &str, credentials: Credentials) -> Self {
        Self::with_api_base(GODADDY_API_BASE, name, domain, credentials)
    }

    /// Same client against an alternate API base URL.
    pub fn with_api_base(api_base: &str, name: &str, domain: &str, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            endpoint: record_endpoint(api_base, domain, name),
            record_name: name.to_string(),
            credentials,
        }
    }

    fn auth_header(&self) -> String {
        format!(
            "sso-key {}:{}",
            self.credentials.api_key, self.credentials.api_secret
        )
    }
}

#[async_trait]
impl DnsProvider for GoDaddyClient {
    async fn query(&self) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status()));
        }

        let records: Vec<RecordAnswer> = response.json().await.map_err(Error::Decode)?;

        // An empty answer means the record has not been published yet.
        Ok(records.into_iter().next().map(|record| record.data))
    }

    async fn update(&self, ip: &str) -> Result<()> {
        let response = self
            .client
            .put(&self.endpoint)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .json(&update_payload(&self.record_name, ip))
            .send()
            .await?;

        // The provider signals a committed update with 200 exactly.
        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status()));
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "godaddy"
    }
}
