use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::IpSource;
use crate::error::{Error, Result};

const IP_LOOKUP_URL: &str = "https://api.ip.sb/ip";

// The lookup service answers 4xx to requests without a recognizable
// browser user agent.
const LOOKUP_USER_AGENT: &str = "Mozilla";

/// Resolves the public IP by asking an external what-is-my-IP service.
pub struct ExternalIpSource {
    client: Client,
    endpoint: String,
}

impl ExternalIpSource {
    pub fn new() -> Self {
        Self::with_endpoint(IP_LOOKUP_URL)
    }

    /// Same resolver against an alternate lookup URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ExternalIpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpSource for ExternalIpSource {
    async fn current_ip(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("User-Agent", LOOKUP_USER_AGENT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status()));
        }

        let body = response.text().await.map_err(Error::Decode)?;

        Ok(body.trim().to_string())
    }
}
