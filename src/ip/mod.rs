mod external;

pub use external::ExternalIpSource;

use async_trait::async_trait;

use crate::error::Result;

/// Source of the machine's current public IP address.
///
/// The daemon only needs the text of the address; implementations return
/// it opaquely, without parsing or validating the format.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Look up the current public IP.
    async fn current_ip(&self) -> Result<String>;
}
