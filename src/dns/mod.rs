mod godaddy;
mod provider;

pub use godaddy::GoDaddyClient;
pub use provider::{Credentials, DnsProvider};
