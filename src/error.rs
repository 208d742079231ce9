use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for updater operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the IP lookup and DNS record calls.
///
/// None of these are fatal to the daemon: the reconciliation loop logs
/// the failure and waits for the next tick.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed (connect failure, TLS failure, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    /// The response body could not be read or decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}
