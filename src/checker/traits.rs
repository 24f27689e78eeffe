// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::CheckError;

/// Source of HTTP status codes for endpoint URLs.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Issues a single GET to `url` and returns the response status code.
    async fn get_status(&self, url: &str) -> Result<u16, CheckError>;
}
