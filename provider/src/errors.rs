use fetcher::errors::FetcherError;
use thiserror::Error;

/// Every way the price service can fail collapses into "provider
/// unavailable" for the user; the variant keeps the detail for the log.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to reach the price service")]
    Transport(#[from] FetcherError),
    #[error("Price service answered with status {0}")]
    BadStatus(u16),
    #[error("Price service response has wrong shape: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
