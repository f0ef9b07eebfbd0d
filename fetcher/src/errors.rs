use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("Outbound request failed")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to create header for outbound request")]
    InvalidHeader,
}

impl From<InvalidHeaderName> for FetcherError {
    fn from(_err: InvalidHeaderName) -> Self {
        Self::InvalidHeader
    }
}

impl From<InvalidHeaderValue> for FetcherError {
    fn from(_err: InvalidHeaderValue) -> Self {
        Self::InvalidHeader
    }
}
