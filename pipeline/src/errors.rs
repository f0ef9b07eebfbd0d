use provider::errors::ProviderError;
use thiserror::Error;

/// Failure side of one lookup. NotFound is an expected outcome and renders
/// as an informational reply; provider failures render as a user-visible
/// error and are logged, never retried.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No game matched the query")]
    NotFound,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
