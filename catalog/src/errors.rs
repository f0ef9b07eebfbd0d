use fetcher::errors::FetcherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to download the catalog export")]
    Download(#[from] FetcherError),
    #[error("Catalog export answered with status {0}")]
    BadStatus(u16),
    #[error("Failed to parse the catalog export")]
    Parse(#[from] csv::Error),
}
