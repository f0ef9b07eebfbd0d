pub mod errors;

use std::collections::HashSet;

use common::titles::normalize;
use fetcher::{client::Fetcher, request::Request};
use tracing::{info, warn};

use crate::errors::CatalogError;

const TITLE_HEADER: &str = "game";
const AVAILABLE_HEADER: &str = "available";

/// Read-only snapshot of the subscription-service title list, keyed by
/// normalized title. Loaded once at startup; staleness is acceptable.
#[derive(Debug, Default, Clone)]
pub struct CatalogSet {
    titles: HashSet<String>,
}

impl CatalogSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Membership test for a raw display title.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(&normalize(title))
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Build the set from the raw text of a CSV export.
    pub fn from_export(body: &str) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = reader.headers()?.clone();
        let title_column = headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(TITLE_HEADER))
            .unwrap_or(0);
        let available_column = headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(AVAILABLE_HEADER));

        let mut titles = HashSet::new();

        for record in reader.records() {
            let record = record?;

            // rows the sheet explicitly marks as gone don't count as members
            if let Some(column) = available_column {
                if record
                    .get(column)
                    .is_some_and(|cell| cell.trim().eq_ignore_ascii_case("no"))
                {
                    continue;
                }
            }

            let Some(cell) = record.get(title_column) else {
                continue;
            };

            let key = normalize(cell);
            if !key.is_empty() {
                titles.insert(key);
            }
        }

        Ok(Self { titles })
    }
}

pub async fn fetch(url: &str) -> Result<CatalogSet, CatalogError> {
    let request = Request::builder().set_url(url).build();
    let response = Fetcher::new().make_web_request(request).await?;

    if !response.is_success() {
        return Err(CatalogError::BadStatus(response.status));
    }

    CatalogSet::from_export(&response.body)
}

/// Host-facing loader. Membership degrades to "not found" when the sheet is
/// unreachable instead of taking the bot down with it.
pub async fn load_or_empty(url: &str) -> CatalogSet {
    match fetch(url).await {
        Ok(catalog) => {
            info!("Loaded {} catalog titles", catalog.len());
            catalog
        }
        Err(err) => {
            warn!("Catalog unavailable, membership checks disabled: {err}");
            CatalogSet::empty()
        }
    }
}
