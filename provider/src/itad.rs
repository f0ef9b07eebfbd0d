use async_trait::async_trait;
use common::game::{Deal, GameQuery, GameRecord, ShopDirectory};
use fetcher::{client::Fetcher, request::Request, traits::HttpMethod};
use serde_json::json;
use tracing::debug;

use crate::{
    errors::ProviderError,
    matching::best_match,
    models::{ApiDeal, ApiGame, ApiLookupResponse, ApiPricesEntry, ApiShopEntry},
    traits::PriceProvider,
};

const BASE_URL: &str = "https://api.isthereanydeal.com";

// The search endpoint caps how many candidates we ask the matcher to rank.
const SEARCH_RESULT_LIMIT: u32 = 5;

const HEADERS: [(&str, &str); 1] = [("accept", "application/json")];

/// IsThereAnyDeal client. Every endpoint authenticates with the `key` query
/// parameter; one request per call, no retries.
pub struct ItadClient {
    fetcher: Fetcher,
    api_key: String,
    headers: Vec<(String, String)>,
}

impl ItadClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            fetcher: Fetcher::new(),
            api_key: api_key.into(),
            headers: HEADERS
                .to_vec()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    async fn send(&self, request: Request) -> Result<String, ProviderError> {
        let response = self.fetcher.make_web_request(request).await?;

        if !response.is_success() {
            return Err(ProviderError::BadStatus(response.status));
        }

        Ok(response.body)
    }

    async fn lookup_by_app_id(&self, app_id: u32) -> Result<Option<GameRecord>, ProviderError> {
        let request = Request::builder()
            .set_url(format!("{BASE_URL}/games/lookup/v1"))
            .add_query("key", &self.api_key)
            .add_query("appid", app_id.to_string())
            .set_headers(&self.headers)
            .build();

        let body = self.send(request).await?;
        let parsed: ApiLookupResponse = serde_json::from_str(&body)?;

        if !parsed.found {
            return Ok(None);
        }

        Ok(parsed.game.map(|game| GameRecord {
            id: game.id,
            title: game.title,
        }))
    }

    async fn search_by_title(
        &self,
        normalized_title: &str,
    ) -> Result<Option<GameRecord>, ProviderError> {
        let request = Request::builder()
            .set_url(format!("{BASE_URL}/games/search/v1"))
            .add_query("key", &self.api_key)
            .add_query("title", normalized_title)
            .add_query("results", SEARCH_RESULT_LIMIT.to_string())
            .set_headers(&self.headers)
            .build();

        let body = self.send(request).await?;
        let hits: Vec<ApiGame> = serde_json::from_str(&body)?;

        debug!("Search returned {} candidates", hits.len());

        Ok(best_match(normalized_title, hits).map(|game| GameRecord {
            id: game.id,
            title: game.title,
        }))
    }
}

#[async_trait]
impl PriceProvider for ItadClient {
    async fn lookup_game(&self, query: &GameQuery) -> Result<Option<GameRecord>, ProviderError> {
        if let Some(app_id) = query.app_id {
            if let Some(record) = self.lookup_by_app_id(app_id).await? {
                debug!("Resolved appid {} to {}", app_id, record.title);
                return Ok(Some(record));
            }
        }

        if query.normalized_title.is_empty() {
            return Ok(None);
        }

        self.search_by_title(&query.normalized_title).await
    }

    async fn list_deals(&self, game_id: &str, country: &str) -> Result<Vec<Deal>, ProviderError> {
        // Bulk endpoint, body is a list of game ids; we always send one.
        // deals=false so full-price shops still rank, vouchers=true so coupon
        // prices count toward the cheapest offer.
        let request = Request::builder()
            .set_method(HttpMethod::POST)
            .set_url(format!("{BASE_URL}/games/prices/v2"))
            .add_query("key", &self.api_key)
            .add_query("country", country)
            .add_query("deals", "false")
            .add_query("vouchers", "true")
            .set_json_body(json!([game_id]))
            .set_headers(&self.headers)
            .build();

        let body = self.send(request).await?;
        let entries: Vec<ApiPricesEntry> = serde_json::from_str(&body)?;

        let deals = entries
            .into_iter()
            .find(|entry| entry.id == game_id)
            .map(|entry| entry.deals)
            .unwrap_or_default();

        Ok(deals.into_iter().map(ApiDeal::into_deal).collect())
    }

    async fn list_shops(&self, country: &str) -> Result<ShopDirectory, ProviderError> {
        let request = Request::builder()
            .set_url(format!("{BASE_URL}/service/shops/v1"))
            .add_query("key", &self.api_key)
            .add_query("country", country)
            .set_headers(&self.headers)
            .build();

        let body = self.send(request).await?;
        let shops: Vec<ApiShopEntry> = serde_json::from_str(&body)?;

        Ok(shops
            .into_iter()
            .map(|shop| (shop.id, shop.title))
            .collect())
    }
}
