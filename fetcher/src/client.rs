use std::{str::FromStr, sync::OnceLock, time::Duration};

use reqwest::{
    Client, ClientBuilder,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, info};

use crate::{
    errors::FetcherError,
    request::Request,
    traits::{FetchResponse, HttpMethod},
};

// Every upstream call carries the same timeout; callers that are cancelled
// simply drop the future, there is nothing to roll back.
const REQUEST_TIMEOUT_SECONDS: u64 = 20;

const USER_AGENT: &str = "gamepass-price-bot/1.0";

static REQWEST_CLIENT: OnceLock<Client> = OnceLock::new();

/// Shared outbound HTTP client. One request, one response, no retries; the
/// callers decide what a failure means for the user.
#[derive(Copy, Clone, Default)]
pub struct Fetcher {}

impl Fetcher {
    pub fn new() -> Self {
        Self {}
    }

    fn create_client() -> &'static Client {
        REQWEST_CLIENT.get_or_init(|| {
            ClientBuilder::new()
                .gzip(true)
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
                .user_agent(USER_AGENT)
                .https_only(true)
                .build()
                .expect("Valid base reqwest to be built")
        })
    }

    pub async fn make_web_request(&self, request: Request) -> Result<FetchResponse, FetcherError> {
        let client = Self::create_client();

        let mut request_builder = match request.method {
            HttpMethod::GET => client.get(request.url.clone()),
            HttpMethod::POST => client.post(request.url.clone()),
        };

        if !request.query.is_empty() {
            request_builder = request_builder.query(&request.query);
        }

        if let Some(json) = request.json {
            request_builder = request_builder.json(&json);
        }

        if let Some(headers) = request.headers {
            let mut header_map = HeaderMap::new();

            for (key, value) in headers.iter() {
                header_map.append(HeaderName::from_str(key)?, HeaderValue::from_str(value)?);
            }

            request_builder = request_builder.headers(header_map);
        }

        info!("Sending request to {}", request.url);

        let response = request_builder.send().await?;

        debug!("{response:?}");

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(FetchResponse { status, body })
    }
}
