use std::env;

use common::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_COUNTRY, DEFAULT_KEEP_ALIVE_PORT, DISCORD_BOT_TOKEN,
    GAMEPASS_CSV_URL, ITAD_API_KEY, KEEP_ALIVE_PORT, PRICE_COUNTRY,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    #[error("Expected {0} to be set")]
    MissingVariable(&'static str),
    #[error("Expected {0} to hold a port number")]
    InvalidPort(&'static str),
}

/// Everything the process reads from the environment, resolved once at
/// startup. The library crates receive these values as parameters.
pub(crate) struct BotConfig {
    pub(crate) discord_token: String,
    pub(crate) itad_api_key: String,
    pub(crate) catalog_url: String,
    pub(crate) country: String,
    pub(crate) keep_alive_port: u16,
}

impl BotConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        let keep_alive_port = match env::var(KEEP_ALIVE_PORT) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(KEEP_ALIVE_PORT))?,
            Err(_) => DEFAULT_KEEP_ALIVE_PORT,
        };

        Ok(Self {
            discord_token: require(DISCORD_BOT_TOKEN)?,
            itad_api_key: require(ITAD_API_KEY)?,
            catalog_url: env::var(GAMEPASS_CSV_URL)
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string()),
            country: env::var(PRICE_COUNTRY).unwrap_or_else(|_| DEFAULT_COUNTRY.to_string()),
            keep_alive_port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVariable(name))
}
