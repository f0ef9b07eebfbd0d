mod config;
mod keep_alive;

use discord::PriceBot;
use mimalloc::MiMalloc;
use provider::{itad::ItadClient, traits::PriceProvider};
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::BotConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    let env_log = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .expect("Failed to create tracing filter");

    let subscriber = FmtSubscriber::builder()
        .pretty()
        .compact()
        .with_file(false)
        .with_env_filter(env_log);

    tracing::subscriber::set_global_default(subscriber.finish())
        .expect("Failed to create log subscription");

    let config = BotConfig::from_env().expect("Expected complete environment");

    let catalog = catalog::load_or_empty(&config.catalog_url).await;

    let provider = ItadClient::new(config.itad_api_key.clone());

    // best-effort enrichment, deals usually carry their own shop names
    let shops = match provider.list_shops(&config.country).await {
        Ok(shops) => {
            info!("Loaded {} shop names", shops.len());
            shops
        }
        Err(err) => {
            warn!("Shop directory unavailable: {err}");
            Default::default()
        }
    };

    tokio::spawn(keep_alive::serve(config.keep_alive_port));

    let bot = PriceBot::new(provider, catalog, shops, config.country.clone());

    if let Err(err) = discord::run(&config.discord_token, bot).await {
        error!("Discord client stopped: {err}");
    }
}
