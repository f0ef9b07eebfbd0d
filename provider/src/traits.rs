use async_trait::async_trait;
use common::game::{Deal, GameQuery, GameRecord, ShopDirectory};

use crate::errors::ProviderError;

/// Seam over the remote price-comparison API. The pipeline only talks to
/// this trait so tests can stub the network out.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Resolve a query to a canonical game record, or None when nothing
    /// matches confidently enough.
    async fn lookup_game(&self, query: &GameQuery) -> Result<Option<GameRecord>, ProviderError>;

    /// Current shop offers for one game in one country. Empty when the
    /// provider knows the game but has no prices.
    async fn list_deals(&self, game_id: &str, country: &str) -> Result<Vec<Deal>, ProviderError>;

    /// Shop id to display name, used when a deal record omits the name.
    async fn list_shops(&self, country: &str) -> Result<ShopDirectory, ProviderError>;
}
