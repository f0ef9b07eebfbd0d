use catalog::CatalogSet;
use common::game::{AggregationResult, GameQuery, ShopDirectory};
use provider::traits::PriceProvider;
use tracing::{info, warn};

use crate::{
    aggregate::aggregate,
    errors::LookupError,
    format::{Reply, render, render_failure},
};

/// Answer one inbound message. Resolve the game, fetch its deals, rank them,
/// and format a reply; every failure path comes back as a reply too, so the
/// caller can always send something.
pub async fn answer(
    text: &str,
    provider: &dyn PriceProvider,
    catalog: &CatalogSet,
    shops: &ShopDirectory,
    country: &str,
) -> Reply {
    match run_lookup(text, provider, catalog, country).await {
        Ok(result) => render(&result, shops),
        Err(err) => {
            match &err {
                LookupError::NotFound => info!("No match for {text:?}"),
                LookupError::Provider(detail) => warn!("Lookup failed for {text:?}: {detail}"),
            }

            render_failure(&err)
        }
    }
}

async fn run_lookup(
    text: &str,
    provider: &dyn PriceProvider,
    catalog: &CatalogSet,
    country: &str,
) -> Result<AggregationResult, LookupError> {
    let query = GameQuery::parse(text);

    if query.is_blank() {
        return Err(LookupError::NotFound);
    }

    let record = provider
        .lookup_game(&query)
        .await?
        .ok_or(LookupError::NotFound)?;

    let deals = provider.list_deals(&record.id, country).await?;

    Ok(aggregate(record, deals, catalog))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use common::game::{Deal, GameRecord};
    use provider::errors::ProviderError;

    use crate::format::ReplyTone;

    use super::*;

    /// Canned provider: one known game with a fixed deal list.
    struct StubProvider {
        game: Option<GameRecord>,
        deals: Vec<Deal>,
        unavailable: bool,
    }

    #[async_trait]
    impl PriceProvider for StubProvider {
        async fn lookup_game(
            &self,
            _query: &GameQuery,
        ) -> Result<Option<GameRecord>, ProviderError> {
            if self.unavailable {
                return Err(ProviderError::BadStatus(503));
            }

            Ok(self.game.clone())
        }

        async fn list_deals(
            &self,
            _game_id: &str,
            _country: &str,
        ) -> Result<Vec<Deal>, ProviderError> {
            Ok(self.deals.clone())
        }

        async fn list_shops(&self, _country: &str) -> Result<ShopDirectory, ProviderError> {
            Ok(ShopDirectory::new())
        }
    }

    fn deal(shop_name: &str, amount: f64, cut: u8) -> Deal {
        Deal {
            shop_id: 0,
            shop_name: Some(shop_name.into()),
            amount: Some(amount),
            currency: "USD".into(),
            cut,
            url: String::new(),
        }
    }

    #[tokio::test]
    async fn full_lookup_ranks_and_annotates() {
        let provider = StubProvider {
            game: Some(GameRecord {
                id: "7".into(),
                title: "Cyberpunk 2077".into(),
            }),
            deals: vec![deal("A", 29.99, 0), deal("B", 19.99, 33)],
            unavailable: false,
        };

        let reply = answer(
            "cyberpunk 2077",
            &provider,
            &CatalogSet::empty(),
            &ShopDirectory::new(),
            "US",
        )
        .await;

        let b = reply.body.find("B").unwrap();
        let a = reply.body.find("A").unwrap();
        assert!(b < a);
        assert!(reply.body.lines().next().unwrap().contains("🏆"));
        assert!(reply.body.contains("❌"));
        assert_eq!(reply.tone, ReplyTone::Priced);
    }

    #[tokio::test]
    async fn unknown_game_renders_not_found() {
        let provider = StubProvider {
            game: None,
            deals: Vec::new(),
            unavailable: false,
        };

        let reply = answer(
            "no such game",
            &provider,
            &CatalogSet::empty(),
            &ShopDirectory::new(),
            "US",
        )
        .await;

        assert_eq!(reply.title, "لعبة غير موجودة");
        assert_eq!(reply.tone, ReplyTone::Failure);
    }

    #[tokio::test]
    async fn blank_message_never_reaches_the_provider() {
        let provider = StubProvider {
            game: None,
            deals: Vec::new(),
            unavailable: true,
        };

        let reply = answer(
            "   !!!   ",
            &provider,
            &CatalogSet::empty(),
            &ShopDirectory::new(),
            "US",
        )
        .await;

        // an unavailable provider would have produced the outage reply
        assert_eq!(reply.title, "لعبة غير موجودة");
    }

    #[tokio::test]
    async fn provider_outage_renders_error_reply() {
        let provider = StubProvider {
            game: None,
            deals: Vec::new(),
            unavailable: true,
        };

        let reply = answer(
            "portal 2",
            &provider,
            &CatalogSet::empty(),
            &ShopDirectory::new(),
            "US",
        )
        .await;

        assert_eq!(reply.title, "الخدمة غير متاحة");
        assert_eq!(reply.tone, ReplyTone::Failure);
    }

    #[tokio::test]
    async fn resolved_game_without_offers_says_so() {
        let provider = StubProvider {
            game: Some(GameRecord {
                id: "7".into(),
                title: "Cyberpunk 2077".into(),
            }),
            deals: Vec::new(),
            unavailable: false,
        };

        let reply = answer(
            "cyberpunk 2077",
            &provider,
            &CatalogSet::empty(),
            &ShopDirectory::new(),
            "US",
        )
        .await;

        assert_eq!(reply.title, "لا توجد عروض");
    }
}
