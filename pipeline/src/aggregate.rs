use catalog::CatalogSet;
use common::game::{AggregationResult, Deal, GameRecord};

/// At most this many offers make it into one reply.
pub const MAX_LISTED_DEALS: usize = 5;

// A record the provider sent without a usable amount must never rank as the
// best price, so it sorts behind every real offer.
fn sort_amount(deal: &Deal) -> f64 {
    deal.amount.unwrap_or(f64::MAX)
}

/// Rank the deals for one resolved game: ascending by price, truncated to
/// the top five, cheapest index computed on the truncated list (first
/// occurrence wins ties), catalog membership looked up by normalized title.
pub fn aggregate(game: GameRecord, mut deals: Vec<Deal>, catalog: &CatalogSet) -> AggregationResult {
    deals.sort_by(|a, b| sort_amount(a).total_cmp(&sort_amount(b)));
    deals.truncate(MAX_LISTED_DEALS);

    let cheapest = deals
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| sort_amount(a).total_cmp(&sort_amount(b)))
        .map(|(index, _)| index);

    let in_catalog = catalog.contains(&game.title);

    AggregationResult {
        game,
        deals,
        cheapest,
        in_catalog,
    }
}
