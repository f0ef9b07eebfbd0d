use common::game::Deal;
use serde::Deserialize;

// Wire shapes for the four ITAD endpoints we consume.

#[derive(Deserialize, Debug)]
pub(crate) struct ApiLookupResponse {
    pub(crate) found: bool,
    pub(crate) game: Option<ApiGame>,
}

// /games/search/v1 returns a bare array of these
#[derive(Deserialize, Debug)]
pub(crate) struct ApiGame {
    pub(crate) id: String,
    pub(crate) title: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiPricesEntry {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) deals: Vec<ApiDeal>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiDeal {
    pub(crate) shop: ApiShopRef,
    pub(crate) price: Option<ApiAmount>,
    #[serde(default)]
    pub(crate) cut: Option<i64>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiShopRef {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiAmount {
    pub(crate) amount: Option<f64>,
    pub(crate) currency: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiShopEntry {
    pub(crate) id: i64,
    pub(crate) title: String,
}

impl ApiDeal {
    pub(crate) fn into_deal(self) -> Deal {
        let (amount, currency) = match self.price {
            Some(price) => (price.amount, price.currency.unwrap_or_else(|| "USD".into())),
            None => (None, "USD".into()),
        };

        Deal {
            shop_id: self.shop.id,
            shop_name: self.shop.name,
            amount,
            currency,
            cut: self.cut.unwrap_or(0).clamp(0, 100) as u8,
            url: self.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lookup_response() {
        let body = r#"{"found":true,"game":{"id":"018d937f-1234","slug":"portal-2","title":"Portal 2","type":"game","mature":false}}"#;
        let parsed: ApiLookupResponse = serde_json::from_str(body).unwrap();

        assert!(parsed.found);
        assert_eq!(parsed.game.unwrap().title, "Portal 2");

        let body = r#"{"found":false,"game":null}"#;
        let parsed: ApiLookupResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.found);
    }

    #[test]
    fn parses_prices_entry_and_converts_deal() {
        let body = r#"[{"id":"018d937f-1234","deals":[
            {"shop":{"id":61,"name":"Steam"},
             "price":{"amount":19.99,"amountInt":1999,"currency":"USD"},
             "regular":{"amount":29.99,"amountInt":2999,"currency":"USD"},
             "cut":33,
             "voucher":null,
             "url":"https://example.invalid/buy"}]}]"#;
        let entries: Vec<ApiPricesEntry> = serde_json::from_str(body).unwrap();
        let deal = entries
            .into_iter()
            .next()
            .unwrap()
            .deals
            .into_iter()
            .next()
            .unwrap()
            .into_deal();

        assert_eq!(deal.shop_id, 61);
        assert_eq!(deal.shop_name.as_deref(), Some("Steam"));
        assert_eq!(deal.amount, Some(19.99));
        assert_eq!(deal.cut, 33);
        assert_eq!(deal.url, "https://example.invalid/buy");
    }

    #[test]
    fn deal_without_price_block_survives() {
        let body = r#"{"shop":{"id":4},"price":null}"#;
        let deal: ApiDeal = serde_json::from_str(body).unwrap();
        let deal = deal.into_deal();

        assert_eq!(deal.amount, None);
        assert_eq!(deal.cut, 0);
        assert!(deal.url.is_empty());
    }

    #[test]
    fn parses_shop_directory_entries() {
        let body = r#"[{"id":61,"title":"Steam","deals":120,"games":5000,"update":"2024-01-01T00:00:00Z"},{"id":35,"title":"GOG"}]"#;
        let shops: Vec<ApiShopEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(shops.len(), 2);
        assert_eq!(shops[1].title, "GOG");
    }
}
