use std::fmt::Write;

use common::game::{AggregationResult, Deal, ShopDirectory};

use crate::errors::LookupError;

/// What kind of reply this is; the chat layer maps tones to embed colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTone {
    /// Game resolved and it is in the subscription catalog.
    InCatalog,
    /// Game resolved, not in the catalog.
    Priced,
    /// Lookup failed, informational or otherwise.
    Failure,
}

/// One outbound reply, already formatted. Pure data, no chat-platform types.
#[derive(Debug, Clone)]
pub struct Reply {
    pub title: String,
    pub body: String,
    pub tone: ReplyTone,
}

fn shop_label(deal: &Deal, shops: &ShopDirectory) -> String {
    deal.shop_name
        .clone()
        .or_else(|| shops.get(&deal.shop_id).cloned())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn deal_line(deal: &Deal, shops: &ShopDirectory, is_cheapest: bool) -> String {
    let mut line = String::new();

    if is_cheapest {
        line.push_str("🏆 ");
    }

    let _ = match deal.amount {
        Some(amount) => write!(
            line,
            "**{}**: {amount:.2} {}",
            shop_label(deal, shops),
            deal.currency
        ),
        None => write!(line, "**{}**: السعر غير متاح", shop_label(deal, shops)),
    };

    if deal.cut > 0 {
        let _ = write!(line, " (خصم {}%)", deal.cut);
    }

    if !deal.url.is_empty() {
        let _ = write!(line, " — [المتجر]({})", deal.url);
    }

    line
}

fn membership_line(in_catalog: bool) -> &'static str {
    if in_catalog {
        "✅ متوفرة في Game Pass"
    } else {
        "❌ غير متوفرة في Game Pass"
    }
}

/// Render a completed aggregation into a reply. Zero deals render as the
/// "no offers" message, never as an empty list.
pub fn render(result: &AggregationResult, shops: &ShopDirectory) -> Reply {
    let tone = if result.in_catalog {
        ReplyTone::InCatalog
    } else {
        ReplyTone::Priced
    };

    if result.deals.is_empty() {
        return Reply {
            title: "لا توجد عروض".to_string(),
            body: format!(
                "لم أجد أي عروض أسعار للعبة **{}** حالياً.\n\n{}",
                result.game.title,
                membership_line(result.in_catalog)
            ),
            tone,
        };
    }

    let mut body = String::new();
    for (index, deal) in result.deals.iter().enumerate() {
        let line = deal_line(deal, shops, result.cheapest == Some(index));
        body.push_str(&line);
        body.push('\n');
    }

    let _ = write!(body, "\n{}", membership_line(result.in_catalog));

    Reply {
        title: format!("أفضل سعر للعبة: {}", result.game.title),
        body,
        tone,
    }
}

/// Render the failure side of a lookup. Wording stays calm: a missing game
/// is normal, a provider outage is announced without detail.
pub fn render_failure(error: &LookupError) -> Reply {
    match error {
        LookupError::NotFound => Reply {
            title: "لعبة غير موجودة".to_string(),
            body: "لم أتمكن من العثور على اللعبة التي تبحث عنها.".to_string(),
            tone: ReplyTone::Failure,
        },
        LookupError::Provider(_) => Reply {
            title: "الخدمة غير متاحة".to_string(),
            body: "تعذر الوصول إلى خدمة الأسعار، حاول مرة أخرى لاحقاً.".to_string(),
            tone: ReplyTone::Failure,
        },
    }
}

/// Catch-all for conditions outside the lookup taxonomy, so one broken
/// request never silences the bot.
pub fn render_unexpected() -> Reply {
    Reply {
        title: "خطأ".to_string(),
        body: "حدث خطأ غير متوقع أثناء معالجة طلبك.".to_string(),
        tone: ReplyTone::Failure,
    }
}

#[cfg(test)]
mod tests {
    use common::game::GameRecord;
    use provider::errors::ProviderError;

    use super::*;

    fn deal(shop_id: i64, amount: f64, cut: u8, url: &str) -> Deal {
        Deal {
            shop_id,
            shop_name: None,
            amount: Some(amount),
            currency: "USD".into(),
            cut,
            url: url.into(),
        }
    }

    fn result_with(deals: Vec<Deal>, cheapest: Option<usize>, in_catalog: bool) -> AggregationResult {
        AggregationResult {
            game: GameRecord {
                id: "game-1".into(),
                title: "Cyberpunk 2077".into(),
            },
            deals,
            cheapest,
            in_catalog,
        }
    }

    fn shops() -> ShopDirectory {
        ShopDirectory::from([(61, "Steam".to_string()), (35, "GOG".to_string())])
    }

    #[test]
    fn renders_ranked_deals_with_cheapest_marked() {
        let result = result_with(
            vec![
                deal(35, 19.99, 33, "https://example.invalid/b"),
                deal(61, 29.99, 0, "https://example.invalid/a"),
            ],
            Some(0),
            false,
        );

        let reply = render(&result, &shops());

        assert!(reply.title.contains("Cyberpunk 2077"));
        let gog = reply.body.find("GOG").unwrap();
        let steam = reply.body.find("Steam").unwrap();
        assert!(gog < steam);
        assert!(reply.body.lines().next().unwrap().starts_with("🏆"));
        assert!(reply.body.contains("خصم 33%"));
        assert!(reply.body.contains("❌"));
        assert_eq!(reply.tone, ReplyTone::Priced);
    }

    #[test]
    fn zero_cut_and_empty_url_are_omitted() {
        let result = result_with(vec![deal(61, 29.99, 0, "")], Some(0), true);

        let reply = render(&result, &shops());

        assert!(!reply.body.contains("خصم"));
        assert!(!reply.body.contains("["));
        assert!(reply.body.contains("✅"));
        assert_eq!(reply.tone, ReplyTone::InCatalog);
    }

    #[test]
    fn unknown_shop_falls_back_to_directory_then_placeholder() {
        let named = Deal {
            shop_name: Some("Fanatical".into()),
            ..deal(9000, 9.99, 0, "")
        };
        let reply = render(&result_with(vec![named], Some(0), false), &shops());
        assert!(reply.body.contains("Fanatical"));

        let reply = render(&result_with(vec![deal(61, 9.99, 0, "")], Some(0), false), &shops());
        assert!(reply.body.contains("Steam"));

        let reply = render(&result_with(vec![deal(1, 9.99, 0, "")], Some(0), false), &shops());
        assert!(reply.body.contains("Unknown"));
    }

    #[test]
    fn empty_deals_render_no_offers_message() {
        let reply = render(&result_with(Vec::new(), None, false), &shops());

        assert_eq!(reply.title, "لا توجد عروض");
        assert!(reply.body.contains("Cyberpunk 2077"));
        assert!(!reply.body.contains("**:"));
    }

    #[test]
    fn failures_render_informational_replies() {
        let reply = render_failure(&LookupError::NotFound);
        assert_eq!(reply.title, "لعبة غير موجودة");
        assert_eq!(reply.tone, ReplyTone::Failure);

        let outage = ProviderError::BadStatus(503);
        let reply = render_failure(&LookupError::Provider(outage));
        assert_eq!(reply.title, "الخدمة غير متاحة");
    }
}
