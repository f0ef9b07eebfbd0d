use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{steam::extract_steam_app_id, titles::normalize};

/// One inbound chat message, parsed. Built per request and never mutated.
#[derive(Debug, Clone)]
pub struct GameQuery {
    pub raw: String,
    pub app_id: Option<u32>,
    pub normalized_title: String,
}

impl GameQuery {
    pub fn parse(text: &str) -> Self {
        Self {
            raw: text.to_string(),
            app_id: extract_steam_app_id(text),
            normalized_title: normalize(text),
        }
    }

    /// Nothing to look up: no store id and the title normalized away.
    pub fn is_blank(&self) -> bool {
        self.app_id.is_none() && self.normalized_title.is_empty()
    }
}

/// Canonical game record as resolved by the price provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
}

/// One shop's current offer for a game.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Deal {
    pub shop_id: i64,
    pub shop_name: Option<String>,
    // None when the provider sent a record without a usable amount; such
    // deals rank last, never first
    pub amount: Option<f64>,
    pub currency: String,
    pub cut: u8,
    pub url: String,
}

/// Maps a provider shop id to its display name. Loaded once at startup and
/// read-only afterwards.
pub type ShopDirectory = HashMap<i64, String>;

/// Everything the formatter needs for one reply: the resolved game, its deals
/// sorted ascending by price and truncated to the top five, the index of the
/// cheapest deal (first occurrence on ties), and catalog membership.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    pub game: GameRecord,
    pub deals: Vec<Deal>,
    pub cheapest: Option<usize>,
    pub in_catalog: bool,
}
