use std::{
    panic::AssertUnwindSafe,
    sync::atomic::{AtomicBool, Ordering},
};

use catalog::CatalogSet;
use common::game::ShopDirectory;
use futures::FutureExt;
use pipeline::{format::render_unexpected, handler::answer};
use provider::itad::ItadClient;
use serenity::{
    Client,
    all::{Context, CreateMessage, EventHandler, GatewayIntents, Message, Ready},
    async_trait,
};
use tracing::{error, info, warn};

use crate::{embeds::reply_embed, janitor};

/// Gateway event handler. Holds the read-only snapshots the pipeline needs;
/// serenity may call into it from several events at once.
pub struct PriceBot {
    provider: ItadClient,
    catalog: CatalogSet,
    shops: ShopDirectory,
    country: String,
    janitor_started: AtomicBool,
}

impl PriceBot {
    pub fn new(
        provider: ItadClient,
        catalog: CatalogSet,
        shops: ShopDirectory,
        country: String,
    ) -> Self {
        Self {
            provider,
            catalog,
            shops,
            country,
            janitor_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for PriceBot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected", ready.user.name);

        // ready fires again on gateway reconnects, one janitor is enough
        if !self.janitor_started.swap(true, Ordering::SeqCst) {
            tokio::spawn(janitor::run(ctx));
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        // one broken request must not take the event loop down with it
        let reply = AssertUnwindSafe(answer(
            &msg.content,
            &self.provider,
            &self.catalog,
            &self.shops,
            &self.country,
        ))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            error!("Lookup panicked for {:?}", msg.content);
            render_unexpected()
        });

        let builder = CreateMessage::new()
            .embed(reply_embed(&reply))
            .reference_message(&msg);

        if let Err(err) = msg.channel_id.send_message(&ctx.http, builder).await {
            warn!("Failed to send reply in {}: {err}", msg.channel_id);
        }
    }
}

/// Connect and block until the gateway session ends.
pub async fn run(token: &str, bot: PriceBot) -> serenity::Result<()> {
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents).event_handler(bot).await?;

    client.start().await
}
