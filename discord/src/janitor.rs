use std::time::Duration;

use serenity::all::{ChannelType, Context, GetMessages};
use tokio::time::sleep;
use tracing::{debug, warn};

const SWEEP_INTERVAL_SECS: u64 = 60;
const HISTORY_PAGE_SIZE: u8 = 100;

/// Background sweep that keeps channels clean: anything not pinned and not
/// written by the bot gets deleted, one history page per channel per pass.
pub(crate) async fn run(ctx: Context) {
    loop {
        sweep(&ctx).await;

        sleep(Duration::from_secs(SWEEP_INTERVAL_SECS)).await;
    }
}

async fn sweep(ctx: &Context) {
    let bot_id = ctx.cache.current_user().id;

    for guild_id in ctx.cache.guilds() {
        let channels = match guild_id.channels(&ctx.http).await {
            Ok(channels) => channels,
            Err(err) => {
                warn!("Failed to list channels for guild {guild_id}: {err}");
                continue;
            }
        };

        for channel in channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Text)
        {
            let request = GetMessages::new().limit(HISTORY_PAGE_SIZE);
            let messages = match channel.id.messages(&ctx.http, request).await {
                Ok(messages) => messages,
                Err(err) => {
                    warn!("Failed to read history of {}: {err}", channel.id);
                    continue;
                }
            };

            for message in messages {
                if message.pinned || message.author.id == bot_id {
                    continue;
                }

                // individual deletes may race with manual cleanup, keep going
                if let Err(err) = message.delete(&ctx.http).await {
                    debug!("Failed to delete message {}: {err}", message.id);
                }
            }
        }
    }
}
