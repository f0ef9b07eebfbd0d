pub mod bot;
pub(crate) mod embeds;
pub(crate) mod janitor;

pub use bot::{PriceBot, run};
