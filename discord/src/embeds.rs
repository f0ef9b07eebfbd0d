use pipeline::format::{Reply, ReplyTone};
use serenity::all::{Colour, CreateEmbed};

fn tone_colour(tone: ReplyTone) -> Colour {
    match tone {
        ReplyTone::InCatalog => Colour::from_rgb(35, 235, 143), // green
        ReplyTone::Priced => Colour::from_rgb(35, 127, 235),    // blue
        ReplyTone::Failure => Colour::from_rgb(235, 35, 127),   // pink?
    }
}

pub(crate) fn reply_embed(reply: &Reply) -> CreateEmbed {
    CreateEmbed::new()
        .title(reply.title.clone())
        .description(reply.body.clone())
        .colour(tone_colour(reply.tone))
}
