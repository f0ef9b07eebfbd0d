use std::sync::LazyLock;

use regex::Regex;

static STEAM_APP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"store\.steampowered\.com/app/(\d+)").expect("Expected steam pattern to compile")
});

/// Pull a Steam app id out of a message, either from a store link or from an
/// input that is nothing but digits. Lets the lookup skip fuzzy search when
/// the user pasted the exact game.
pub fn extract_steam_app_id(text: &str) -> Option<u32> {
    if let Some(captures) = STEAM_APP_URL.captures(text) {
        return captures.get(1)?.as_str().parse().ok();
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.parse().ok();
    }

    None
}
