use std::sync::LazyLock;

use regex::Regex;

// Anything outside latin lowercase alphanumerics and the Arabic block
// collapses into a single space.
static NON_TITLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\x{0600}-\x{06FF}]+").expect("Expected title pattern to compile")
});

/// Canonical comparison key for a game title.
///
/// Lowercases, replaces every run of foreign characters with one space, trims
/// and collapses internal whitespace. Total and idempotent; empty input maps
/// to the empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_TITLE_CHARS.replace_all(&lowered, " ");

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
