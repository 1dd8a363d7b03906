use std::sync::LazyLock;

use regex::Regex;

static UNSAFE_URL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^-A-Za-z0-9+&@#/%?=~_|!:,.;()]").expect("static URL character class is valid")
});

/// Strips every character outside the safe URL character class.
///
/// This is a character filter, not a scheme allowlist: quotes, angle
/// brackets, whitespace and non-ASCII are removed, but a `javascript:`
/// prefix made of allowed characters survives.
pub fn scrub_url(url: &str) -> String {
    UNSAFE_URL_CHARS.replace_all(url, "").into_owned()
}
