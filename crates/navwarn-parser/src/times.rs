//! Cancellation and effective-time lines.

use std::sync::LazyLock;

use regex::Regex;

static CANCEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bCANCEL THIS (?:MSG|MESSAGE) (\d{6}Z [A-Z]{3} \d{2,4})\b")
        .expect("valid cancel regex")
});

static CANCEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCANCEL\b").expect("valid cancel line regex"));

static TIME_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}(?:\d{2})?Z\b").expect("valid time group regex"));

/// The date-time group of a `CANCEL THIS MSG <DTG>` instruction.
pub(crate) fn cancel_time(fragment: &str) -> Option<String> {
    CANCEL_PATTERN
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// The fragment itself when it states when something happens: it carries
/// a `HHMMZ`/`DDHHMMZ` time group and is not a cancellation line.
pub(crate) fn when_time(fragment: &str) -> Option<String> {
    if CANCEL_LINE.is_match(fragment) || !TIME_GROUP.is_match(fragment) {
        return None;
    }
    let trimmed = fragment.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
