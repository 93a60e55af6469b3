//! Distance phrases such as `"WITHIN 5 MILES OF"` and `"500 YARD BERTH"`.
//!
//! Only the raw phrase is extracted here. Conversion to meters happens on
//! demand in [`navwarn_core::LocationWithType::meters_distance`].

use std::sync::LazyLock;

use regex::Regex;

/// Everything since the last period up to and including `BERTH`.
static BERTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.]*\bBERTH\b").expect("valid berth regex"));

static WITHIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bWITHIN (.+?) OF\b").expect("valid within regex"));

/// The first distance phrase in `text`.
///
/// A `BERTH` phrase takes priority over a `WITHIN ... OF` phrase.
pub(crate) fn extract_distance(text: &str) -> Option<String> {
    if let Some(m) = BERTH_PATTERN.find(text) {
        let phrase = m.as_str().trim();
        if !phrase.is_empty() {
            return Some(phrase.to_string());
        }
    }

    WITHIN_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|phrase| !phrase.is_empty())
}
