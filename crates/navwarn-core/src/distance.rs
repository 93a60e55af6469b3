//! Normalization of raw distance phrases into meters.

use crate::numbers::words_to_number;

/// Meters in one nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

const UNIT_KEYWORDS: [&str; 2] = ["MILE", "METER"];

/// Converts a raw distance phrase (`"5 MILES"`, `"FIVE HUNDRED METERS"`)
/// into meters.
///
/// The number is the longest token run immediately before the first unit
/// keyword that still parses, either as a decimal or through
/// [`words_to_number`]. Miles are nautical miles. Returns `None` when no
/// unit keyword is present, the keyword opens the phrase, or nothing
/// before it parses.
#[must_use]
pub fn meters_distance(phrase: &str) -> Option<f64> {
    let unit_at = UNIT_KEYWORDS
        .iter()
        .filter_map(|unit| phrase.find(unit))
        .min()?;
    if unit_at == 0 {
        return None;
    }

    let magnitude = trailing_number(phrase[..unit_at].trim())?;
    let unit = &phrase[unit_at..];
    if unit.contains("MILE") {
        Some(magnitude * METERS_PER_NAUTICAL_MILE)
    } else {
        Some(magnitude)
    }
}

/// Rebuilds the text before the unit word by word from the end and keeps
/// the last prefix that parsed.
fn trailing_number(text: &str) -> Option<f64> {
    let mut fragment = String::new();
    let mut magnitude = None;

    for token in text.split(' ').rev() {
        fragment = if fragment.is_empty() {
            token.to_string()
        } else {
            format!("{token} {fragment}")
        };
        if let Some(value) = parse_decimal(&fragment).or_else(|| words_to_number(&fragment)) {
            magnitude = Some(value);
        }
    }

    magnitude
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
