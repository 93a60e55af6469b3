//! Splitting a bulletin into heading, numbered items, lettered sub-items and
//! sentences.
//!
//! Bulletins follow a loose outline:
//!
//! ```text
//! GULF OF MEXICO. HAZARDOUS OPERATIONS.       <- heading
//! 1. ROCKET LAUNCHING 0800Z TO 1600Z DAILY:   <- numbered item prose
//!    A. 28-00N 090-00W, 28-00N 089-00W.       <- lettered sub-items
//!    B. 27-00N 089-00W.
//! 2. CANCEL THIS MSG 311700Z MAR 24.
//! ```
//!
//! Item markers must count up from `1.` / `A.`; an out-of-sequence marker is
//! kept as item text.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[1A]\. ").expect("valid heading marker regex"));

static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]+)\. ").expect("valid number marker regex"));

static LETTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z])\. ").expect("valid letter marker regex"));

static FIRST_LETTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bA\. ").expect("valid first letter marker regex"));

/// Trims every line and joins the non-empty ones with single spaces.
pub(crate) fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops the last character of `text`, respecting UTF-8 boundaries.
fn drop_last_char(text: &str) -> &str {
    text.char_indices().next_back().map_or(text, |(i, _)| &text[..i])
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits a bulletin into `(heading, body)` at the first `1. ` or `A. `
/// marker.
///
/// The body keeps its opening marker. With no marker the whole text is the
/// heading; with the marker at the very start there is no heading.
pub(crate) fn split_heading(text: &str) -> (Option<String>, Option<String>) {
    match HEADING_MARKER.find(text) {
        None => (non_empty(text), None),
        Some(m) if m.start() == 0 => (None, non_empty(text)),
        Some(m) => {
            let heading = drop_last_char(&text[..m.start()]);
            (non_empty(heading), non_empty(&text[m.start()..]))
        }
    }
}

/// Splits prose into period-terminated sentences.
///
/// Line breaks become single spaces first, so a sentence or a coordinate
/// pair wrapped across lines comes back whole.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    join_lines(text)
        .split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.ends_with('.') {
                s.to_string()
            } else {
                format!("{s}.")
            }
        })
        .collect()
}

/// Splits `text` at markers whose label is the next one in sequence.
/// Returned items exclude their marker.
///
/// When a stray number or letter took an item's label first (`DNC 2. 2.
/// AREA ...`), the real marker that follows is stripped from the item.
fn split_items(text: &str, marker: &Regex, label_at: impl Fn(usize) -> String) -> Vec<String> {
    let mut bounds: Vec<(usize, usize)> = Vec::new();
    for caps in marker.captures_iter(text) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if label.as_str() == label_at(bounds.len()) {
            bounds.push((whole.start(), whole.end()));
        }
    }

    bounds
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, content_start))| {
            let end = bounds.get(i + 1).map_or(text.len(), |&(next, _)| next);
            let item = text[content_start..end].trim_start();
            let repeated = format!("{}. ", label_at(i));
            non_empty(item.strip_prefix(repeated.as_str()).unwrap_or(item))
        })
        .collect()
}

/// Splits a body into numbered items `1.`, `2.`, ...
pub(crate) fn split_numbers(body: &str) -> Vec<String> {
    split_items(body, &NUMBER_MARKER, |i| (i + 1).to_string())
}

/// Splits text into lettered items `A.`, `B.`, ...
pub(crate) fn split_letters(text: &str) -> Vec<String> {
    split_items(text, &LETTER_MARKER, |i| {
        u8::try_from(i)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .filter(u8::is_ascii_uppercase)
            .map(|b| char::from(b).to_string())
            .unwrap_or_default()
    })
}

/// Separates a numbered item's own prose from its lettered tail.
///
/// Returns `(prose, tail)`; the tail starts at the first `A. ` marker.
pub(crate) fn split_letters_from_heading(item: &str) -> (Option<String>, Option<String>) {
    match FIRST_LETTER_MARKER.find(item) {
        None => (non_empty(item), None),
        Some(m) => (
            non_empty(&item[..m.start()]),
            non_empty(&item[m.start()..]),
        ),
    }
}
