//! Word-to-number normalization for distance phrases.
//!
//! Bulletins spell out magnitudes as often as they print digits
//! (`"FIVE HUNDRED YARD BERTH"`, `"TWO MILES"`). [`words_to_number`] turns a
//! space-joined token run into a value, or `None` when any token is not part
//! of a cardinal number.

const ONES: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[("thousand", 1_000), ("million", 1_000_000)];

fn lookup(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, v)| *v)
}

/// Parses a hyphenated compound such as `"twenty-five"`.
fn parse_hyphenated(word: &str) -> Option<u64> {
    let (left, right) = word.split_once('-')?;
    let tens = lookup(TENS, left)?;
    let ones = lookup(ONES, right)?;
    (1..=9).contains(&ones).then_some(tens + ones)
}

/// A single token's contribution to the running value.
enum Token {
    Value(f64),
    Hundred,
    Scale(u64),
    And,
}

fn classify(word: &str) -> Option<Token> {
    if word == "and" {
        return Some(Token::And);
    }
    if word == "hundred" {
        return Some(Token::Hundred);
    }
    if let Some(scale) = lookup(SCALES, word) {
        return Some(Token::Scale(scale));
    }
    if let Some(v) = lookup(ONES, word)
        .or_else(|| lookup(TENS, word))
        .or_else(|| parse_hyphenated(word))
    {
        #[allow(clippy::cast_precision_loss)]
        let value = v as f64;
        return Some(Token::Value(value));
    }
    if word.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return word.parse::<f64>().ok().map(Token::Value);
    }
    None
}

/// Converts a space-joined run of number words into a value.
///
/// Case-insensitive. Digit tokens may be mixed in (`"5 THOUSAND"`). Returns
/// `None` for an empty run, a run with no value-bearing token, or any token
/// that is not part of a cardinal number.
#[must_use]
pub fn words_to_number(text: &str) -> Option<f64> {
    let mut total = 0.0_f64;
    let mut current = 0.0_f64;
    let mut seen_value = false;

    for raw in text.split_whitespace() {
        let word = raw.to_lowercase();
        match classify(&word)? {
            Token::And => {}
            Token::Value(v) => {
                current += v;
                seen_value = true;
            }
            Token::Hundred => {
                current = current.max(1.0) * 100.0;
                seen_value = true;
            }
            Token::Scale(scale) => {
                #[allow(clippy::cast_precision_loss)]
                let scale = scale as f64;
                total += current.max(1.0) * scale;
                current = 0.0;
                seen_value = true;
            }
        }
    }

    seen_value.then_some(total + current)
}
