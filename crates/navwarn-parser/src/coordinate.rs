//! The coordinate-pair pattern every other stage builds on.

use std::sync::LazyLock;

use regex::{Match, Regex};

/// One latitude/longitude pair in bulletin notation:
/// `DD[-MM[-SS]][.fff]{N|S} DDD[-MM[-SS]][.fff]{E|W}`.
///
/// Digits are ASCII only. Whitespace between the halves may include a line
/// break.
pub(crate) static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b[0-9]{1,2}(?:-[0-9]{1,2}(?:-[0-9]{1,2})?)?(?:\.[0-9]+)?[NS]\s+[0-9]{1,3}(?:-[0-9]{1,2}(?:-[0-9]{1,2})?)?(?:\.[0-9]+)?[EW]\b",
    )
    .expect("valid coordinate regex")
});

/// All coordinate-pair matches in `text`, left to right.
///
/// A match glued to a preceding `-` or `.` is the tail of a longer number
/// and is skipped.
pub(crate) fn find_coordinate_pairs(text: &str) -> Vec<Match<'_>> {
    COORDINATE_PATTERN
        .find_iter(text)
        .filter(|m| !matches!(text[..m.start()].chars().next_back(), Some('-' | '.')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(text: &str) -> Vec<&str> {
        find_coordinate_pairs(text)
            .into_iter()
            .map(|m| m.as_str())
            .collect()
    }

    #[test]
    fn degrees_minutes() {
        assert_eq!(matched("IN 28-00N 090-00W."), vec!["28-00N 090-00W"]);
    }

    #[test]
    fn decimal_minutes_and_seconds() {
        assert_eq!(
            matched("BETWEEN 12-30.5S 045-15.25E AND 10-00-30N 020-00-15W"),
            vec!["12-30.5S 045-15.25E", "10-00-30N 020-00-15W"]
        );
    }

    #[test]
    fn degrees_only() {
        assert_eq!(matched("NEAR 28N 090W"), vec!["28N 090W"]);
    }

    #[test]
    fn pair_split_across_line_break() {
        assert_eq!(matched("AT 28-00N\n090-00W"), vec!["28-00N\n090-00W"]);
    }

    #[test]
    fn comma_separated_list() {
        assert_eq!(
            matched("28-00N 090-00W, 28-00N 089-00W, 27-00N 089-00W"),
            vec!["28-00N 090-00W", "28-00N 089-00W", "27-00N 089-00W"]
        );
    }

    #[test]
    fn lone_latitude_does_not_match() {
        assert!(matched("LATITUDE 28-00N ONLY").is_empty());
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        // Arabic-Indic and fullwidth digits.
        let arabic = "AT \u{662}\u{668}-\u{660}\u{660}N \u{660}\u{669}\u{660}-\u{660}\u{660}W";
        let fullwidth = "AT \u{ff12}\u{ff18}N \u{ff10}\u{ff19}\u{ff10}W";
        assert!(matched(arabic).is_empty());
        assert!(matched(fullwidth).is_empty());
    }

    #[test]
    fn embedded_in_longer_number_does_not_match() {
        assert!(matched("X128-00N 090-00W").is_empty());
    }
}
