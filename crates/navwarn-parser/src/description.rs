//! Separating prose from the coordinate pairs embedded in it.

use crate::coordinate::find_coordinate_pairs;

/// A fragment split into its prose and its coordinate pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DescriptionSplit {
    pub description: Option<String>,
    /// Matched coordinate-pair substrings, verbatim and in order.
    pub locations: Vec<String>,
}

/// A remnant that is only punctuation (`"."`, `", "`) carries no description.
fn remnant(text: &str) -> Option<&str> {
    let text = text.trim();
    text.chars().any(char::is_alphanumeric).then_some(text)
}

/// Splits `fragment` into the prose around its coordinate block and the
/// coordinate pairs themselves.
///
/// The description is the text before the first pair plus the text after
/// the last pair; whatever sits between pairs is separator noise. With no
/// pairs the whole fragment is description.
pub(crate) fn split_description_locations(fragment: &str) -> DescriptionSplit {
    let matches = find_coordinate_pairs(fragment);
    let (Some(first), Some(last)) = (matches.first(), matches.last()) else {
        return DescriptionSplit {
            description: remnant(fragment).map(str::to_string),
            locations: Vec::new(),
        };
    };

    let before = (first.start() > 0)
        .then(|| remnant(&fragment[..first.start()]))
        .flatten();
    let after = (last.end() < fragment.len())
        .then(|| remnant(&fragment[last.end()..]))
        .flatten();

    let description = match (before, after) {
        (Some(b), Some(a)) => Some(format!("{b} {a}")),
        (Some(b), None) => Some(b.to_string()),
        (None, Some(a)) => Some(a.to_string()),
        (None, None) => None,
    };

    DescriptionSplit {
        description,
        locations: matches.iter().map(|m| m.as_str().to_string()).collect(),
    }
}
