//! Geometry-type cues in bulletin prose.

use std::sync::LazyLock;

use navwarn_core::LocationType;
use regex::Regex;

static AREA_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bAREAS? BOUND").expect("valid area bound regex"));

static AREA_WITHIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bAREAS? WITHIN").expect("valid area within regex"));

/// The geometry type `fragment` announces, if any.
///
/// Checked in order: `AREA(S) BOUND` (polygon), `AREA(S) WITHIN` (circle),
/// `TRACKLINE` (line), `POSITION` or `VICINITY` (point). The order is the
/// only tie-break when a fragment carries several cues.
pub(crate) fn classify_location_type(fragment: &str) -> Option<LocationType> {
    if AREA_BOUND.is_match(fragment) {
        Some(LocationType::Polygon)
    } else if AREA_WITHIN.is_match(fragment) {
        Some(LocationType::Circle)
    } else if fragment.contains("TRACKLINE") {
        Some(LocationType::LineString)
    } else if fragment.contains("POSITION") || fragment.contains("VICINITY") {
        Some(LocationType::Point)
    } else {
        None
    }
}
