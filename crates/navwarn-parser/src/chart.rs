//! Chart references (`DNC 14`, `CHART 11340`) printed in bulletin headings.

use std::sync::LazyLock;

use regex::{Match, Regex};

static DNC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDNC \d+\b").expect("valid dnc regex"));

static CHART_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCHARTS? \d+\b").expect("valid chart regex"));

/// Which kind of chart a reference names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartKind {
    /// Digital Nautical Chart.
    Dnc,
    /// Printed chart number.
    Chart,
}

/// A chart reference found in a fragment, plus the fragment with the
/// reference removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChartReference {
    pub reference: String,
    pub remainder: String,
}

/// Looks for a chart reference of `kind` in `fragment`.
///
/// When the reference opens the fragment it is stripped, together with a
/// following `.` and surrounding whitespace; elsewhere the fragment is left
/// as is.
pub(crate) fn extract_chart_reference(fragment: &str, kind: ChartKind) -> Option<ChartReference> {
    let pattern = match kind {
        ChartKind::Dnc => &DNC_PATTERN,
        ChartKind::Chart => &CHART_PATTERN,
    };
    let m = pattern.find(fragment)?;
    Some(ChartReference {
        reference: m.as_str().to_string(),
        remainder: strip_prefix_reference(fragment, &m),
    })
}

fn strip_prefix_reference(fragment: &str, m: &Match<'_>) -> String {
    if !fragment[..m.start()].trim().is_empty() {
        return fragment.trim().to_string();
    }
    let rest = fragment[m.end()..].trim_start();
    rest.strip_prefix('.').unwrap_or(rest).trim().to_string()
}
