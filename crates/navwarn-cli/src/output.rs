//! Rendering parse results as JSON or YAML documents.

use std::io::Write;

use navwarn_core::{MappedLocation, OutputFormat};
use serde::Serialize;

/// Which view of a parsed bulletin to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Mapped,
    /// The `GeoJSON` feature collection, or `null` when there is none.
    Features,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderOptions {
    pub format: OutputFormat,
    /// Ignored for YAML.
    pub pretty: bool,
}

pub(crate) fn render(
    mapped: &MappedLocation,
    view: View,
    options: RenderOptions,
) -> anyhow::Result<String> {
    match view {
        View::Mapped => render_value(mapped, options),
        View::Features => render_value(&mapped.feature_collection(), options),
    }
}

fn render_value<T: Serialize>(value: &T, options: RenderOptions) -> anyhow::Result<String> {
    let text = match options.format {
        OutputFormat::Json if options.pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// Writes one document per bulletin. YAML documents are separated by
/// `---`; JSON documents by newlines.
pub(crate) fn write_documents<W: Write>(
    out: &mut W,
    documents: &[String],
    format: OutputFormat,
) -> std::io::Result<()> {
    for document in documents {
        if format == OutputFormat::Yaml {
            writeln!(out, "---")?;
        }
        writeln!(out, "{}", document.trim_end())?;
    }
    Ok(())
}
