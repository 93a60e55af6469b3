//! Recursive descent over heading, numbered items and lettered sub-items.
//!
//! Each level reads its own prose, may classify the geometry type (sticky
//! for everything after it), and hands a [`Scope`] down to the level below.
//! Distance phrases flow heading → number → letter, never upward.

use navwarn_core::MappedLocation;

use crate::context::{ParseContext, Scope};
use crate::description::split_description_locations;
use crate::distance::extract_distance;
use crate::sections::{
    join_lines, split_heading, split_letters, split_letters_from_heading, split_numbers,
    split_sentences,
};

/// Parses navigational warning text into a [`MappedLocation`].
///
/// Holds no state: every call builds and consumes its own context, so one
/// parser can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavTextParser;

impl NavTextParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses one bulletin. Never fails; unrecognized text yields fewer
    /// fields and locations.
    #[must_use]
    pub fn parse(&self, text: &str) -> MappedLocation {
        parse_to_mapped_location(text)
    }
}

/// Parses one bulletin with a fresh context. See [`NavTextParser::parse`].
#[must_use]
pub fn parse_to_mapped_location(text: &str) -> MappedLocation {
    let mut ctx = ParseContext::default();
    let text = join_lines(text);
    let (heading, body) = split_heading(&text);

    if let Some(heading) = heading {
        parse_heading(&mut ctx, &heading);
    }

    if let Some(body) = body {
        if body.starts_with("1. ") {
            let items = split_numbers(&body);
            tracing::debug!(items = items.len(), "split numbered items");
            for item in &items {
                parse_number(&mut ctx, item);
            }
        } else if body.starts_with("A. ") {
            let items = split_letters(&body);
            tracing::debug!(items = items.len(), "split lettered items");
            let scope = Scope {
                distance: ctx.first_distance.clone(),
                description: None,
            };
            for item in &items {
                parse_letter(&mut ctx, item, &scope);
            }
        }
    }

    ctx.into_mapped_location()
}

/// Heading sentences fill the named slots; every coordinate pair found
/// anywhere in the heading joins one pooled location group.
fn parse_heading(ctx: &mut ParseContext, heading: &str) {
    let sentences = split_sentences(heading);
    ctx.first_distance = extract_distance(&sentences.join(" "));

    let mut pooled = Vec::new();
    for sentence in &sentences {
        ctx.classify(sentence);
        let remainder = ctx.take_chart_references(sentence);
        if remainder.is_empty() {
            continue;
        }
        ctx.note_times(&remainder);
        ctx.fill_heading_slot(&remainder);
        pooled.extend(split_description_locations(&remainder).locations);
    }

    let description = ctx.subject.clone();
    let distance = ctx.first_distance.clone();
    ctx.push_location(pooled, description, distance);
}

fn parse_number(ctx: &mut ParseContext, item: &str) {
    let (prose, tail) = split_letters_from_heading(item);

    let scope = if let Some(prose) = prose {
        let distance = extract_distance(&prose).or_else(|| ctx.first_distance.clone());
        ctx.number_distance.clone_from(&distance);
        ctx.extras.push(prose.clone());
        ctx.note_times(&prose);

        let split = split_description_locations(&prose);
        ctx.classify(&prose);
        // Only coordinate-free prose falls back to the whole item text.
        let description = if split.locations.is_empty() {
            Some(split.description.unwrap_or(prose))
        } else {
            split.description
        };
        ctx.push_location(split.locations, description.clone(), distance);

        Scope {
            distance: ctx.number_distance.clone(),
            description,
        }
    } else {
        ctx.number_distance.clone_from(&ctx.first_distance);
        Scope {
            distance: ctx.number_distance.clone(),
            description: None,
        }
    };

    if let Some(tail) = tail {
        for letter in split_letters(&tail) {
            parse_letter(ctx, &letter, &scope);
        }
    }
}

/// Walks a lettered item sentence by sentence, collecting prose and
/// coordinates until a flush boundary.
///
/// A sentence without a space (a lone token such as a chart number) closes
/// the running group; the end of the item closes the last one.
fn parse_letter(ctx: &mut ParseContext, item: &str, scope: &Scope) {
    let sentences = split_sentences(item);
    ctx.extras.extend(sentences.iter().cloned());

    let distance = extract_distance(&sentences.join(" ")).or_else(|| scope.distance.clone());
    let mut group = RunningGroup {
        descriptions: scope.description.iter().cloned().collect(),
        coordinates: Vec::new(),
    };

    for sentence in &sentences {
        ctx.note_times(sentence);
        if !sentence.contains(' ') {
            group.flush(ctx, distance.as_deref());
            continue;
        }
        let split = split_description_locations(sentence);
        if let Some(description) = split.description {
            ctx.classify(&description);
            group.descriptions.push(description);
        }
        group.coordinates.extend(split.locations);
    }

    group.flush(ctx, distance.as_deref());
}

struct RunningGroup {
    descriptions: Vec<String>,
    coordinates: Vec<String>,
}

impl RunningGroup {
    /// Emits the accumulated coordinates, if any, and starts over.
    fn flush(&mut self, ctx: &mut ParseContext, distance: Option<&str>) {
        if self.coordinates.is_empty() {
            return;
        }
        let joined = self.descriptions.join(" ");
        let description = Some(joined.trim().to_string()).filter(|d| !d.is_empty());
        ctx.push_location(
            std::mem::take(&mut self.coordinates),
            description,
            distance.map(str::to_string),
        );
        self.descriptions.clear();
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
