//! Per-parse accumulator.
//!
//! A [`ParseContext`] is created at the start of every parse and consumed
//! into the resulting [`MappedLocation`]; nothing survives between calls.

use navwarn_core::{LocationType, LocationWithType, MappedLocation, MappedLocationParts};

use crate::chart::{extract_chart_reference, ChartKind};
use crate::geometry::classify_location_type;
use crate::times::{cancel_time, when_time};

/// What an enclosing section hands down to the sections nested in it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scope {
    /// Distance phrase inherited unless the nested section has its own.
    pub distance: Option<String>,
    /// Prose that opens the nested section's running description.
    pub description: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct ParseContext {
    pub area_name: Option<String>,
    pub specific_area: Option<String>,
    pub subject: Option<String>,
    pub extras: Vec<String>,
    pub chart: Option<String>,
    pub dnc: Option<String>,
    /// Sticky: set by the last fragment that carried a geometry cue.
    pub current_location_type: LocationType,
    pub first_distance: Option<String>,
    pub number_distance: Option<String>,
    pub locations: Vec<LocationWithType>,
    pub cancel_time: Option<String>,
    pub when_time: Option<String>,
}

impl ParseContext {
    /// Updates the sticky geometry type when `fragment` carries a cue.
    pub fn classify(&mut self, fragment: &str) {
        if let Some(location_type) = classify_location_type(fragment) {
            if location_type != self.current_location_type {
                tracing::trace!(
                    from = %self.current_location_type,
                    to = %location_type,
                    "geometry type changed"
                );
            }
            self.current_location_type = location_type;
        }
    }

    /// Records the first DNC and printed chart references and returns the
    /// fragment with a leading reference removed.
    pub fn take_chart_references(&mut self, fragment: &str) -> String {
        let mut remainder = fragment.trim().to_string();
        if self.dnc.is_none() {
            if let Some(found) = extract_chart_reference(&remainder, ChartKind::Dnc) {
                self.dnc = Some(found.reference);
                remainder = found.remainder;
            }
        }
        if self.chart.is_none() {
            if let Some(found) = extract_chart_reference(&remainder, ChartKind::Chart) {
                self.chart = Some(found.reference);
                remainder = found.remainder;
            }
        }
        remainder
    }

    /// Puts a heading sentence into the first free slot: area name, then
    /// specific area, then subject, then extras.
    pub fn fill_heading_slot(&mut self, sentence: &str) {
        let sentence = sentence.to_string();
        if self.area_name.is_none() {
            self.area_name = Some(sentence);
        } else if self.specific_area.is_none() {
            self.specific_area = Some(sentence);
        } else if self.subject.is_none() {
            self.subject = Some(sentence);
        } else {
            self.extras.push(sentence);
        }
    }

    /// Keeps the first cancellation time and the first time window seen.
    pub fn note_times(&mut self, fragment: &str) {
        if self.cancel_time.is_none() {
            self.cancel_time = cancel_time(fragment);
        }
        if self.when_time.is_none() {
            self.when_time = when_time(fragment);
        }
    }

    /// Emits a location group typed with the current sticky geometry.
    /// Nothing is emitted for an empty coordinate list.
    pub fn push_location(
        &mut self,
        locations: Vec<String>,
        description: Option<String>,
        distance: Option<String>,
    ) {
        let count = locations.len();
        if let Some(location) =
            LocationWithType::new(locations, self.current_location_type, description, distance)
        {
            tracing::debug!(
                location_type = %location.location_type(),
                coordinates = count,
                "emitting location group"
            );
            self.locations.push(location);
        }
    }

    pub fn into_mapped_location(self) -> MappedLocation {
        let location_type = (!self.locations.is_empty()).then_some(self.current_location_type);
        MappedLocation::from(MappedLocationParts {
            location_name: self.area_name,
            location_type,
            specific_area: self.specific_area,
            subject: self.subject,
            cancel_time: self.cancel_time,
            when_time: self.when_time,
            what: None,
            extra: self.extras,
            dnc: self.dnc,
            chart: self.chart,
            location: self.locations,
        })
    }
}
