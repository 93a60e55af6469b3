//! Parsed bulletin records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::distance::meters_distance;
use crate::dtg::parse_dtg;

/// Geometry class of a group of coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    Point,
    Circle,
    LineString,
    Polygon,
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationType::Point => write!(f, "Point"),
            LocationType::Circle => write!(f, "Circle"),
            LocationType::LineString => write!(f, "LineString"),
            LocationType::Polygon => write!(f, "Polygon"),
        }
    }
}

/// One group of coordinate pairs sharing a geometry type.
///
/// `locations` holds the raw coordinate-pair substrings exactly as they
/// appeared in the bulletin and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocationWithType")]
pub struct LocationWithType {
    locations: Vec<String>,
    location_type: LocationType,
    description: Option<String>,
    distance_from_location: Option<String>,
}

impl LocationWithType {
    /// Builds a location group. Returns `None` when `locations` is empty.
    #[must_use]
    pub fn new(
        locations: Vec<String>,
        location_type: LocationType,
        description: Option<String>,
        distance_from_location: Option<String>,
    ) -> Option<Self> {
        if locations.is_empty() {
            return None;
        }
        Some(Self {
            locations,
            location_type,
            description,
            distance_from_location,
        })
    }

    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    #[must_use]
    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The raw distance phrase, e.g. `"5 MILES"` or `"500 YARD BERTH"`.
    #[must_use]
    pub fn distance_from_location(&self) -> Option<&str> {
        self.distance_from_location.as_deref()
    }

    /// The distance phrase normalized to meters. See
    /// [`crate::distance::meters_distance`].
    #[must_use]
    pub fn meters_distance(&self) -> Option<f64> {
        self.distance_from_location
            .as_deref()
            .and_then(meters_distance)
    }
}

#[derive(Deserialize)]
struct RawLocationWithType {
    locations: Vec<String>,
    #[serde(default)]
    location_type: LocationType,
    description: Option<String>,
    distance_from_location: Option<String>,
}

impl TryFrom<RawLocationWithType> for LocationWithType {
    type Error = String;

    fn try_from(raw: RawLocationWithType) -> Result<Self, Self::Error> {
        LocationWithType::new(
            raw.locations,
            raw.location_type,
            raw.description,
            raw.distance_from_location,
        )
        .ok_or_else(|| "locations must not be empty".to_string())
    }
}

/// Field values for building a [`MappedLocation`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MappedLocationParts {
    pub location_name: Option<String>,
    pub location_type: Option<LocationType>,
    pub specific_area: Option<String>,
    pub subject: Option<String>,
    pub cancel_time: Option<String>,
    pub when_time: Option<String>,
    pub what: Option<String>,
    pub extra: Vec<String>,
    pub dnc: Option<String>,
    pub chart: Option<String>,
    pub location: Vec<LocationWithType>,
}

/// Structured result of parsing one bulletin. Read-only once built.
///
/// `location_type` is only ever present alongside at least one location
/// group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MappedLocationParts")]
pub struct MappedLocation {
    location_name: Option<String>,
    location_type: Option<LocationType>,
    specific_area: Option<String>,
    subject: Option<String>,
    cancel_time: Option<String>,
    when_time: Option<String>,
    what: Option<String>,
    extra: Vec<String>,
    dnc: Option<String>,
    chart: Option<String>,
    location: Vec<LocationWithType>,
}

impl From<MappedLocationParts> for MappedLocation {
    fn from(parts: MappedLocationParts) -> Self {
        let location_type = parts.location_type.filter(|_| !parts.location.is_empty());
        Self {
            location_name: parts.location_name,
            location_type,
            specific_area: parts.specific_area,
            subject: parts.subject,
            cancel_time: parts.cancel_time,
            when_time: parts.when_time,
            what: parts.what,
            extra: parts.extra,
            dnc: parts.dnc,
            chart: parts.chart,
            location: parts.location,
        }
    }
}

impl MappedLocation {
    /// The broad sea area named first in the heading.
    #[must_use]
    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    /// The last geometry type in effect when parsing finished.
    #[must_use]
    pub fn location_type(&self) -> Option<LocationType> {
        self.location_type
    }

    #[must_use]
    pub fn specific_area(&self) -> Option<&str> {
        self.specific_area.as_deref()
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Raw date-time group from a `CANCEL THIS MSG` line.
    #[must_use]
    pub fn cancel_time(&self) -> Option<&str> {
        self.cancel_time.as_deref()
    }

    #[must_use]
    pub fn when_time(&self) -> Option<&str> {
        self.when_time.as_deref()
    }

    #[must_use]
    pub fn what(&self) -> Option<&str> {
        self.what.as_deref()
    }

    /// Prose that did not land in a named slot, in reading order.
    #[must_use]
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Digital Nautical Chart reference, e.g. `"DNC 14"`.
    #[must_use]
    pub fn dnc(&self) -> Option<&str> {
        self.dnc.as_deref()
    }

    #[must_use]
    pub fn chart(&self) -> Option<&str> {
        self.chart.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> &[LocationWithType] {
        &self.location
    }

    /// The cancellation time as a UTC timestamp, when present and well formed.
    #[must_use]
    pub fn cancel_time_utc(&self) -> Option<DateTime<Utc>> {
        self.cancel_time.as_deref().and_then(parse_dtg)
    }

    /// Total number of raw coordinate pairs across all location groups.
    #[must_use]
    pub fn coordinate_count(&self) -> usize {
        self.location.iter().map(|l| l.locations().len()).sum()
    }
}
