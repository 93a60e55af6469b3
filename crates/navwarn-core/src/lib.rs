//! Domain types for parsed navigational warnings.
//!
//! The text parser lives in `navwarn-parser`; this crate holds what it
//! produces ([`MappedLocation`], [`LocationWithType`]), the map-feature view
//! derived from it, the numeric collaborators the parser relies on, and
//! application configuration.

pub mod app_config;
pub mod config;
pub mod coordinates;
pub mod distance;
pub mod dtg;
pub mod feature;
pub mod location;
pub mod numbers;

use thiserror::Error;

pub use app_config::{AppConfig, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinates::{parse_coordinate_pair, LatLon};
pub use distance::{meters_distance, METERS_PER_NAUTICAL_MILE};
pub use feature::{Feature, FeatureCollection, FeatureProperties};
pub use geo::Geometry;
pub use location::{LocationType, LocationWithType, MappedLocation, MappedLocationParts};
pub use numbers::words_to_number;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
