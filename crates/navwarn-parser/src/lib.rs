//! Free-text navigational warning parser.

mod chart;
mod context;
mod coordinate;
mod description;
mod distance;
mod geometry;
pub mod parser;
mod sections;
mod times;

pub use navwarn_core::{LocationType, LocationWithType, MappedLocation};
pub use parser::{parse_to_mapped_location, NavTextParser};
