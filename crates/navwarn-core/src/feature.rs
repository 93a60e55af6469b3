//! `GeoJSON`-shaped map features derived from parsed locations.
//!
//! Geometries are [`geo`] values with x = longitude and y = latitude. A
//! circle is a point feature with a `radius` property in meters. Output goes
//! through [`geojson`] so the serialized form is standard `GeoJSON`.

use geo::{Coord, Geometry, LineString, Point, Polygon};
use serde::{Deserialize, Serialize, Serializer};

use crate::coordinates::{parse_coordinate_pair, LatLon};
use crate::location::{LocationType, LocationWithType, MappedLocation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Circle radius in meters.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(serialize_with = "serialize_geometry")]
    pub geometry: Geometry<f64>,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

fn serialize_geometry<S: Serializer>(
    geometry: &Geometry<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    geojson::Geometry::new(geojson::Value::from(geometry)).serialize(serializer)
}

fn coord(ll: LatLon) -> Coord<f64> {
    Coord {
        x: ll.longitude,
        y: ll.latitude,
    }
}

impl LocationWithType {
    /// Builds the map feature for this group.
    ///
    /// Coordinate pairs that do not convert are skipped. Too few points for
    /// the declared geometry degrade it (polygon to line to point). Returns
    /// `None` when no coordinate converts.
    #[must_use]
    pub fn to_feature(&self) -> Option<Feature> {
        let coords: Vec<Coord<f64>> = self
            .locations()
            .iter()
            .filter_map(|raw| {
                let converted = parse_coordinate_pair(raw);
                if converted.is_none() {
                    tracing::warn!(coordinate = %raw, "skipping unconvertible coordinate pair");
                }
                converted.map(coord)
            })
            .collect();
        let first = Point::from(*coords.first()?);

        let mut properties = FeatureProperties {
            radius: None,
            description: self.description().map(str::to_string),
        };

        let geometry = match self.location_type() {
            LocationType::Circle => {
                properties.radius = self.meters_distance();
                Geometry::Point(first)
            }
            LocationType::Polygon if coords.len() > 2 => {
                Geometry::Polygon(Polygon::new(LineString::new(coords), Vec::new()))
            }
            LocationType::LineString | LocationType::Polygon if coords.len() > 1 => {
                Geometry::LineString(LineString::new(coords))
            }
            LocationType::Point | LocationType::LineString | LocationType::Polygon => {
                Geometry::Point(first)
            }
        };

        Some(Feature {
            geometry,
            properties,
        })
    }
}

impl MappedLocation {
    /// One feature per location group, wrapped in a collection.
    ///
    /// Returns `None`, not an empty collection, when no feature is produced.
    #[must_use]
    pub fn feature_collection(&self) -> Option<FeatureCollection> {
        let features: Vec<Feature> = self
            .location()
            .iter()
            .filter_map(LocationWithType::to_feature)
            .collect();
        if features.is_empty() {
            None
        } else {
            Some(FeatureCollection { features })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::location::MappedLocationParts;

    use super::*;

    fn group(
        raw: &[&str],
        location_type: LocationType,
        distance: Option<&str>,
    ) -> LocationWithType {
        LocationWithType::new(
            raw.iter().map(|s| (*s).to_string()).collect(),
            location_type,
            Some("TEST AREA".to_string()),
            distance.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn point_uses_lon_lat_order() {
        let feature = group(&["28-00N 090-00W"], LocationType::Point, None)
            .to_feature()
            .unwrap();
        assert_eq!(feature.geometry, Geometry::Point(Point::new(-90.0, 28.0)));
        assert_eq!(feature.properties.description.as_deref(), Some("TEST AREA"));
    }

    #[test]
    fn circle_carries_radius_in_meters() {
        let feature = group(&["28-00N 090-00W"], LocationType::Circle, Some("5 MILES"))
            .to_feature()
            .unwrap();
        assert_eq!(feature.geometry, Geometry::Point(Point::new(-90.0, 28.0)));
        assert_eq!(feature.properties.radius, Some(9260.0));
    }

    #[test]
    fn polygon_ring_is_closed() {
        let feature = group(
            &["28-00N 090-00W", "28-00N 089-00W", "27-00N 089-00W"],
            LocationType::Polygon,
            None,
        )
        .to_feature()
        .unwrap();
        let Geometry::Polygon(polygon) = feature.geometry else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.exterior().0.len(), 4);
        assert!(polygon.exterior().is_closed());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn short_polygon_degrades_to_line() {
        let feature = group(
            &["28-00N 090-00W", "28-00N 089-00W"],
            LocationType::Polygon,
            None,
        )
        .to_feature()
        .unwrap();
        assert!(matches!(feature.geometry, Geometry::LineString(ref line) if line.0.len() == 2));
    }

    #[test]
    fn single_point_line_degrades_to_point() {
        let feature = group(&["28-00N 090-00W"], LocationType::LineString, None)
            .to_feature()
            .unwrap();
        assert!(matches!(feature.geometry, Geometry::Point(_)));
    }

    #[test]
    fn unconvertible_group_has_no_feature() {
        assert!(group(&["28-99N 090-00W"], LocationType::Point, None)
            .to_feature()
            .is_none());
    }

    #[test]
    fn collection_absent_when_nothing_converts() {
        let mapped = MappedLocation::default();
        assert!(mapped.feature_collection().is_none());
    }

    #[test]
    fn collection_serializes_as_geojson() {
        let mapped = MappedLocation::from(MappedLocationParts {
            location: vec![group(&["28-00N 090-00W"], LocationType::Point, None)],
            ..MappedLocationParts::default()
        });
        let json = serde_json::to_value(mapped.feature_collection().unwrap()).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(json["features"][0]["geometry"]["coordinates"][0], -90.0);
        assert!(json["features"][0]["properties"].get("radius").is_none());
    }

    #[test]
    fn polygon_serializes_closed_ring() {
        let feature = group(
            &["28-00N 090-00W", "28-00N 089-00W", "27-00N 089-00W"],
            LocationType::Polygon,
            None,
        )
        .to_feature()
        .unwrap();
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Polygon");
        assert_eq!(
            json["geometry"]["coordinates"],
            serde_json::json!([[[-90.0, 28.0], [-89.0, 28.0], [-89.0, 27.0], [-90.0, 28.0]]])
        );
    }
}
