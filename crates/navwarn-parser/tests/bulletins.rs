//! End-to-end parsing of realistic multi-line bulletins, through to map
//! features and serialized output.

use navwarn_core::{Geometry, LocationType, MappedLocation};
use navwarn_parser::NavTextParser;

const ROCKET_OPERATIONS: &str = "\
GULF OF MEXICO.
DNC 14.
HAZARDOUS OPERATIONS.
1. ROCKET LAUNCHING 1400Z TO 1700Z DAILY 15 THRU 30 MAR
   IN AREAS BOUND BY:
   A. 28-00N 090-00W, 28-00N 089-00W,
      27-00N 089-00W, 27-00N 090-00W.
   B. 26-30N 088-30W, 26-30N 088-00W,
      26-00N 088-00W.
2. CANCEL THIS MSG 301800Z MAR 24.
";

const GUNNERY: &str = "\
WESTERN MEDITERRANEAN.
GUNNERY EXERCISES.
1. VESSELS REQUESTED TO REMAIN CLEAR OF AREA WITHIN 3 MILES OF:
   A. 36-00N 004-00W.
   B. 36-30.5N 004-30.5W.
";

const CABLE: &str = "\
CARIBBEAN SEA.
CABLE OPERATIONS IN PROGRESS ALONG TRACKLINE JOINING
15-00N 075-00W, 16-00N 074-00W, 17-00N 073-00W.
";

fn parse(text: &str) -> MappedLocation {
    NavTextParser::new().parse(text)
}

#[test]
fn rocket_operations_bulletin() {
    let mapped = parse(ROCKET_OPERATIONS);

    assert_eq!(mapped.location_name(), Some("GULF OF MEXICO."));
    assert_eq!(mapped.specific_area(), Some("HAZARDOUS OPERATIONS."));
    assert_eq!(mapped.dnc(), Some("DNC 14"));
    assert_eq!(mapped.cancel_time(), Some("301800Z MAR 24"));
    assert_eq!(mapped.location_type(), Some(LocationType::Polygon));

    assert_eq!(mapped.location().len(), 2);
    assert_eq!(mapped.location()[0].locations().len(), 4);
    assert_eq!(mapped.location()[1].locations().len(), 3);
    for group in mapped.location() {
        assert_eq!(group.location_type(), LocationType::Polygon);
        assert!(group
            .description()
            .is_some_and(|d| d.contains("AREAS BOUND BY")));
    }
    assert_eq!(mapped.coordinate_count(), 7);
}

#[test]
fn rocket_operations_features() {
    let collection = parse(ROCKET_OPERATIONS)
        .feature_collection()
        .expect("bulletin has locations");
    assert_eq!(collection.features.len(), 2);

    let Geometry::Polygon(polygon) = &collection.features[0].geometry else {
        panic!("expected polygon");
    };
    let ring = &polygon.exterior().0;
    assert_eq!(ring.len(), 5);
    assert_eq!((ring[0].x, ring[0].y), (-90.0, 28.0));
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn gunnery_circles_carry_radius() {
    let mapped = parse(GUNNERY);
    assert_eq!(mapped.location().len(), 2);
    for group in mapped.location() {
        assert_eq!(group.location_type(), LocationType::Circle);
        assert_eq!(group.distance_from_location(), Some("3 MILES"));
    }
    assert_eq!(mapped.location()[1].locations(), ["36-30.5N 004-30.5W"]);

    let collection = mapped.feature_collection().expect("bulletin has locations");
    for feature in &collection.features {
        assert_eq!(feature.properties.radius, Some(3.0 * 1852.0));
        assert!(matches!(feature.geometry, Geometry::Point(_)));
    }
}

#[test]
fn cable_trackline_in_heading() {
    let mapped = parse(CABLE);
    assert_eq!(mapped.location().len(), 1);
    let group = &mapped.location()[0];
    assert_eq!(group.location_type(), LocationType::LineString);
    assert_eq!(
        group.locations(),
        ["15-00N 075-00W", "16-00N 074-00W", "17-00N 073-00W"]
    );

    let collection = mapped.feature_collection().expect("bulletin has locations");
    assert!(matches!(
        &collection.features[0].geometry,
        Geometry::LineString(line) if line.0.len() == 3
    ));
}

#[test]
fn serialized_output_shape() {
    let value = serde_json::to_value(parse(GUNNERY)).unwrap();
    assert_eq!(value["location_name"], "WESTERN MEDITERRANEAN.");
    assert_eq!(value["location_type"], "Circle");
    assert_eq!(value["location"][0]["distance_from_location"], "3 MILES");
    assert_eq!(value["location"][0]["locations"][0], "36-00N 004-00W");
}

#[test]
fn serialized_output_reads_back() {
    let mapped = parse(ROCKET_OPERATIONS);
    let json = serde_json::to_string(&mapped).unwrap();
    let back: MappedLocation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mapped);
}

#[test]
fn geojson_collection_shape() {
    let collection = parse(GUNNERY).feature_collection().unwrap();
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"][0]["type"], "Feature");
    assert_eq!(value["features"][0]["geometry"]["type"], "Point");
    assert_eq!(
        value["features"][0]["geometry"]["coordinates"],
        serde_json::json!([-4.0, 36.0])
    );
}

#[test]
fn bulletins_parse_concurrently() {
    let parser = NavTextParser::new();
    let bulletins = [ROCKET_OPERATIONS, GUNNERY, CABLE];
    let sequential: Vec<MappedLocation> = bulletins.iter().map(|b| parser.parse(b)).collect();

    let concurrent: Vec<MappedLocation> = std::thread::scope(|s| {
        let handles: Vec<_> = bulletins
            .iter()
            .map(|b| s.spawn(move || parser.parse(b)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}
