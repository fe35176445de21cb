use sarthi::shared::{Coordinate, DEFAULT_NEARBY_DISTANCE, Distance};

#[test]
fn distance_test() {
    let ludhiana = Coordinate {
        latitude: 30.9010,
        longitude: 75.8573,
    };
    let amritsar = Coordinate {
        latitude: 31.6200,
        longitude: 74.8765,
    };
    let d = ludhiana.haversine_distance(&amritsar);
    assert!((d.as_kilometers() - 123.0).abs() < 2.0);
}

#[test]
fn distance_is_symmetric() {
    let a: Coordinate = "30.2118,74.9455".parse().unwrap();
    let b: Coordinate = "30.8162,75.1725".parse().unwrap();
    assert_eq!(
        a.haversine_distance(&b).as_meters().round(),
        b.haversine_distance(&a).as_meters().round()
    );
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn default_radius() {
    assert_eq!(DEFAULT_NEARBY_DISTANCE, Distance::from_meters(25_000.0));
    assert_eq!(DEFAULT_NEARBY_DISTANCE.to_string(), "25 km");
}

#[test]
fn invalid_coordinates() {
    assert!("91.0,10.0".parse::<Coordinate>().is_err());
    assert!("30.0;75.0".parse::<Coordinate>().is_err());
    assert!("north,east".parse::<Coordinate>().is_err());
}
