use sarthi::{
    filter::SearchFilters,
    repository::{Region, Repository},
    shared::{Coordinate, Distance},
};

fn repository() -> Repository {
    Repository::new().with_catalog()
}

#[test]
fn catalog_sizes() {
    let repository = repository();
    assert_eq!(repository.routes.len(), 5);
    assert_eq!(repository.stops.len(), 5);
    assert_eq!(repository.buses.len(), 3);
    assert_eq!(repository.services.len(), 4);
    assert_eq!(repository.booking_options.len(), 3);
}

#[test]
fn routes_by_query() {
    let repository = repository();
    assert_eq!(repository.routes("", None).len(), 5);
    let routes = repository.routes("PATIALA", None);
    assert_eq!(routes.len(), 1);
    assert_eq!(&*routes[0].id, "3");
}

#[test]
fn routes_by_region() {
    let repository = repository();
    let routes = repository.routes("", Some(Region::Western));
    let ids: Vec<&str> = routes.iter().map(|route| &*route.id).collect();
    assert_eq!(ids, vec!["4", "5"]);
    assert!(repository.routes("ludhiana", Some(Region::Northern)).is_empty());
}

#[test]
fn route_lookup() {
    let repository = repository();
    let route = repository.route_by_id("4").unwrap();
    assert_eq!(&*route.name, "Bathinda - Faridkot Loop");
    assert_eq!(route.frequency(), "Every 1 hour");
    assert_eq!(route.operating_hours(), "05:45 - 20:30");
    assert_eq!(route.distance.to_string(), "92 km");
    assert_eq!(route.duration.to_string(), "2h 15m");
    assert!(repository.route_by_id("6").is_none());
}

#[test]
fn stops_by_city() {
    let repository = repository();
    assert_eq!(repository.stops("", "All Cities").len(), 5);
    assert_eq!(repository.stops("", "all").len(), 5);
    let stops = repository.stops("", "bathinda");
    assert_eq!(stops.len(), 1);
    assert_eq!(&*stops[0].name, "Railway Station Bus Stop");
    assert!(repository.stops("", "Mohali").is_empty());
}

#[test]
fn stops_by_query_and_city() {
    let repository = repository();
    assert_eq!(repository.stops("university", "all").len(), 1);
    assert_eq!(repository.stops("punjab", "Moga").len(), 1);
    assert_eq!(repository.stops("punjab", "").len(), 5);
    assert!(repository.stops("golden", "Patiala").is_empty());
}

#[test]
fn stop_cities_are_sorted() {
    let repository = repository();
    assert_eq!(
        repository.stop_cities(),
        vec!["Amritsar", "Bathinda", "Ludhiana", "Moga", "Patiala"]
    );
}

#[test]
fn stops_near_a_coordinate() {
    let repository = repository();
    let golden_temple = Coordinate {
        latitude: 31.6200,
        longitude: 74.8765,
    };
    let stops = repository.stops_by_coordinate(&golden_temple, Distance::from_kilometers(1.0));
    assert_eq!(stops.len(), 1);
    assert_eq!(&*stops[0].0.id, "4");
    assert_eq!(stops[0].1.as_meters(), 0.0);

    let stops = repository.stops_by_coordinate(&golden_temple, Distance::from_kilometers(500.0));
    assert_eq!(stops.len(), 5);
    assert!(stops.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn buses_by_query() {
    let repository = repository();
    assert_eq!(repository.buses("").len(), 3);
    let buses = repository.buses("khanna");
    assert_eq!(buses.len(), 1);
    assert_eq!(&*buses[0].bus_number, "PB-02-B-5678");
    assert_eq!(repository.buses("→").len(), 3);
    assert_eq!(&*repository.bus_by_id("3").unwrap().destination, "Patiala Bus Terminal");
}

#[test]
fn services_follow_filters() {
    let repository = repository();
    let mut filters = SearchFilters::new();
    assert_eq!(repository.services(&filters).len(), 4);
    filters.bus_type = "Semi-Sleeper".into();
    let ids: Vec<&str> = repository
        .services(&filters)
        .into_iter()
        .map(|service| &*service.id)
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn booking_option_lookup() {
    let repository = repository();
    let option = repository.booking_option_by_id("3").unwrap();
    assert_eq!(&*option.operator, "City Bus Service");
    assert_eq!(option.price, 380);
    assert!(option.route.is_none());
    assert!(repository.booking_option_by_id("4").is_none());
}

#[test]
fn cities_include_route_endpoints() {
    let repository = repository();
    let names: Vec<&str> = repository.cities.iter().map(|city| &*city.name).collect();
    assert!(names.contains(&"Fazilka"));
    assert!(names.contains(&"Zirakpur"));
    assert_eq!(names.iter().filter(|name| **name == "Patiala").count(), 1);
}
