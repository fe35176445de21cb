use sarthi::{
    filter::{PriceRange, SearchFilters, TimeWindow},
    repository::Repository,
};

fn matching_ids(filters: &SearchFilters) -> Vec<String> {
    Repository::new()
        .with_catalog()
        .services(filters)
        .into_iter()
        .map(|service| service.id.to_string())
        .collect()
}

#[test]
fn query_matches_operator_route_and_type() {
    let mut filters = SearchFilters::new();
    filters.query = "express".into();
    assert_eq!(matching_ids(&filters), vec!["2", "4"]);
    filters.query = "mohali".into();
    assert_eq!(matching_ids(&filters), vec!["3"]);
    filters.query = "volvo".into();
    assert_eq!(matching_ids(&filters), vec!["2"]);
}

#[test]
fn all_selections_are_no_constraint() {
    let mut filters = SearchFilters::new();
    filters.operator = "All Operators".into();
    filters.bus_type = "All Types".into();
    assert_eq!(matching_ids(&filters).len(), 4);
    assert_eq!(filters.active_count(), 0);
}

#[test]
fn operator_selection() {
    let mut filters = SearchFilters::new();
    filters.operator = "Heritage Express".into();
    assert_eq!(matching_ids(&filters), vec!["4"]);
}

#[test]
fn timing_windows() {
    let mut filters = SearchFilters::new();
    filters.timing = Some(TimeWindow::EarlyMorning);
    assert_eq!(matching_ids(&filters), vec!["1"]);
    filters.timing = Some(TimeWindow::Morning);
    assert_eq!(matching_ids(&filters), vec!["2", "4"]);
    filters.timing = Some(TimeWindow::Afternoon);
    assert_eq!(matching_ids(&filters), vec!["3"]);
    filters.timing = Some(TimeWindow::Evening);
    assert!(matching_ids(&filters).is_empty());
}

#[test]
fn price_ranges() {
    let mut filters = SearchFilters::new();
    filters.price_range = Some(PriceRange::Under200);
    assert_eq!(matching_ids(&filters), vec!["2", "3"]);
    filters.price_range = Some(PriceRange::From200To500);
    assert_eq!(matching_ids(&filters), vec!["1", "4"]);
    filters.price_range = Some(PriceRange::Above1000);
    assert!(matching_ids(&filters).is_empty());
}

#[test]
fn every_amenity_is_required() {
    let mut filters = SearchFilters::new();
    filters.toggle_amenity("WiFi");
    assert_eq!(matching_ids(&filters), vec!["1", "2", "4"]);
    filters.toggle_amenity("Entertainment");
    assert_eq!(matching_ids(&filters), vec!["2"]);
    assert_eq!(filters.active_count(), 2);
}

#[test]
fn clear_resets_everything() {
    let mut filters = SearchFilters::new();
    filters.route = "Ludhiana".into();
    filters.timing = Some(TimeWindow::Evening);
    filters.toggle_amenity("Snacks");
    assert_eq!(filters.active_count(), 3);
    assert!(matching_ids(&filters).is_empty());

    filters.clear();
    assert_eq!(filters, SearchFilters::default());
    assert_eq!(matching_ids(&filters).len(), 4);
}
