use sarthi::{
    repository::Repository,
    site::{self, FEATURES, Page, QuickSearch},
};

#[test]
fn pages_in_navigation_order() {
    let slugs: Vec<&str> = Page::ALL.iter().map(|page| page.slug()).collect();
    assert_eq!(
        slugs,
        vec!["home", "ticketing", "routes", "search", "busstops", "eta", "contact"]
    );
    assert_eq!(Page::Contact.label(), "Contact Us");
    assert_eq!(Page::from_slug("ETA"), Page::Eta);
    assert_eq!(Page::from_slug(""), Page::Home);
}

#[test]
fn features_link_to_pages() {
    let pages: Vec<Page> = FEATURES.iter().map(|feature| feature.page).collect();
    assert_eq!(
        pages,
        vec![Page::Ticketing, Page::Routes, Page::BusStops, Page::Eta]
    );
}

#[test]
fn stop_stats_count_the_catalog() {
    let repository = Repository::new().with_catalog();
    let stats = site::stop_stats(&repository);
    assert_eq!(stats[0].value, "5+");
    assert_eq!(stats[1].value, "5");
    assert_eq!(stats[1].label, "Cities Covered");
}

#[test]
fn fixed_marketing_stats() {
    assert_eq!(site::home_stats()[1].value, "50k+");
    assert_eq!(site::route_stats()[2].value, "25");
}

#[test]
fn quick_search_results() {
    let repository = Repository::new().with_catalog();
    let search = QuickSearch::new("chandigarh", "AMRITSAR");
    assert_eq!(search.target(), Page::Search);
    let results = search.results(&repository);
    assert_eq!(results.len(), 1);
    assert_eq!(&*results[0].operator, "Punjab Roadways");

    let reversed = QuickSearch::new("Amritsar", "Chandigarh");
    assert!(reversed.results(&repository).is_empty());
    assert!(QuickSearch::default().results(&repository).is_empty());
}
