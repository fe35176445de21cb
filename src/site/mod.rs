//! Page navigation and the marketing content around the data pages.

use std::str::FromStr;

use serde::Serialize;

use crate::repository::{BusService, Repository};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Ticketing,
    Routes,
    Search,
    BusStops,
    Eta,
    Contact,
}

impl Page {
    /// In navigation bar order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Ticketing,
        Page::Routes,
        Page::Search,
        Page::BusStops,
        Page::Eta,
        Page::Contact,
    ];

    pub const fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Ticketing => "ticketing",
            Page::Routes => "routes",
            Page::Search => "search",
            Page::BusStops => "busstops",
            Page::Eta => "eta",
            Page::Contact => "contact",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Ticketing => "Ticketing",
            Page::Routes => "Routes",
            Page::Search => "Search",
            Page::BusStops => "Bus Stops",
            Page::Eta => "ETA",
            Page::Contact => "Contact Us",
        }
    }

    /// Unknown slugs land on the home page.
    pub fn from_slug(slug: &str) -> Self {
        slug.parse().unwrap_or_default()
    }
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub page: Page,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Easy Booking",
        description: "Book your bus tickets online with just a few clicks",
        page: Page::Ticketing,
    },
    Feature {
        title: "Punjab Routes",
        description: "Explore all available bus routes across Punjab",
        page: Page::Routes,
    },
    Feature {
        title: "Bus Stops",
        description: "Find bus stops in tier-2 cities with detailed information",
        page: Page::BusStops,
    },
    Feature {
        title: "Live ETA",
        description: "Track your bus in real-time and get accurate arrival times",
        page: Page::Eta,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

impl Stat {
    fn new(value: impl Into<String>, label: &'static str) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

pub fn home_stats() -> Vec<Stat> {
    vec![
        Stat::new("500+", "Daily Routes"),
        Stat::new("50k+", "Happy Travelers"),
        Stat::new("200+", "Bus Stops"),
        Stat::new("99.9%", "Uptime"),
    ]
}

pub fn route_stats() -> Vec<Stat> {
    vec![
        Stat::new("150+", "Active Routes"),
        Stat::new("500+", "Daily Trips"),
        Stat::new("25", "Cities Connected"),
        Stat::new("1000+", "Bus Stops"),
    ]
}

/// Counts come from the catalog, the rest is marketing copy.
pub fn stop_stats(repository: &Repository) -> Vec<Stat> {
    vec![
        Stat::new(format!("{}+", repository.stops.len()), "Bus Stops"),
        Stat::new(repository.stop_cities().len().to_string(), "Cities Covered"),
        Stat::new("24/7", "Live Updates"),
        Stat::new("95%", "Accuracy"),
    ]
}

/// The hero search box on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickSearch {
    pub from: String,
    pub to: String,
}

impl QuickSearch {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.from.trim().is_empty() && !self.to.trim().is_empty()
    }

    /// The search page once both ends are filled in, otherwise stay home.
    pub fn target(&self) -> Page {
        if self.is_complete() {
            Page::Search
        } else {
            Page::Home
        }
    }

    /// Search results running from `from` to `to`.
    pub fn results<'a>(&self, repository: &'a Repository) -> Vec<&'a BusService> {
        if !self.is_complete() {
            return Vec::new();
        }
        let from = self.from.trim().to_lowercase();
        let to = self.to.trim().to_lowercase();
        repository
            .services
            .iter()
            .filter(|service| {
                service
                    .route
                    .as_deref()
                    .and_then(|route| route.split_once('→'))
                    .is_some_and(|(start, end)| {
                        start.to_lowercase().contains(&from) && end.to_lowercase().contains(&to)
                    })
            })
            .collect()
    }
}

#[test]
fn unknown_slug_falls_back_home() {
    assert_eq!(Page::from_slug("busstops"), Page::BusStops);
    assert_eq!(Page::from_slug("nowhere"), Page::Home);
}

#[test]
fn quick_search_needs_both_ends() {
    assert_eq!(QuickSearch::new("Ludhiana", " ").target(), Page::Home);
    assert_eq!(QuickSearch::new("Ludhiana", "Jalandhar").target(), Page::Search);
}
