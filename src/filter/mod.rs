//! Filters for the bus search page.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::{
    repository::BusService,
    shared::{text::contains_ci, time::Time},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown timing window: {0}")]
    UnknownTiming(String),
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),
}

pub const OPERATORS: [&str; 4] = [
    "Punjab Roadways",
    "Express Travels",
    "City Bus Service",
    "Heritage Express",
];
pub const BUS_TYPES: [&str; 4] = ["AC Sleeper", "Semi-Sleeper", "Volvo AC", "Luxury"];
pub const AMENITIES: [&str; 7] = [
    "AC",
    "WiFi",
    "Charging Port",
    "Entertainment",
    "Snacks",
    "Blanket",
    "Reading Light",
];

/// Departure time-of-day buckets. Each window is half open, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeWindow {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::EarlyMorning,
        TimeWindow::Morning,
        TimeWindow::Afternoon,
        TimeWindow::Evening,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            TimeWindow::EarlyMorning => "early-morning",
            TimeWindow::Morning => "morning",
            TimeWindow::Afternoon => "afternoon",
            TimeWindow::Evening => "evening",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            TimeWindow::EarlyMorning => "Early Morning (5-8 AM)",
            TimeWindow::Morning => "Morning (8-12 PM)",
            TimeWindow::Afternoon => "Afternoon (12-5 PM)",
            TimeWindow::Evening => "Evening (5-10 PM)",
        }
    }

    const fn bounds(&self) -> (Time, Time) {
        match self {
            TimeWindow::EarlyMorning => (Time::from_hm(5, 0), Time::from_hm(8, 0)),
            TimeWindow::Morning => (Time::from_hm(8, 0), Time::from_hm(12, 0)),
            TimeWindow::Afternoon => (Time::from_hm(12, 0), Time::from_hm(17, 0)),
            TimeWindow::Evening => (Time::from_hm(17, 0), Time::from_hm(22, 0)),
        }
    }

    pub fn contains(&self, time: Time) -> bool {
        let (start, end) = self.bounds();
        start <= time && time < end
    }
}

impl FromStr for TimeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TimeWindow::ALL
            .into_iter()
            .find(|window| window.key().eq_ignore_ascii_case(s) || window.label() == s)
            .ok_or_else(|| Error::UnknownTiming(s.to_string()))
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Under200,
    From200To500,
    From500To1000,
    Above1000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Under200,
        PriceRange::From200To500,
        PriceRange::From500To1000,
        PriceRange::Above1000,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            PriceRange::Under200 => "under-200",
            PriceRange::From200To500 => "200-500",
            PriceRange::From500To1000 => "500-1000",
            PriceRange::Above1000 => "above-1000",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PriceRange::Under200 => "Under ₹200",
            PriceRange::From200To500 => "₹200-₹500",
            PriceRange::From500To1000 => "₹500-₹1000",
            PriceRange::Above1000 => "Above ₹1000",
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceRange::Under200 => price < 200,
            PriceRange::From200To500 => (200..500).contains(&price),
            PriceRange::From500To1000 => (500..=1000).contains(&price),
            PriceRange::Above1000 => price > 1000,
        }
    }
}

impl FromStr for PriceRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceRange::ALL
            .into_iter()
            .find(|range| range.key().eq_ignore_ascii_case(s) || range.label() == s)
            .ok_or_else(|| Error::UnknownPriceRange(s.to_string()))
    }
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the search page can narrow results by.
/// Empty strings and `None` leave a dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub query: String,
    pub route: String,
    pub operator: String,
    pub bus_type: String,
    pub timing: Option<TimeWindow>,
    pub price_range: Option<PriceRange>,
    pub amenities: Vec<String>,
}

pub const ALL_OPERATORS: &str = "All Operators";
pub const ALL_TYPES: &str = "All Types";
pub const ALL_TIMES: &str = "All Times";
pub const ALL_PRICES: &str = "All Prices";

/// Select values such as `All Operators` count as no selection.
pub fn selection(value: &str) -> &str {
    let value = value.trim();
    if value.starts_with("All ") || value.eq_ignore_ascii_case("all") {
        ""
    } else {
        value
    }
}

impl SearchFilters {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Adds the amenity when missing, removes it otherwise.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(position) = self
            .amenities
            .iter()
            .position(|value| value.eq_ignore_ascii_case(amenity))
        {
            self.amenities.remove(position);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    pub fn matches(&self, service: &BusService) -> bool {
        let route = service.route.as_deref().unwrap_or_default();
        let query = self.query.trim();
        let matches_query = query.is_empty()
            || contains_ci(&service.operator, query)
            || contains_ci(route, query)
            || contains_ci(&service.bus_type, query);

        let operator = selection(&self.operator);
        let bus_type = selection(&self.bus_type);

        matches_query
            && contains_ci(route, &self.route)
            && (operator.is_empty() || service.operator.eq_ignore_ascii_case(operator))
            && (bus_type.is_empty() || service.bus_type.eq_ignore_ascii_case(bus_type))
            && self
                .timing
                .is_none_or(|window| window.contains(service.departure))
            && self
                .price_range
                .is_none_or(|range| range.contains(service.price))
            && self
                .amenities
                .iter()
                .all(|amenity| service.has_amenity(amenity))
    }

    /// Number of constraints currently applied, shown on the filter toggle.
    pub fn active_count(&self) -> usize {
        [
            !self.route.trim().is_empty(),
            !selection(&self.operator).is_empty(),
            !selection(&self.bus_type).is_empty(),
            self.timing.is_some(),
            self.price_range.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
            + self.amenities.len()
    }
}

#[test]
fn evening_window_is_half_open() {
    assert!(TimeWindow::Evening.contains(Time::from_hm(17, 0)));
    assert!(!TimeWindow::Evening.contains(Time::from_hm(22, 0)));
}

#[test]
fn price_range_boundaries() {
    assert!(PriceRange::Under200.contains(199));
    assert!(PriceRange::From200To500.contains(200));
    assert!(!PriceRange::From200To500.contains(500));
    assert!(PriceRange::From500To1000.contains(1000));
    assert!(!PriceRange::Above1000.contains(1000));
}

#[test]
fn parse_labels_and_keys() {
    assert_eq!("Morning (8-12 PM)".parse(), Ok(TimeWindow::Morning));
    assert_eq!("early-morning".parse(), Ok(TimeWindow::EarlyMorning));
    assert_eq!("₹200-₹500".parse(), Ok(PriceRange::From200To500));
    assert_eq!(
        "cheap".parse::<PriceRange>(),
        Err(Error::UnknownPriceRange("cheap".into()))
    );
}

#[test]
fn all_selections_are_blank() {
    assert_eq!(selection(ALL_TIMES), "");
    assert_eq!(selection(" all "), "");
    assert_eq!(selection("Volvo AC"), "Volvo AC");
}

#[test]
fn toggle_amenity_twice_removes_it() {
    let mut filters = SearchFilters::new();
    filters.toggle_amenity("WiFi");
    assert_eq!(filters.amenities, vec!["WiFi".to_string()]);
    filters.toggle_amenity("wifi");
    assert!(filters.amenities.is_empty());
}
