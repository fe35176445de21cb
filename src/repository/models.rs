use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::Serialize;

use crate::{
    shared::{
        Identifiable,
        geo::{Coordinate, Distance},
        time::{Duration, Time},
    },
    tracking::Recency,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Central,
    Eastern,
    Western,
    Northern,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Central,
        Region::Eastern,
        Region::Western,
        Region::Northern,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Region::Central => "central",
            Region::Eastern => "eastern",
            Region::Western => "western",
            Region::Northern => "northern",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Region::Central => "Central Punjab",
            Region::Eastern => "Eastern Punjab",
            Region::Western => "Western Punjab",
            Region::Northern => "Northern Punjab",
        }
    }
}

impl FromStr for Region {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| {
                region.key().eq_ignore_ascii_case(s) || region.label().eq_ignore_ascii_case(s)
            })
            .ok_or(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Route {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub distance: Distance,
    pub duration: Duration,
    pub stop_count: u32,
    // Time between two departures
    pub headway: Duration,
    pub first_departure: Time,
    pub last_departure: Time,
    pub major_stops: Box<[Arc<str>]>,
    pub region: Region,
}

impl Route {
    /// `Every 30 mins`, `Every 1 hour`, `Every 2 hours`.
    pub fn frequency(&self) -> String {
        let minutes = self.headway.as_minutes();
        match (minutes / 60, minutes % 60) {
            (0, m) => format!("Every {m} mins"),
            (1, 0) => "Every 1 hour".to_string(),
            (h, 0) => format!("Every {h} hours"),
            _ => format!("Every {minutes} mins"),
        }
    }

    pub fn operating_hours(&self) -> String {
        format!("{} - {}", self.first_departure, self.last_departure)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Arrival {
    pub route: Arc<str>,
    pub destination: Arc<str>,
    pub eta: Duration,
}

impl Arrival {
    pub fn eta_label(&self) -> String {
        format!("{} min", self.eta.as_minutes())
    }
}

#[derive(Debug, Default, Clone)]
pub struct BusStop {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub city: Arc<str>,
    pub address: Arc<str>,
    pub coordinate: Coordinate,
    pub facilities: Box<[Arc<str>]>,
    pub routes: Box<[Arc<str>]>,
    pub arrivals: Box<[Arrival]>,
    pub is_active: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusStatus {
    #[default]
    OnTime,
    Delayed,
    Arrived,
}

impl Display for BusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BusStatus::OnTime => "on-time",
            BusStatus::Delayed => "delayed",
            BusStatus::Arrived => "arrived",
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacity {
    pub total: u32,
    pub occupied: u32,
}

#[derive(Debug, Default, Clone)]
pub struct TrackedBus {
    pub index: u32,
    pub id: Arc<str>,
    pub bus_number: Arc<str>,
    pub route: Arc<str>,
    pub current_location: Arc<str>,
    pub destination: Arc<str>,
    pub eta: Duration,
    pub delay: Duration,
    pub status: BusStatus,
    pub next_stops: Box<[Arc<str>]>,
    pub last_updated: Recency,
    pub coordinate: Coordinate,
    pub capacity: Capacity,
}

/// A scheduled departure offered by an operator. Used both for the search
/// page results (with a route) and for ticketing options (without one).
#[derive(Debug, Default, Clone)]
pub struct BusService {
    pub index: u32,
    pub id: Arc<str>,
    pub operator: Arc<str>,
    pub route: Option<Arc<str>>,
    pub departure: Time,
    pub arrival: Time,
    // Rupees per seat
    pub price: u32,
    pub seats_available: u32,
    pub rating: f32,
    pub amenities: Box<[Arc<str>]>,
    pub bus_type: Arc<str>,
}

impl BusService {
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// `Today, 6:30 AM`.
    pub fn next_departure(&self) -> String {
        format!("Today, {}", self.departure.to_12h_string())
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|value| value.eq_ignore_ascii_case(amenity.trim()))
    }
}

/// A city known to the catalog, either as a stop city or a route endpoint.
#[derive(Debug, Default, Clone)]
pub struct City {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
}

impl From<&str> for City {
    fn from(value: &str) -> Self {
        let normalized_name: Arc<str> = value.to_lowercase().into();
        Self {
            id: normalized_name.clone(),
            name: value.into(),
            normalized_name,
        }
    }
}

impl Identifiable for City {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
