use sarthi::{
    repository::{BusStatus, Capacity, TrackedBus},
    shared::{Coordinate, Preview},
    tracking::{self, Recency, UpcomingStop},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BusDto {
    pub id: String,
    pub bus_number: String,
    pub route: String,
    pub current_location: String,
    pub destination: String,
    pub eta: String,
    pub delay_minutes: u32,
    pub status: BusStatus,
    pub status_label: String,
    pub next_stops: Preview<String>,
    pub upcoming_stops: Vec<UpcomingStop>,
    pub last_updated: Recency,
    pub coordinate: Coordinate,
    pub capacity: Capacity,
    pub seats_available: u32,
    pub occupancy_percent: f64,
}

impl BusDto {
    pub fn from(bus: &TrackedBus) -> Self {
        Self {
            id: bus.id.to_string(),
            bus_number: bus.bus_number.to_string(),
            route: bus.route.to_string(),
            current_location: bus.current_location.to_string(),
            destination: bus.destination.to_string(),
            eta: tracking::eta_label(bus),
            delay_minutes: bus.delay.as_minutes(),
            status: bus.status,
            status_label: tracking::status_label(bus),
            next_stops: tracking::next_stops_preview(bus),
            upcoming_stops: tracking::upcoming_stops(bus),
            last_updated: bus.last_updated,
            coordinate: bus.coordinate,
            capacity: bus.capacity,
            seats_available: tracking::seats_available(&bus.capacity),
            occupancy_percent: tracking::occupancy_percent(&bus.capacity),
        }
    }
}

/// The live tracking panel: the buses plus the stalest update among them.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingDto {
    pub last_updated: Recency,
    pub buses: Vec<BusDto>,
}

impl TrackingDto {
    pub fn from(buses: &[&TrackedBus]) -> Self {
        Self {
            last_updated: tracking::last_updated(buses.iter().copied()),
            buses: buses.iter().map(|bus| BusDto::from(bus)).collect(),
        }
    }
}
