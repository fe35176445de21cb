use sarthi::{
    repository::{Arrival, BusStop},
    shared::{Coordinate, Distance, Preview},
};
use serde::Serialize;

const FACILITIES_PREVIEW: usize = 3;
const ARRIVALS_PREVIEW: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct ArrivalDto {
    pub route: String,
    pub destination: String,
    pub eta: String,
}

impl ArrivalDto {
    pub fn from(arrival: &Arrival) -> Self {
        Self {
            route: arrival.route.to_string(),
            destination: arrival.destination.to_string(),
            eta: arrival.eta_label(),
        }
    }
}

/// A card in the stop list.
#[derive(Debug, Clone, Serialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub is_active: bool,
    pub facilities: Preview<String>,
    pub routes: Vec<String>,
    pub next_buses: Preview<ArrivalDto>,
}

impl StopDto {
    pub fn from(stop: &BusStop) -> Self {
        let facilities: Vec<String> = stop.facilities.iter().map(|f| f.to_string()).collect();
        let arrivals: Vec<ArrivalDto> = stop.arrivals.iter().map(ArrivalDto::from).collect();
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            city: stop.city.to_string(),
            address: stop.address.to_string(),
            coordinate: stop.coordinate,
            is_active: stop.is_active,
            facilities: Preview::of(&facilities, FACILITIES_PREVIEW),
            routes: stop.routes.iter().map(|route| route.to_string()).collect(),
            next_buses: Preview::of(&arrivals, ARRIVALS_PREVIEW),
        }
    }
}

/// Everything the stop detail modal shows.
#[derive(Debug, Clone, Serialize)]
pub struct StopDetailDto {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub is_active: bool,
    pub facilities: Vec<String>,
    pub routes: Vec<String>,
    pub next_buses: Vec<ArrivalDto>,
}

impl StopDetailDto {
    pub fn from(stop: &BusStop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            city: stop.city.to_string(),
            address: stop.address.to_string(),
            coordinate: stop.coordinate,
            is_active: stop.is_active,
            facilities: stop.facilities.iter().map(|f| f.to_string()).collect(),
            routes: stop.routes.iter().map(|route| route.to_string()).collect(),
            next_buses: stop.arrivals.iter().map(ArrivalDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbyStopDto {
    pub stop: StopDto,
    pub distance_km: f64,
}

impl NearbyStopDto {
    pub fn from(stop: &BusStop, distance: Distance) -> Self {
        Self {
            stop: StopDto::from(stop),
            distance_km: (distance.as_kilometers() * 10.0).round() / 10.0,
        }
    }
}
