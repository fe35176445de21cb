//! The mock data tables the demo is served from.

use std::sync::Arc;

use super::{Arrival, BusService, BusStatus, BusStop, Capacity, Region, Route, TrackedBus};
use crate::{
    shared::{Coordinate, Distance, Duration, Time},
    tracking::Recency,
};

fn names(values: &[&str]) -> Box<[Arc<str>]> {
    values.iter().map(|value| Arc::from(*value)).collect()
}

fn arrival(route: &str, destination: &str, minutes: u32) -> Arrival {
    Arrival {
        route: route.into(),
        destination: destination.into(),
        eta: Duration::from_minutes(minutes),
    }
}

pub(crate) fn routes() -> Vec<Route> {
    vec![
        Route {
            id: "1".into(),
            name: "Chandigarh - Amritsar Express".into(),
            from: "Chandigarh".into(),
            to: "Amritsar".into(),
            distance: Distance::from_kilometers(245.0),
            duration: Duration::from_minutes(270),
            stop_count: 12,
            headway: Duration::from_minutes(30),
            first_departure: Time::from_hm(5, 0),
            last_departure: Time::from_hm(23, 30),
            major_stops: names(&[
                "Chandigarh",
                "Rajpura",
                "Patiala",
                "Sangrur",
                "Bathinda",
                "Amritsar",
            ]),
            region: Region::Northern,
            ..Default::default()
        },
        Route {
            id: "2".into(),
            name: "Ludhiana - Jalandhar City".into(),
            from: "Ludhiana".into(),
            to: "Jalandhar".into(),
            distance: Distance::from_kilometers(78.0),
            duration: Duration::from_minutes(105),
            stop_count: 8,
            headway: Duration::from_minutes(20),
            first_departure: Time::from_hm(5, 30),
            last_departure: Time::from_hm(22, 0),
            major_stops: names(&["Ludhiana", "Khanna", "Doraha", "Jalandhar"]),
            region: Region::Central,
            ..Default::default()
        },
        Route {
            id: "3".into(),
            name: "Mohali - Patiala Heritage".into(),
            from: "Mohali".into(),
            to: "Patiala".into(),
            distance: Distance::from_kilometers(65.0),
            duration: Duration::from_minutes(90),
            stop_count: 6,
            headway: Duration::from_minutes(45),
            first_departure: Time::from_hm(6, 0),
            last_departure: Time::from_hm(21, 0),
            major_stops: names(&["Mohali", "Zirakpur", "Rajpura", "Patiala"]),
            region: Region::Eastern,
            ..Default::default()
        },
        Route {
            id: "4".into(),
            name: "Bathinda - Faridkot Loop".into(),
            from: "Bathinda".into(),
            to: "Faridkot".into(),
            distance: Distance::from_kilometers(92.0),
            duration: Duration::from_minutes(135),
            stop_count: 10,
            headway: Duration::from_hours(1),
            first_departure: Time::from_hm(5, 45),
            last_departure: Time::from_hm(20, 30),
            major_stops: names(&["Bathinda", "Mansa", "Sardulgarh", "Faridkot"]),
            region: Region::Western,
            ..Default::default()
        },
        Route {
            id: "5".into(),
            name: "Ferozepur - Fazilka Border".into(),
            from: "Ferozepur".into(),
            to: "Fazilka".into(),
            distance: Distance::from_kilometers(68.0),
            duration: Duration::from_minutes(110),
            stop_count: 7,
            headway: Duration::from_hours(2),
            first_departure: Time::from_hm(7, 0),
            last_departure: Time::from_hm(19, 0),
            major_stops: names(&["Ferozepur", "Guru Har Sahai", "Fazilka"]),
            region: Region::Western,
            ..Default::default()
        },
    ]
}

pub(crate) fn stops() -> Vec<BusStop> {
    vec![
        BusStop {
            id: "1".into(),
            name: "City Center Bus Terminal".into(),
            city: "Ludhiana".into(),
            address: "Mall Road, Ludhiana, Punjab 141001".into(),
            coordinate: Coordinate::from((30.9010, 75.8573)),
            facilities: names(&["Waiting Area", "Restrooms", "Food Court", "ATM", "Parking"]),
            routes: names(&["Route 101", "Route 205", "Route 308"]),
            arrivals: Box::new([
                arrival("Route 101", "Jalandhar", 5),
                arrival("Route 205", "Chandigarh", 12),
                arrival("Route 308", "Amritsar", 18),
            ]),
            is_active: true,
            ..Default::default()
        },
        BusStop {
            id: "2".into(),
            name: "Railway Station Bus Stop".into(),
            city: "Bathinda".into(),
            address: "Near Railway Station, Bathinda, Punjab 151001".into(),
            coordinate: Coordinate::from((30.2118, 74.9455)),
            facilities: names(&["Waiting Area", "Ticket Counter", "Security"]),
            routes: names(&["Route 401", "Route 502"]),
            arrivals: Box::new([
                arrival("Route 401", "Faridkot", 8),
                arrival("Route 502", "Mansa", 25),
            ]),
            is_active: true,
            ..Default::default()
        },
        BusStop {
            id: "3".into(),
            name: "University Campus Stop".into(),
            city: "Patiala".into(),
            address: "Punjabi University, Patiala, Punjab 147002".into(),
            coordinate: Coordinate::from((30.3398, 76.3869)),
            facilities: names(&["Waiting Area", "Student Concession", "Information Desk"]),
            routes: names(&["Route 201", "Route 203", "Route 207"]),
            arrivals: Box::new([
                arrival("Route 201", "Chandigarh", 3),
                arrival("Route 203", "Rajpura", 15),
                arrival("Route 207", "Sangrur", 22),
            ]),
            is_active: true,
            ..Default::default()
        },
        BusStop {
            id: "4".into(),
            name: "Golden Temple Complex".into(),
            city: "Amritsar".into(),
            address: "Near Golden Temple, Amritsar, Punjab 143006".into(),
            coordinate: Coordinate::from((31.6200, 74.8765)),
            facilities: names(&[
                "Waiting Area",
                "Restrooms",
                "Information Center",
                "Security",
                "Refreshments",
            ]),
            routes: names(&["Route 501", "Route 505", "Route 510"]),
            arrivals: Box::new([
                arrival("Route 501", "Chandigarh", 7),
                arrival("Route 505", "Jalandhar", 11),
                arrival("Route 510", "Ludhiana", 16),
            ]),
            is_active: true,
            ..Default::default()
        },
        BusStop {
            id: "5".into(),
            name: "Industrial Area Bus Stop".into(),
            city: "Moga".into(),
            address: "Industrial Area, Moga, Punjab 142001".into(),
            coordinate: Coordinate::from((30.8162, 75.1725)),
            facilities: names(&["Basic Shelter", "Security"]),
            routes: names(&["Route 601", "Route 603"]),
            arrivals: Box::new([
                arrival("Route 601", "Ferozepur", 14),
                arrival("Route 603", "Faridkot", 28),
            ]),
            is_active: true,
            ..Default::default()
        },
    ]
}

pub(crate) fn buses() -> Vec<TrackedBus> {
    vec![
        TrackedBus {
            id: "1".into(),
            bus_number: "PB-01-A-1234".into(),
            route: "Chandigarh → Amritsar".into(),
            current_location: "Rajpura Bus Stand".into(),
            destination: "Amritsar Golden Temple".into(),
            eta: Duration::from_minutes(45),
            delay: Duration::from_minutes(0),
            status: BusStatus::OnTime,
            next_stops: names(&["Patiala", "Sangrur", "Bathinda", "Amritsar"]),
            last_updated: Recency::minutes_ago(2),
            coordinate: Coordinate::from((30.4834, 76.5940)),
            capacity: Capacity {
                total: 40,
                occupied: 28,
            },
            ..Default::default()
        },
        TrackedBus {
            id: "2".into(),
            bus_number: "PB-02-B-5678".into(),
            route: "Ludhiana → Jalandhar".into(),
            current_location: "Khanna Junction".into(),
            destination: "Jalandhar City Center".into(),
            eta: Duration::from_minutes(22),
            delay: Duration::from_minutes(5),
            status: BusStatus::Delayed,
            next_stops: names(&["Doraha", "Jalandhar"]),
            last_updated: Recency::minutes_ago(1),
            coordinate: Coordinate::from((30.7058, 76.2211)),
            capacity: Capacity {
                total: 32,
                occupied: 15,
            },
            ..Default::default()
        },
        TrackedBus {
            id: "3".into(),
            bus_number: "PB-03-C-9101".into(),
            route: "Mohali → Patiala".into(),
            current_location: "Patiala Bus Terminal".into(),
            destination: "Patiala Bus Terminal".into(),
            eta: Duration::from_minutes(0),
            delay: Duration::from_minutes(0),
            status: BusStatus::Arrived,
            next_stops: names(&[]),
            last_updated: Recency::JUST_NOW,
            coordinate: Coordinate::from((30.3398, 76.3869)),
            capacity: Capacity {
                total: 35,
                occupied: 35,
            },
            ..Default::default()
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    operator: &str,
    route: Option<&str>,
    departure: Time,
    arrival: Time,
    price: u32,
    seats_available: u32,
    rating: f32,
    amenities: &[&str],
    bus_type: &str,
) -> BusService {
    BusService {
        index: 0,
        id: id.into(),
        operator: operator.into(),
        route: route.map(Arc::from),
        departure,
        arrival,
        price,
        seats_available,
        rating,
        amenities: names(amenities),
        bus_type: bus_type.into(),
    }
}

/// Results listed on the search page.
pub(crate) fn services() -> Vec<BusService> {
    vec![
        service(
            "1",
            "Punjab Roadways",
            Some("Chandigarh → Amritsar"),
            Time::from_hm(6, 30),
            Time::from_hm(10, 15),
            450,
            15,
            4.2,
            &["AC", "WiFi", "Charging Port"],
            "Semi-Sleeper",
        ),
        service(
            "2",
            "Express Travels",
            Some("Ludhiana → Jalandhar"),
            Time::from_hm(8, 0),
            Time::from_hm(9, 45),
            180,
            8,
            4.5,
            &["AC", "WiFi", "Charging Port", "Entertainment"],
            "Volvo AC",
        ),
        service(
            "3",
            "City Bus Service",
            Some("Mohali → Patiala"),
            Time::from_hm(14, 20),
            Time::from_hm(15, 50),
            120,
            22,
            4.0,
            &["AC", "Charging Port"],
            "Semi-Sleeper",
        ),
        service(
            "4",
            "Heritage Express",
            Some("Bathinda → Faridkot"),
            Time::from_hm(11, 0),
            Time::from_hm(13, 15),
            220,
            12,
            4.3,
            &["AC", "WiFi", "Snacks"],
            "Luxury",
        ),
    ]
}

/// Options offered on the ticketing page for any requested journey.
pub(crate) fn booking_options() -> Vec<BusService> {
    vec![
        service(
            "1",
            "Punjab Roadways",
            None,
            Time::from_hm(6, 30),
            Time::from_hm(10, 15),
            450,
            15,
            4.2,
            &["AC", "WiFi", "Charging Port"],
            "Semi-Sleeper",
        ),
        service(
            "2",
            "Express Travels",
            None,
            Time::from_hm(8, 0),
            Time::from_hm(11, 30),
            550,
            8,
            4.5,
            &["AC", "WiFi", "Charging Port", "Entertainment"],
            "Volvo AC",
        ),
        service(
            "3",
            "City Bus Service",
            None,
            Time::from_hm(14, 20),
            Time::from_hm(17, 45),
            380,
            22,
            4.0,
            &["AC", "Charging Port"],
            "Semi-Sleeper",
        ),
    ]
}
