//! Display state derived from the live bus feed and the simulation that keeps it moving.

use std::fmt::Display;

use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::{
    repository::{BusStatus, Capacity, TrackedBus},
    shared::{preview::Preview, time::Duration},
};

/// Minutes between consecutive upcoming stops in the estimate.
pub const MINUTES_PER_STOP: u32 = 15;
pub const NEXT_STOPS_PREVIEW: usize = 4;

/// Chance that a tick refreshes a bus position.
const REFRESH_PROBABILITY: f64 = 0.3;

/// How long ago a bus last reported its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Recency(u32);

impl Recency {
    pub const JUST_NOW: Recency = Recency(0);

    pub const fn minutes_ago(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }
}

impl Display for Recency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => f.write_str("Just now"),
            minutes => write!(f, "{minutes} min ago"),
        }
    }
}

impl Serialize for Recency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The stalest report among the buses, `Just now` when there are none.
pub fn last_updated<'a, I>(buses: I) -> Recency
where
    I: IntoIterator<Item = &'a TrackedBus>,
{
    buses
        .into_iter()
        .map(|bus| bus.last_updated)
        .max()
        .unwrap_or_default()
}

/// `On Time`, `5min Delay`, `Arrived`.
pub fn status_label(bus: &TrackedBus) -> String {
    match bus.status {
        BusStatus::OnTime => "On Time".to_string(),
        BusStatus::Delayed => format!("{}min Delay", bus.delay.as_minutes()),
        BusStatus::Arrived => "Arrived".to_string(),
    }
}

/// `45 min` while travelling, `Arrived` once at the destination.
pub fn eta_label(bus: &TrackedBus) -> String {
    match bus.status {
        BusStatus::Arrived => "Arrived".to_string(),
        _ => format!("{} min", bus.eta.as_minutes()),
    }
}

pub fn seats_available(capacity: &Capacity) -> u32 {
    capacity.total.saturating_sub(capacity.occupied)
}

/// Share of occupied seats in percent, for the occupancy bar.
pub fn occupancy_percent(capacity: &Capacity) -> f64 {
    if capacity.total == 0 {
        return 0.0;
    }
    (capacity.occupied as f64 / capacity.total as f64 * 100.0).min(100.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingStop {
    pub sequence: u32,
    pub name: String,
    pub estimate: String,
}

/// Remaining stops, each estimated a fixed interval after the previous one.
pub fn upcoming_stops(bus: &TrackedBus) -> Vec<UpcomingStop> {
    bus.next_stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let sequence = i as u32 + 1;
            UpcomingStop {
                sequence,
                name: stop.to_string(),
                estimate: format!("~{} min", sequence * MINUTES_PER_STOP),
            }
        })
        .collect()
}

pub fn next_stops_preview(bus: &TrackedBus) -> Preview<String> {
    let stops: Vec<String> = bus.next_stops.iter().map(|stop| stop.to_string()).collect();
    Preview::of(&stops, NEXT_STOPS_PREVIEW)
}

/// One step of the fake live feed: positions refresh at random and
/// delayed buses drift a minute either way, never below zero.
pub fn simulate<R: Rng>(bus: &mut TrackedBus, rng: &mut R) {
    if rng.gen_bool(REFRESH_PROBABILITY) {
        bus.last_updated = Recency::JUST_NOW;
    }
    if bus.status == BusStatus::Delayed {
        let minutes = bus.delay.as_minutes();
        let minutes = if rng.gen_bool(0.5) {
            minutes + 1
        } else {
            minutes.saturating_sub(1)
        };
        bus.delay = Duration::from_minutes(minutes);
    }
    trace!(
        "{} updated {} with delay {}",
        bus.bus_number,
        bus.last_updated,
        bus.delay.as_minutes()
    );
}

#[test]
fn recency_text() {
    assert_eq!(Recency::JUST_NOW.to_string(), "Just now");
    assert_eq!(Recency::minutes_ago(2).to_string(), "2 min ago");
}

#[test]
fn occupancy_of_empty_capacity() {
    let capacity = Capacity {
        total: 0,
        occupied: 0,
    };
    assert_eq!(occupancy_percent(&capacity), 0.0);
    assert_eq!(seats_available(&capacity), 0);
}
