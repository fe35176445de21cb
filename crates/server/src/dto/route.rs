use sarthi::repository::{Region, Route};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub distance: String,
    pub distance_km: f64,
    pub duration: String,
    pub stops: u32,
    pub frequency: String,
    pub operating_hours: String,
    pub major_stops: Vec<String>,
    pub region: Region,
}

impl RouteDto {
    pub fn from(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.to_string(),
            from: route.from.to_string(),
            to: route.to.to_string(),
            distance: route.distance.to_string(),
            distance_km: route.distance.as_kilometers(),
            duration: route.duration.to_string(),
            stops: route.stop_count,
            frequency: route.frequency(),
            operating_hours: route.operating_hours(),
            major_stops: route.major_stops.iter().map(|stop| stop.to_string()).collect(),
            region: route.region,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionDto {
    pub value: &'static str,
    pub label: &'static str,
}

impl RegionDto {
    /// Selector entries, `all` first.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self {
            value: "all",
            label: "All Punjab",
        })
        .chain(Region::ALL.iter().map(|region| Self {
            value: region.key(),
            label: region.label(),
        }))
        .collect()
    }
}
