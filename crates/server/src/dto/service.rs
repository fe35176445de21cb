use sarthi::{
    repository::BusService,
    shared::{Preview, Time},
};
use serde::Serialize;

const AMENITIES_PREVIEW: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceDto {
    pub id: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub duration: String,
    pub price: u32,
    pub seats_available: u32,
    pub rating: f32,
    pub amenities: Vec<String>,
    pub amenities_preview: Preview<String>,
    pub bus_type: String,
    pub next_departure: String,
}

impl ServiceDto {
    pub fn from(service: &BusService) -> Self {
        let amenities: Vec<String> = service.amenities.iter().map(|a| a.to_string()).collect();
        Self {
            id: service.id.to_string(),
            operator: service.operator.to_string(),
            route: service.route.as_ref().map(|route| route.to_string()),
            departure_time: service.departure,
            arrival_time: service.arrival,
            duration: service.duration().to_string(),
            price: service.price,
            seats_available: service.seats_available,
            rating: service.rating,
            amenities_preview: Preview::of(&amenities, AMENITIES_PREVIEW),
            amenities,
            bus_type: service.bus_type.to_string(),
            next_departure: service.next_departure(),
        }
    }
}
