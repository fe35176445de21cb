use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{OptionDto, param, parse_param, rejected},
    dto::ServiceDto,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sarthi::booking::{self, BookingRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct TicketFormDto {
    earliest_date: String,
    passengers: Vec<OptionDto>,
}

#[derive(Debug, Serialize)]
struct TicketOptionsDto {
    journey: String,
    date: String,
    passengers: u32,
    options: Vec<ServiceDto>,
}

/// Without `from`, `to` or `date` this describes the booking form,
/// otherwise it validates the journey and lists the buses for it.
pub async fn tickets(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let today = booking::today();
    if ["from", "to", "date"]
        .iter()
        .all(|name| !params.contains_key(*name))
    {
        let form = TicketFormDto {
            earliest_date: booking::earliest_travel_date(today).to_string(),
            passengers: booking::passenger_labels()
                .into_iter()
                .map(|(count, label)| OptionDto::new(count.to_string(), label))
                .collect(),
        };
        return Ok(Json(form).into_response());
    }

    let request = BookingRequest {
        from: param(&params, "from").to_string(),
        to: param(&params, "to").to_string(),
        date: param(&params, "date").to_string(),
        passengers: parse_param(&params, "passengers")?.unwrap_or(booking::MIN_PASSENGERS),
    };
    state.simulate_latency().await;

    let repository = state.repository.read().await;
    let options = match booking::search(&repository, &request, today) {
        Ok(options) => options,
        Err(err) => return Ok(rejected(err)),
    };
    let result = TicketOptionsDto {
        journey: request.journey(),
        date: request.date.trim().to_string(),
        passengers: request.passengers,
        options: options.iter().map(ServiceDto::from).collect(),
    };
    Ok(Json(result).into_response())
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookDto {
    pub option_id: String,
    #[serde(flatten)]
    pub request: BookingRequest,
}

pub async fn book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookDto>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    match booking::confirm_by_id(&repository, &body.option_id, &body.request, booking::today()) {
        Ok(confirmation) => Ok(Json(confirmation).into_response()),
        Err(booking::Error::UnknownOption(_)) => Err(StatusCode::NOT_FOUND),
        Err(err) => Ok(rejected(err)),
    }
}
