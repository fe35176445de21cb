use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{param, parse_param},
    dto::{NearbyStopDto, StopDetailDto, StopDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sarthi::{
    shared::{Coordinate, DEFAULT_NEARBY_DISTANCE, Distance},
    site::{self, Stat},
};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct StopsDto {
    stats: Vec<Stat>,
    stops: Vec<StopDto>,
}

pub async fn stops(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let result = StopsDto {
        stats: site::stop_stats(&repository),
        stops: repository
            .stops(param(&params, "q"), param(&params, "city"))
            .into_iter()
            .map(StopDto::from)
            .collect(),
    };
    Ok(Json(result).into_response())
}

/// City selector entries, `All Cities` first.
pub async fn stop_cities(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let cities: Vec<&str> = std::iter::once("All Cities")
        .chain(repository.stop_cities())
        .collect();
    Ok(Json(cities).into_response())
}

pub async fn near(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let coordinate: Coordinate = match params.get("q") {
        Some(value) => value.parse().map_err(|_| {
            warn!("Invalid coordinate: {value}");
            StatusCode::BAD_REQUEST
        })?,
        None => return Err(StatusCode::BAD_REQUEST),
    };
    let distance = match parse_param::<f64>(&params, "distance")? {
        Some(km) if km > 0.0 => Distance::from_kilometers(km),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
        None => DEFAULT_NEARBY_DISTANCE,
    };

    let repository = state.repository.read().await;
    let result: Vec<_> = repository
        .stops_by_coordinate(&coordinate, distance)
        .into_iter()
        .map(|(stop, distance)| NearbyStopDto::from(stop, distance))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn stop(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let stop = repository.stop_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(StopDetailDto::from(stop)).into_response())
}
