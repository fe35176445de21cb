use std::{collections::HashMap, sync::Arc};

use crate::{
    api::param,
    dto::{BusDto, TrackingDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Live tracking panel, optionally narrowed by `q`.
pub async fn eta(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    state.simulate_latency().await;
    let repository = state.repository.read().await;
    let buses = repository.buses(param(&params, "q"));
    Ok(Json(TrackingDto::from(&buses)).into_response())
}

pub async fn bus(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let bus = repository.bus_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(BusDto::from(bus)).into_response())
}
