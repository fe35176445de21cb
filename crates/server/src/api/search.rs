use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{OptionDto, param},
    dto::ServiceDto,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sarthi::filter::{self, PriceRange, SearchFilters, TimeWindow};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct SearchDto {
    active_filters: usize,
    count: usize,
    results: Vec<ServiceDto>,
}

/// Parses a select value, `All …` and blanks meaning no constraint.
fn parse_selection<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, StatusCode> {
    match filter::selection(param(params, name)) {
        "" => Ok(None),
        value => value.parse().map(Some).map_err(|_| {
            warn!("Invalid {name}: {value}");
            StatusCode::BAD_REQUEST
        }),
    }
}

/// Builds the filters from the query string. `amenities` is a comma separated list.
fn filters_from_params(params: &HashMap<String, String>) -> Result<SearchFilters, StatusCode> {
    let mut filters = SearchFilters::new();
    filters.query = param(params, "q").to_string();
    filters.route = param(params, "route").to_string();
    filters.operator = param(params, "operator").to_string();
    filters.bus_type = param(params, "bus_type").to_string();
    filters.timing = parse_selection::<TimeWindow>(params, "timing")?;
    filters.price_range = parse_selection::<PriceRange>(params, "price")?;
    param(params, "amenities")
        .split(',')
        .map(str::trim)
        .filter(|amenity| !amenity.is_empty())
        .for_each(|amenity| filters.toggle_amenity(amenity));
    Ok(filters)
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filters = filters_from_params(&params)?;
    state.simulate_latency().await;

    let repository = state.repository.read().await;
    let results: Vec<_> = repository
        .services(&filters)
        .into_iter()
        .map(ServiceDto::from)
        .collect();
    debug!(
        "Search with {} filters matched {} services",
        filters.active_count(),
        results.len()
    );
    let result = SearchDto {
        active_filters: filters.active_count(),
        count: results.len(),
        results,
    };
    Ok(Json(result).into_response())
}

#[derive(Debug, Serialize)]
struct FilterOptionsDto {
    operators: Vec<&'static str>,
    bus_types: Vec<&'static str>,
    timings: Vec<OptionDto>,
    price_ranges: Vec<OptionDto>,
    amenities: &'static [&'static str],
}

/// Everything the filter panel offers, `All …` entries first.
pub async fn search_options(State(_): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let result = FilterOptionsDto {
        operators: std::iter::once(filter::ALL_OPERATORS)
            .chain(filter::OPERATORS)
            .collect(),
        bus_types: std::iter::once(filter::ALL_TYPES)
            .chain(filter::BUS_TYPES)
            .collect(),
        timings: std::iter::once(OptionDto::new("all", filter::ALL_TIMES))
            .chain(
                TimeWindow::ALL
                    .iter()
                    .map(|window| OptionDto::new(window.key(), window.label())),
            )
            .collect(),
        price_ranges: std::iter::once(OptionDto::new("all", filter::ALL_PRICES))
            .chain(
                PriceRange::ALL
                    .iter()
                    .map(|range| OptionDto::new(range.key(), range.label())),
            )
            .collect(),
        amenities: &filter::AMENITIES,
    };
    Ok(Json(result).into_response())
}
