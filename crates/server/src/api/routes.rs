use std::{collections::HashMap, sync::Arc};

use crate::{
    api::param,
    dto::{RegionDto, RouteDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sarthi::{
    repository::Region,
    site::{self, Stat},
};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct RoutesDto {
    regions: Vec<RegionDto>,
    stats: Vec<Stat>,
    routes: Vec<RouteDto>,
}

/// `region` is `all` or a region key, missing means `all`.
fn region_from_param(value: &str) -> Result<Option<Region>, StatusCode> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| {
        warn!("Unknown region: {value}");
        StatusCode::BAD_REQUEST
    })
}

pub async fn routes(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let region = region_from_param(param(&params, "region"))?;
    let repository = state.repository.read().await;
    let result = RoutesDto {
        regions: RegionDto::options(),
        stats: site::route_stats(),
        routes: repository
            .routes(param(&params, "q"), region)
            .into_iter()
            .map(RouteDto::from)
            .collect(),
    };
    Ok(Json(result).into_response())
}

pub async fn route(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let route = repository.route_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RouteDto::from(route)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::{json, params, state};

    #[tokio::test]
    async fn filters_by_query_and_region() {
        let response = routes(
            Query(params(&[("q", "amritsar"), ("region", "northern")])),
            State(state()),
        )
        .await
        .unwrap();
        let body = json(response).await;
        let routes = body["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0]["name"], "Chandigarh - Amritsar Express");
        assert_eq!(routes[0]["frequency"], "Every 30 mins");
        assert_eq!(body["regions"][0]["value"], "all");
    }

    #[tokio::test]
    async fn unknown_region_is_bad_request() {
        let result = routes(Query(params(&[("region", "coastal")])), State(state())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn route_detail_or_not_found() {
        let response = route(Path("2".into()), State(state())).await.unwrap();
        let body = json(response).await;
        assert_eq!(body["from"], "Ludhiana");
        assert_eq!(body["major_stops"].as_array().unwrap().len(), 4);

        let result = route(Path("99".into()), State(state())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }
}
