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
use sarthi::{
    shared::Identifiable,
    site::{self, FEATURES, Feature, Page, QuickSearch, Stat},
};
use serde::Serialize;

const SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Serialize)]
struct PagesDto {
    current: Page,
    pages: Vec<OptionDto>,
}

/// Navigation entries. `current` resolves the `page` parameter, unknown slugs land home.
pub async fn pages(
    Query(params): Query<HashMap<String, String>>,
    State(_): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let result = PagesDto {
        current: Page::from_slug(param(&params, "page")),
        pages: Page::ALL
            .iter()
            .map(|page| OptionDto::new(page.slug(), page.label()))
            .collect(),
    };
    Ok(Json(result).into_response())
}

#[derive(Debug, Serialize)]
struct HomeDto {
    features: &'static [Feature],
    stats: Vec<Stat>,
}

pub async fn home(State(_): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let result = HomeDto {
        features: &FEATURES,
        stats: site::home_stats(),
    };
    Ok(Json(result).into_response())
}

#[derive(Debug, Serialize)]
struct QuickSearchDto {
    target: Page,
    from_suggestions: Vec<String>,
    to_suggestions: Vec<String>,
    results: Vec<ServiceDto>,
}

pub async fn quick_search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let quick_search = QuickSearch::new(param(&params, "from"), param(&params, "to"));
    let repository = state.repository.read().await;
    let suggest = |needle: &str| -> Vec<String> {
        repository
            .suggest_cities(needle)
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|city| city.name().to_string())
            .collect()
    };
    let result = QuickSearchDto {
        target: quick_search.target(),
        from_suggestions: suggest(&quick_search.from),
        to_suggestions: suggest(&quick_search.to),
        results: quick_search
            .results(&repository)
            .into_iter()
            .map(ServiceDto::from)
            .collect(),
    };
    Ok(Json(result).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::{json, params, state};

    #[tokio::test]
    async fn unknown_page_resolves_home() {
        let response = pages(Query(params(&[("page", "nowhere")])), State(state()))
            .await
            .unwrap();
        let body = json(response).await;
        assert_eq!(body["current"], "home");
        assert_eq!(body["pages"].as_array().unwrap().len(), 7);
        assert_eq!(body["pages"][4]["label"], "Bus Stops");
    }

    #[tokio::test]
    async fn quick_search_goes_to_search_page() {
        let response = quick_search(
            Query(params(&[("from", "Ludhiana"), ("to", "Jalandhar")])),
            State(state()),
        )
        .await
        .unwrap();
        let body = json(response).await;
        assert_eq!(body["target"], "search");
        assert_eq!(body["from_suggestions"][0], "Ludhiana");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["operator"], "Express Travels");
    }

    #[tokio::test]
    async fn half_filled_quick_search_stays_home() {
        let response = quick_search(Query(params(&[("from", "Ludhiana")])), State(state()))
            .await
            .unwrap();
        let body = json(response).await;
        assert_eq!(body["target"], "home");
        assert!(body["results"].as_array().unwrap().is_empty());
        assert!(body["to_suggestions"].as_array().unwrap().is_empty());
    }
}
