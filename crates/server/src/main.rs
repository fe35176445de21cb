mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::{get, post};
use rand::{SeedableRng, rngs::StdRng};
use sarthi::repository::Repository;
use std::{sync::Arc, time::Instant};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/pages", get(api::pages))
        .route("/home", get(api::home))
        .route("/quick-search", get(api::quick_search))
        .route("/routes", get(api::routes))
        .route("/routes/{id}", get(api::route))
        .route("/stops", get(api::stops))
        .route("/stops/cities", get(api::stop_cities))
        .route("/stops/near", get(api::near))
        .route("/stops/{id}", get(api::stop))
        .route("/search", get(api::search))
        .route("/search/options", get(api::search_options))
        .route("/tickets", get(api::tickets))
        .route("/tickets/book", post(api::book))
        .route("/eta", get(api::eta))
        .route("/eta/{id}", get(api::bus))
        .route("/contact", get(api::contact_info).post(api::submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Moves the simulated live feed forward on every tick, forever.
async fn run_ticker(state: Arc<AppState>) {
    let mut rng = StdRng::from_entropy();
    let mut interval = tokio::time::interval(state.config.tick_interval);
    loop {
        interval.tick().await;
        state.repository.write().await.tick(&mut rng);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("Loading data...");
    let now = Instant::now();
    let repo = Repository::new().with_catalog();
    let state = Arc::new(AppState::new(config, repo));
    info!("Loading data took {:?}", now.elapsed());

    tokio::spawn(run_ticker(state.clone()));

    let address = state.config.address();
    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {address}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening on {address}");
    if let Err(err) = axum::serve(listener, app(state)).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
