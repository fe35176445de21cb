mod contact;
mod eta;
mod routes;
mod search;
mod site;
mod stops;
mod tickets;

pub use contact::*;
pub use eta::*;
pub use routes::*;
pub use search::*;
pub use site::*;
pub use stops::*;
pub use tickets::*;

use crate::dto::ErrorDto;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};
use tracing::warn;

/// Input that parsed fine but breaks a business rule, answered with 422 and the reason.
fn rejected<E: Display>(err: E) -> Response {
    warn!("Rejected request: {err}");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto::from(err))).into_response()
}

/// Empty string when the parameter is missing.
fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or_default()
}

fn parse_param<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, StatusCode> {
    match params.get(name).map(|value| value.trim()) {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(|_| {
            warn!("Invalid {name}: {value}");
            StatusCode::BAD_REQUEST
        }),
        _ => Ok(None),
    }
}

/// A select option as the frontend renders it.
#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
}

impl OptionDto {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
