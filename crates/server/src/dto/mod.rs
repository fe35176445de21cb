mod bus;
mod route;
mod service;
mod stop;

pub use bus::*;
pub use route::*;
pub use service::*;
pub use stop::*;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn from<E: std::fmt::Display>(err: E) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
