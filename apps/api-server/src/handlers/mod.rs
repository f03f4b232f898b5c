//! HTTP handlers. Routing lives in `crate::routes`.

pub mod auth;
pub mod health;
pub mod users;

use actix_web::HttpResponse;

use crate::middleware::{AppError, AppResult};

/// Fallback for paths no route matches.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Not Found".to_string()))
}

/// Fallback for a known path with an unsupported method.
pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
