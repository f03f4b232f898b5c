//! Health check endpoints.

use actix_web::HttpResponse;
use userhub_shared::ApiResponse;
use userhub_shared::dto::HealthResult;

/// GET /, /healthz and /check
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(HealthResult::ok()))
}

/// GET /favicon.ico - answers `{code: 200, data: null}` so browsers stop asking.
pub async fn favicon() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(()))
}
