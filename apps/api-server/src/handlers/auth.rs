//! Registration and login handlers.

use actix_web::{HttpResponse, web};
use userhub_shared::ApiResponse;
use userhub_shared::dto::{LoginData, LoginResult, RegisterData};

use crate::middleware::{AppResult, Validated};
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    state: web::Data<AppState>,
    Validated(data): Validated<RegisterData>,
) -> AppResult<HttpResponse> {
    state
        .auth
        .register(data.name, data.email, &data.password)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::empty(201)))
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    Validated(data): Validated<LoginData>,
) -> AppResult<HttpResponse> {
    let access_token = state.auth.login(&data.email, &data.password).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(LoginResult { access_token })))
}
