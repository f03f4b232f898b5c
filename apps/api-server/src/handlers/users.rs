//! Profile handlers. Both routes sit behind `Authenticate`.

use actix_web::{HttpResponse, web};
use userhub_core::domain::User;
use userhub_shared::ApiResponse;
use userhub_shared::dto::{UpdateUserData, UserInfoResult};

use crate::middleware::{AppResult, CurrentUser, Validated};
use crate::state::AppState;

fn user_info(user: User) -> UserInfoResult {
    UserInfoResult {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// GET /users/me
pub async fn me(CurrentUser(user): CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(user_info(user)))
}

/// PATCH /users/me
pub async fn update_me(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    Validated(data): Validated<UpdateUserData>,
) -> AppResult<HttpResponse> {
    let updated = state
        .profiles
        .update_profile(user, data.name, data.email)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_info(updated))))
}
