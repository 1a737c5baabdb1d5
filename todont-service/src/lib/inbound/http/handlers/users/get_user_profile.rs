use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::get_user::UserResponseData;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    // A name that can never exist maps to the same 404 as a missing one.
    let username = Username::new(username)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)?
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}
