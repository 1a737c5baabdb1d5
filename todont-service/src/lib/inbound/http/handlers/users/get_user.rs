use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithTodonts;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .get_user(UserId(id))
        .await
        .map_err(ApiError::from)?
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseData {
    pub id: i64,
    pub user_name: String,
    pub to_dont_count: usize,
}

impl From<&UserWithTodonts> for UserResponseData {
    fn from(profile: &UserWithTodonts) -> Self {
        Self {
            id: profile.user.id.as_i64(),
            user_name: profile.user.username.as_str().to_string(),
            to_dont_count: profile.todonts.len(),
        }
    }
}
