use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::LoginResponseData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Register a new user and immediately issue a token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = Username::new(body.user_name)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let user = state
        .user_service
        .register(RegisterUserCommand::new(username, body.password))
        .await
        .map_err(ApiError::from)?;

    let token = state
        .token_issuer
        .issue(user.id.as_i64(), user.username.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        LoginResponseData {
            token,
            user_id: user.id.as_i64(),
            user_name: user.username.as_str().to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    pub user_name: String,
    pub password: String,
}
