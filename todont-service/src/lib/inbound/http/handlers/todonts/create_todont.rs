use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_todont::TodontResponseData;
use crate::domain::todont::models::CreateTodontCommand;
use crate::domain::todont::models::Title;
use crate::domain::todont::ports::TodontServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Create an item for the caller. New items start active; the owner is
/// the verified caller identity, nothing from the request body.
pub async fn create_todont(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTodontRequestBody>,
) -> Result<ApiSuccess<TodontResponseData>, ApiError> {
    let title =
        Title::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateTodontCommand {
        title,
        is_active: true,
        user_id: caller.user_id,
    };

    state
        .todont_service
        .create(command)
        .await
        .map_err(ApiError::from)
        .map(|ref todont| ApiSuccess::new(StatusCode::CREATED, todont.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodontRequestBody {
    pub title: String,
}
