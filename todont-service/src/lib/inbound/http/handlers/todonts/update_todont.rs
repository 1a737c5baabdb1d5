use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_todont::TodontResponseData;
use crate::domain::todont::models::Title;
use crate::domain::todont::models::TodontId;
use crate::domain::todont::models::UpdateTodontCommand;
use crate::domain::todont::ports::TodontServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_todont(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodontRequestBody>,
) -> Result<ApiSuccess<TodontResponseData>, ApiError> {
    let title =
        Title::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateTodontCommand {
        title,
        is_active: body.is_active,
    };

    state
        .todont_service
        .update(TodontId(id), caller.user_id, command)
        .await
        .map_err(ApiError::from)?
        .map(|ref todont| ApiSuccess::new(StatusCode::OK, todont.into()))
        .ok_or_else(|| ApiError::NotFound("ToDont not found".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodontRequestBody {
    pub title: String,
    pub is_active: bool,
}
