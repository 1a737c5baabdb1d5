use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::todont::models::ToDont;
use crate::domain::todont::models::TodontId;
use crate::domain::todont::ports::TodontServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_todont(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<TodontResponseData>, ApiError> {
    state
        .todont_service
        .get_by_id(TodontId(id), caller.user_id)
        .await
        .map_err(ApiError::from)?
        .map(|ref todont| ApiSuccess::new(StatusCode::OK, todont.into()))
        .ok_or_else(|| ApiError::NotFound("ToDont not found".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodontResponseData {
    pub id: i64,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub image_count: usize,
}

impl From<&ToDont> for TodontResponseData {
    fn from(todont: &ToDont) -> Self {
        Self {
            id: todont.id.as_i64(),
            title: todont.title.as_str().to_string(),
            is_active: todont.is_active,
            created_at: todont.created_at,
            updated_at: todont.updated_at,
            image_count: todont.images.len(),
        }
    }
}
