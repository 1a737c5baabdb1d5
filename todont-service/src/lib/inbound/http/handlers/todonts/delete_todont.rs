use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::todont::models::TodontId;
use crate::domain::todont::ports::TodontServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_todont(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .todont_service
        .delete(TodontId(id), caller.user_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("ToDont not found".to_string()));
    }

    Ok(ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
