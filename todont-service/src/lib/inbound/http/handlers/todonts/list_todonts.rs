use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::get_todont::TodontResponseData;
use crate::domain::todont::ports::TodontServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_todonts(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TodontResponseData>>, ApiError> {
    state
        .todont_service
        .list_by_owner(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|todonts| {
            let response = todonts.iter().map(TodontResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, response)
        })
}
