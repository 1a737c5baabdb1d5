use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::todonts::create_todont::create_todont;
use super::handlers::todonts::delete_todont::delete_todont;
use super::handlers::todonts::get_todont::get_todont;
use super::handlers::todonts::list_todonts::list_todonts;
use super::handlers::todonts::toggle_todont::toggle_todont;
use super::handlers::todonts::update_todont::update_todont;
use super::handlers::users::get_user::get_user;
use super::handlers::users::get_user_profile::get_user_profile;
use super::handlers::users::login::login;
use super::handlers::users::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::todont::service::TodontService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::todont::PostgresTodontRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub todont_service: Arc<TodontService<PostgresTodontRepository>>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    todont_service: Arc<TodontService<PostgresTodontRepository>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        user_service,
        todont_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login));

    let protected_routes = Router::new()
        .route("/api/user/:id", get(get_user))
        .route("/api/user/profile/:username", get(get_user_profile))
        .route("/api/todont", get(list_todonts))
        .route("/api/todont", post(create_todont))
        .route("/api/todont/:id", get(get_todont))
        .route("/api/todont/:id", put(update_todont))
        .route("/api/todont/:id", delete(delete_todont))
        .route("/api/todont/:id/toggle", patch(toggle_todont))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
