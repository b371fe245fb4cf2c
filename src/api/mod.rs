//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::api::app_state::AppState;
use crate::api::middleware::security_headers_middleware;
use axum::Router;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::faq_routes::create_faq_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(app_state)
}
