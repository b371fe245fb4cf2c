//! Chat Routes
//!
//! 定义问答相关的 API 路由。

use crate::api::handlers::chat_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建问答路由器
pub fn create_chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(submit_message))
        .route("/chat/history/:session_id", get(get_history))
}
