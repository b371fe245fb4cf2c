//! FAQ Routes
//!
//! 定义目录管理相关的 API 路由。

use crate::api::handlers::faq_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;

/// 创建目录路由器
pub fn create_faq_router() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(list_faqs))
        .route("/faqs", post(create_faq))
        .route("/faqs/all", get(list_all_faqs))
        .route("/faqs/seed", post(seed_faqs))
        .route("/faqs/:id", put(update_faq))
        .route("/faqs/:id", delete(delete_faq))
}
