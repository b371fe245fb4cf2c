use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Incoming chat message, session: {:?}", request.session_id);

    let reply = state
        .chat_service
        .submit_message(request.session_id.as_deref(), &request.message)
        .await
        .inspect_err(|_| state.metrics.record_error())?;

    // 问候短路的特征：满置信度且无命中条目
    let greeting = reply.confidence == 100 && reply.matched_faq_id.is_none();
    state
        .metrics
        .record_chat(reply.matched_faq_id.is_some(), greeting);

    let response = ChatResponse {
        response: reply.reply,
        session_id: reply.session_id,
        matched_faq_id: reply.matched_faq_id,
        confidence: reply.confidence,
    };

    Ok(Json(response))
}

pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Fetching history for session: {}", session_id);

    state.metrics.record_history_request();
    let messages = state
        .chat_service
        .history(&session_id)
        .await
        .inspect_err(|_| state.metrics.record_error())?;

    let history = messages
        .into_iter()
        .map(|message| HistoryItem {
            user_message: message.user_message,
            bot_response: message.bot_response,
            timestamp: message.timestamp,
        })
        .collect();

    Ok(Json(HistoryResponse { history }))
}
