//! 聊天服务
//!
//! 编排一次完整的问答流程：校验 -> 问候短路 -> FAQ 匹配 -> 记录交互。
//! 每次调用相互独立，无跨请求可变状态。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::message::ChatMessage;
use crate::services::matcher::{FaqMatcher, MIN_MATCH_SCORE, confidence_from_score};
use crate::storage::memory::{FaqRepository, MessageRepository, SessionRepository};
use crate::storage::repository::Repository;

/// 问答结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// 回复文本
    pub reply: String,
    /// 会话 ID（调用方未提供时为新生成的）
    pub session_id: String,
    /// 命中的 FAQ 条目 ID
    pub matched_faq_id: Option<String>,
    /// 置信度 0-100
    pub confidence: u32,
}

/// 聊天服务 trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// 处理一条用户消息并记录交互
    async fn submit_message(&self, session_id: Option<&str>, message: &str) -> Result<ChatReply>;

    /// 按时间升序返回会话的全部交互记录
    async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>>;
}

/// 聊天服务实现
pub struct ChatServiceImpl {
    matcher: FaqMatcher,
    faq_repository: Arc<FaqRepository>,
    session_repository: Arc<SessionRepository>,
    message_repository: Arc<MessageRepository>,
}

impl ChatServiceImpl {
    /// 创建新的服务实例
    pub fn new(
        matcher: FaqMatcher,
        faq_repository: Arc<FaqRepository>,
        session_repository: Arc<SessionRepository>,
        message_repository: Arc<MessageRepository>,
    ) -> Self {
        Self {
            matcher,
            faq_repository,
            session_repository,
            message_repository,
        }
    }

    /// 记录一次交互并更新会话活跃信息
    async fn record(
        &self,
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        matched_faq_id: Option<String>,
    ) -> Result<ChatMessage> {
        let matched = matched_faq_id.is_some();
        let message = ChatMessage::new(session_id, user_message, bot_response, matched_faq_id);
        self.message_repository.create(&message).await?;

        let mut session = self
            .session_repository
            .get_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))?;
        session.increment_messages(matched);
        self.session_repository.update(session_id, &session).await?;

        Ok(message)
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn submit_message(&self, session_id: Option<&str>, message: &str) -> Result<ChatReply> {
        let user_message = message.trim();
        if user_message.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        let session_id = match session_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        self.session_repository.get_or_create(&session_id).await?;

        // 问候短路：不进打分流程，置信度 100
        if let Some(greeting_reply) = self.matcher.check_greeting(user_message) {
            debug!("Greeting detected for session: {}", session_id);
            let reply = greeting_reply.to_string();
            self.record(&session_id, user_message, &reply, None).await?;
            return Ok(ChatReply {
                reply,
                session_id,
                matched_faq_id: None,
                confidence: 100,
            });
        }

        let catalog = self.faq_repository.list_active().await?;
        let result = self.matcher.find_best_match(user_message, &catalog);

        // 最高分低于下限按未命中处理，单个弱信号不足以作答
        if result.score >= MIN_MATCH_SCORE {
            if let Some(index) = result.entry_index {
                let entry = &catalog[index];
                debug!(
                    "Matched FAQ {} with score {} for session: {}",
                    entry.id, result.score, session_id
                );
                self.record(&session_id, user_message, &entry.answer, Some(entry.id.clone()))
                    .await?;
                return Ok(ChatReply {
                    reply: entry.answer.clone(),
                    session_id,
                    matched_faq_id: Some(entry.id.clone()),
                    confidence: confidence_from_score(result.score),
                });
            }
        }

        debug!(
            "No FAQ match (score {}) for session: {}",
            result.score, session_id
        );
        let reply = self.matcher.default_response().to_string();
        self.record(&session_id, user_message, &reply, None).await?;
        Ok(ChatReply {
            reply,
            session_id,
            matched_faq_id: None,
            confidence: 0,
        })
    }

    async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))?;

        self.message_repository
            .list_by_session(session_id, usize::MAX, 0)
            .await
    }
}

/// 创建聊天服务
pub fn create_chat_service(
    matcher: FaqMatcher,
    faq_repository: Arc<FaqRepository>,
    session_repository: Arc<SessionRepository>,
    message_repository: Arc<MessageRepository>,
) -> Box<dyn ChatService> {
    Box::new(ChatServiceImpl::new(
        matcher,
        faq_repository,
        session_repository,
        message_repository,
    ))
}
