use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 聊天消息实体
///
/// 记录一次完整的问答交互，属于且仅属于一个会话。
/// matched_faq_id 是弱引用：FAQ 被删除后引用失效为 None，消息本身保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 消息唯一标识
    pub id: String,

    /// 所属会话 ID
    pub session_id: String,

    /// 用户消息原文
    pub user_message: String,

    /// 机器人回复
    pub bot_response: String,

    /// 命中的 FAQ 条目 ID（弱引用，可能为空）
    pub matched_faq_id: Option<String>,

    /// 消息时间戳
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// 创建新消息
    pub fn new(
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        matched_faq_id: Option<String>,
    ) -> Self {
        Self {
            id: format!("msg_{}_{}", session_id, Uuid::new_v4()),
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            matched_faq_id,
            timestamp: Utc::now(),
        }
    }
}
