//! 聊天 DTO
//!
//! 定义问答和历史查询相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 提交消息请求
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    /// 会话 ID（缺省时由服务端生成）
    pub session_id: Option<String>,
    /// 用户消息
    pub message: String,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            session_id: None,
            message: String::new(),
        }
    }
}

/// 问答响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 回复文本
    pub response: String,
    /// 会话 ID
    pub session_id: String,
    /// 命中的 FAQ 条目 ID
    pub matched_faq_id: Option<String>,
    /// 置信度 0-100
    pub confidence: u32,
}

/// 单条历史记录
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryItem {
    /// 用户消息
    pub user_message: String,
    /// 机器人回复
    pub bot_response: String,
    /// 消息时间戳
    pub timestamp: DateTime<Utc>,
}

/// 历史查询响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// 按时间升序的历史记录
    pub history: Vec<HistoryItem>,
}
