//! FAQ DTO
//!
//! 定义目录管理相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::faq::FaqEntry;

/// 创建 FAQ 请求
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CreateFaqRequest {
    /// 问题
    pub question: String,
    /// 答案
    pub answer: String,
    /// 逗号分隔的关键词
    pub keywords: String,
}

impl Default for CreateFaqRequest {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            keywords: String::new(),
        }
    }
}

/// 更新 FAQ 请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateFaqRequest {
    /// 问题
    pub question: Option<String>,
    /// 答案
    pub answer: Option<String>,
    /// 逗号分隔的关键词
    pub keywords: Option<String>,
    /// 是否参与匹配
    pub active: Option<bool>,
}

/// FAQ 条目响应
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqResponse {
    /// 条目 ID
    pub id: String,
    /// 问题
    pub question: String,
    /// 答案
    pub answer: String,
    /// 关键词
    pub keywords: Vec<String>,
    /// 是否参与匹配
    pub active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl From<FaqEntry> for FaqResponse {
    fn from(entry: FaqEntry) -> Self {
        Self {
            id: entry.id,
            question: entry.question,
            answer: entry.answer,
            keywords: entry.keywords,
            active: entry.active,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// FAQ 列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqListResponse {
    /// 条目列表
    pub faqs: Vec<FaqResponse>,
    /// 总数
    pub total: usize,
}

/// 删除 FAQ 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFaqResponse {
    /// 条目 ID
    pub id: String,
    /// 消息
    pub message: String,
}

/// 初始化知识库响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedFaqsResponse {
    /// 本次写入的条目数（目录非空时为 0）
    pub created: u64,
    /// 目录当前条目总数
    pub total: u64,
    /// 消息
    pub message: String,
}
