use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// FAQ 条目实体
///
/// 知识库的基本单元，匹配引擎只读取 active 的条目。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// 条目唯一标识
    pub id: String,

    /// 用户可能提出的问题
    pub question: String,

    /// 返回给用户的答案
    pub answer: String,

    /// 用于匹配的关键词（小写）
    pub keywords: Vec<String>,

    /// 是否参与匹配
    pub active: bool,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl FaqEntry {
    /// 创建新条目
    pub fn new(question: &str, answer: &str, keywords: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            keywords,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 解析逗号分隔的关键词字符串（管理端输入格式）
    ///
    /// 去除首尾空白、转为小写、跳过空项。
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect()
    }

    /// 标记更新时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 问题的小写分词（用于打分）
    pub fn question_words(&self) -> Vec<String> {
        self.question
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        let keywords = FaqEntry::parse_keywords("Return, policy , REFUND,,exchange");
        assert_eq!(keywords, vec!["return", "policy", "refund", "exchange"]);
    }

    #[test]
    fn test_parse_keywords_empty() {
        assert!(FaqEntry::parse_keywords("").is_empty());
        assert!(FaqEntry::parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_new_entry_is_active() {
        let entry = FaqEntry::new("What is your return policy?", "7 days.", vec![]);
        assert!(entry.active);
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_question_words() {
        let entry = FaqEntry::new("What IS your return policy?", "7 days.", vec![]);
        assert_eq!(
            entry.question_words(),
            vec!["what", "is", "your", "return", "policy?"]
        );
    }
}
