use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 会话统计信息
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionStats {
    /// 总消息数
    pub total_messages: u64,
    /// 命中 FAQ 的次数
    pub matched_messages: u64,
}

/// 聊天会话实体
///
/// 以外部传入的不透明字符串 id 为键，持有一条按时间排序的对话记录。
/// 首次收到未知 id 的消息时创建，之后每次交互更新最后活跃时间。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// 会话唯一标识（不透明字符串，由调用方或服务端生成）
    pub id: String,

    /// 会话创建时间
    pub created_at: DateTime<Utc>,

    /// 最后活跃时间
    pub last_active_at: DateTime<Utc>,

    /// 统计信息
    pub stats: SessionStats,
}

impl ChatSession {
    /// 创建新会话
    pub fn new(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            created_at: now,
            last_active_at: now,
            stats: SessionStats::default(),
        }
    }

    /// 更新最后活跃时间
    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// 记录一次交互
    pub fn increment_messages(&mut self, matched: bool) {
        self.stats.total_messages += 1;
        if matched {
            self.stats.matched_messages += 1;
        }
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_create() {
        let session = ChatSession::new("session_1");
        assert_eq!(session.id, "session_1");
        assert_eq!(session.stats.total_messages, 0);
    }

    #[test]
    fn test_increment_messages() {
        let mut session = ChatSession::new("session_1");
        session.increment_messages(true);
        session.increment_messages(false);
        assert_eq!(session.stats.total_messages, 2);
        assert_eq!(session.stats.matched_messages, 1);
        assert!(session.last_active_at >= session.created_at);
    }
}
