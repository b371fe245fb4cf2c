//! 进程内仓储实现
//!
//! 基于 DashMap 的键值存储。消息按 (timestamp, seq) 排序，
//! seq 是进程内单调递增序号，保证同一毫秒内追加的消息顺序稳定。

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::models::faq::FaqEntry;
use crate::models::message::ChatMessage;
use crate::models::session::ChatSession;

/// FAQ 仓储实现
#[derive(Clone, Default)]
pub struct FaqRepository {
    entries: Arc<DashMap<String, FaqEntry>>,
}

impl FaqRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// 列出所有 active 条目，按创建时间升序
    ///
    /// 匹配引擎的扫描顺序由此固定，打分相同取先见者。
    pub async fn list_active(&self) -> Result<Vec<FaqEntry>> {
        let mut entries: Vec<FaqEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.value().active)
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(entries)
    }
}

#[async_trait]
impl super::repository::Repository<FaqEntry> for FaqRepository {
    async fn create(&self, entry: &FaqEntry) -> Result<FaqEntry> {
        self.entries.insert(entry.id.clone(), entry.clone());
        Ok(entry.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<FaqEntry>> {
        Ok(self.entries.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, entry: &FaqEntry) -> Result<Option<FaqEntry>> {
        if !self.entries.contains_key(id) {
            return Ok(None);
        }
        self.entries.insert(id.to_string(), entry.clone());
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.entries.remove(id).is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<FaqEntry>> {
        let mut entries: Vec<FaqEntry> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(entries.into_iter().skip(start).take(limit).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.entries.len() as u64)
    }
}

/// 会话仓储实现
#[derive(Clone, Default)]
pub struct SessionRepository {
    sessions: Arc<DashMap<String, ChatSession>>,
    /// 创建锁：同一 id 的并发首次创建收敛为一个会话
    creation_lock: Arc<Mutex<()>>,
}

impl SessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            creation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 获取或创建会话（先到者生效）
    pub async fn get_or_create(&self, id: &str) -> Result<ChatSession> {
        if let Some(session) = self.sessions.get(id) {
            return Ok(session.value().clone());
        }

        let _guard = self.creation_lock.lock();
        let session = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| ChatSession::new(id));
        Ok(session.value().clone())
    }
}

#[async_trait]
impl super::repository::Repository<ChatSession> for SessionRepository {
    async fn create(&self, session: &ChatSession) -> Result<ChatSession> {
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(session.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ChatSession>> {
        Ok(self.sessions.get(id).map(|session| session.value().clone()))
    }

    async fn update(&self, id: &str, session: &ChatSession) -> Result<Option<ChatSession>> {
        if !self.sessions.contains_key(id) {
            return Ok(None);
        }
        self.sessions.insert(id.to_string(), session.clone());
        Ok(Some(session.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.sessions.remove(id).is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<ChatSession>> {
        let mut sessions: Vec<ChatSession> = self
            .sessions
            .iter()
            .map(|session| session.value().clone())
            .collect();
        sessions.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(sessions.into_iter().skip(start).take(limit).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.sessions.len() as u64)
    }
}

/// 消息仓储实现
#[derive(Clone, Default)]
pub struct MessageRepository {
    messages: Arc<DashMap<String, (u64, ChatMessage)>>,
    sequence: Arc<AtomicU64>,
}

impl MessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(DashMap::new()),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 清除消息上失效的 FAQ 弱引用
    ///
    /// FAQ 删除不级联到聊天记录，引用置空，消息保留。
    pub async fn detach_faq(&self, faq_id: &str) -> Result<u64> {
        let mut detached = 0;
        for mut entry in self.messages.iter_mut() {
            let (_, message) = entry.value_mut();
            if message.matched_faq_id.as_deref() == Some(faq_id) {
                message.matched_faq_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }
}

#[async_trait]
impl super::repository::Repository<ChatMessage> for MessageRepository {
    async fn create(&self, message: &ChatMessage) -> Result<ChatMessage> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.messages
            .insert(message.id.clone(), (seq, message.clone()));
        Ok(message.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ChatMessage>> {
        Ok(self.messages.get(id).map(|entry| entry.value().1.clone()))
    }

    async fn update(&self, id: &str, message: &ChatMessage) -> Result<Option<ChatMessage>> {
        let Some(mut entry) = self.messages.get_mut(id) else {
            return Ok(None);
        };
        entry.value_mut().1 = message.clone();
        Ok(Some(message.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.messages.remove(id).is_some())
    }

    async fn list(&self, limit: usize, start: usize) -> Result<Vec<ChatMessage>> {
        let mut messages: Vec<(u64, ChatMessage)> = self
            .messages
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        messages.sort_by_key(|(seq, message)| (message.timestamp, *seq));
        Ok(messages
            .into_iter()
            .skip(start)
            .take(limit)
            .map(|(_, message)| message)
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.messages.len() as u64)
    }

    async fn list_by_session(
        &self,
        session_id: &str,
        limit: usize,
        start: usize,
    ) -> Result<Vec<ChatMessage>> {
        let mut messages: Vec<(u64, ChatMessage)> = self
            .messages
            .iter()
            .filter(|entry| entry.value().1.session_id == session_id)
            .map(|entry| entry.value().clone())
            .collect();
        messages.sort_by_key(|(seq, message)| (message.timestamp, *seq));
        Ok(messages
            .into_iter()
            .skip(start)
            .take(limit)
            .map(|(_, message)| message)
            .collect())
    }

    async fn count_by_session(&self, session_id: &str) -> Result<u64> {
        let count = self
            .messages
            .iter()
            .filter(|entry| entry.value().1.session_id == session_id)
            .count();
        Ok(count as u64)
    }
}
