use async_trait::async_trait;

use crate::error::Result;

/// 仓储 trait
#[async_trait]
pub trait Repository<T: Clone + Send + Sync> {
    /// 创建实体
    async fn create(&self, entity: &T) -> Result<T>;

    /// 根据 ID 获取实体
    async fn get_by_id(&self, id: &str) -> Result<Option<T>>;

    /// 更新实体
    async fn update(&self, id: &str, entity: &T) -> Result<Option<T>>;

    /// 删除实体
    async fn delete(&self, id: &str) -> Result<bool>;

    /// 列出所有实体
    async fn list(&self, limit: usize, start: usize) -> Result<Vec<T>>;

    /// 统计数量
    async fn count(&self) -> Result<u64>;

    // === 会话过滤方法（用于 ChatMessage） ===

    /// 按会话列出实体
    async fn list_by_session(
        &self,
        _session_id: &str,
        _limit: usize,
        _start: usize,
    ) -> Result<Vec<T>> {
        // 默认实现：子类可覆盖
        Ok(vec![])
    }

    /// 按会话统计数量
    async fn count_by_session(&self, _session_id: &str) -> Result<u64> {
        Ok(0)
    }
}
