//! 存储层模块
//!
//! 仓储抽象与进程内实现。持久化后端是可替换的外部协作者，
//! 核心逻辑只依赖 Repository trait。

pub mod memory;
pub mod repository;

pub use memory::{FaqRepository, MessageRepository, SessionRepository};
pub use repository::Repository;
