//! 服务模块

pub mod catalog;
pub mod chat;
pub mod matcher;

pub use catalog::{CatalogService, create_catalog_service};
pub use chat::{ChatReply, ChatService, create_chat_service};
pub use matcher::{FaqMatcher, MatchResult, MatcherConfig, confidence_from_score};
