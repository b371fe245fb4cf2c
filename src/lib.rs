//! Faqbot - 规则驱动的店铺 FAQ 客服机器人
//!
//! 为电商店面提供基于关键词打分的 FAQ 自动应答：问候短路、
//! 置信度下限、会话级对话记录。不做真正的 NLP。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
