//! 核心数据模型模块
//!
//! 定义 Faqbot 的核心数据结构：FaqEntry, ChatSession, ChatMessage。

pub mod faq;
pub mod message;
pub mod session;

pub use faq::*;
pub use message::*;
pub use session::*;
