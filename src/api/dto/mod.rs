//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod chat_dto;
pub mod faq_dto;

pub use chat_dto::*;
pub use faq_dto::*;
