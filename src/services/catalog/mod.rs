//! FAQ 目录服务
//!
//! 管理端的 FAQ CRUD 以及默认知识库的幂等初始化。
//! 匹配引擎只通过 list_active 消费目录。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::faq::FaqEntry;
use crate::storage::memory::{FaqRepository, MessageRepository};
use crate::storage::repository::Repository;

/// 默认知识库（question, answer, 逗号分隔关键词）
const DEFAULT_FAQS: &[(&str, &str, &str)] = &[
    (
        "What is your return policy?",
        "Our return policy allows you to request a return within 7 days of your purchase. \
         The product must be in its original condition. Please visit your Purchase History \
         page to start a return request.",
        "return,policy,refund,exchange",
    ),
    (
        "How long does shipping take?",
        "Standard shipping usually takes 3-5 business days. Express shipping takes 1-2 \
         business days. You can use our Shipping Calculator on the website for a more \
         precise estimate for your pincode.",
        "shipping,delivery,how long,time,when arrive",
    ),
    (
        "How can I track my order?",
        "You can track your order using the 'Track Shipment' tool on our website. You will \
         need the tracking number that was sent to your email after your purchase was \
         confirmed.",
        "track,order,status,where is my package",
    ),
    (
        "Can I request a custom product?",
        "Yes! We have a full customization service. You can submit a request through the \
         'Customization' section of our website, and our vendors will provide you with \
         quotes.",
        "custom,customization,bespoke,made to order,special",
    ),
    (
        "My product arrived damaged, what do I do?",
        "We're sorry to hear that! Please initiate a return request from your Purchase \
         History page within 7 days of delivery. Select 'Damaged Item' as the reason and \
         upload photos of the damage.",
        "damaged,broken,defective,issue,wrong item",
    ),
    (
        "How do I contact customer support?",
        "For any issues not covered here, you can reach our human helpline at \
         support@ddecor.com or call us at +91 22 1234 5678 during business hours.",
        "help,support,contact,human,talk to someone,phone,email",
    ),
];

/// 目录服务 trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// 创建条目（keywords 为逗号分隔字符串）
    async fn create(&self, question: &str, answer: &str, keywords: &str) -> Result<FaqEntry>;

    /// 根据 ID 获取条目
    async fn get_by_id(&self, id: &str) -> Result<Option<FaqEntry>>;

    /// 更新条目
    async fn update(&self, entry: &FaqEntry) -> Result<FaqEntry>;

    /// 删除条目，并清除聊天记录上的弱引用
    async fn delete(&self, id: &str) -> Result<bool>;

    /// 列出 active 条目（匹配引擎输入）
    async fn list_active(&self) -> Result<Vec<FaqEntry>>;

    /// 列出全部条目
    async fn list_all(&self) -> Result<Vec<FaqEntry>>;

    /// 目录为空时写入默认知识库，幂等
    async fn ensure_default_faqs(&self) -> Result<u64>;
}

/// 目录服务实现
pub struct CatalogServiceImpl {
    faq_repository: Arc<FaqRepository>,
    message_repository: Arc<MessageRepository>,
}

impl CatalogServiceImpl {
    /// 创建新的服务实例
    pub fn new(
        faq_repository: Arc<FaqRepository>,
        message_repository: Arc<MessageRepository>,
    ) -> Self {
        Self {
            faq_repository,
            message_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create(&self, question: &str, answer: &str, keywords: &str) -> Result<FaqEntry> {
        if question.trim().is_empty() {
            return Err(AppError::Validation("Question cannot be empty".to_string()));
        }
        if answer.trim().is_empty() {
            return Err(AppError::Validation("Answer cannot be empty".to_string()));
        }

        let entry = FaqEntry::new(question, answer, FaqEntry::parse_keywords(keywords));
        self.faq_repository.create(&entry).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<FaqEntry>> {
        self.faq_repository.get_by_id(id).await
    }

    async fn update(&self, entry: &FaqEntry) -> Result<FaqEntry> {
        let mut entry = entry.clone();
        entry.touch();
        self.faq_repository
            .update(&entry.id, &entry)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("FAQ not found: {}", entry.id)))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.faq_repository.delete(id).await?;
        if deleted {
            // 弱引用置空，聊天记录保留
            let detached = self.message_repository.detach_faq(id).await?;
            info!("Deleted FAQ {} and detached {} messages", id, detached);
        }
        Ok(deleted)
    }

    async fn list_active(&self) -> Result<Vec<FaqEntry>> {
        self.faq_repository.list_active().await
    }

    async fn list_all(&self) -> Result<Vec<FaqEntry>> {
        self.faq_repository.list(usize::MAX, 0).await
    }

    async fn ensure_default_faqs(&self) -> Result<u64> {
        if self.faq_repository.count().await? > 0 {
            return Ok(0);
        }

        let mut created = 0;
        for (question, answer, keywords) in DEFAULT_FAQS {
            let entry = FaqEntry::new(question, answer, FaqEntry::parse_keywords(keywords));
            self.faq_repository.create(&entry).await?;
            created += 1;
        }
        info!("Seeded {} default FAQ entries", created);
        Ok(created)
    }
}

/// 创建目录服务
pub fn create_catalog_service(
    faq_repository: Arc<FaqRepository>,
    message_repository: Arc<MessageRepository>,
) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(faq_repository, message_repository))
}
