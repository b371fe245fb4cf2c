// End-to-end tests for the chat pipeline
//
// Tests cover:
// - Seeding the default FAQ catalog
// - Greeting short-circuit, FAQ matching and fallback selection
// - Session creation and transcript ordering
// - Weak FAQ references surviving entry deletion

use std::sync::Arc;

use faqbot::services::catalog::{CatalogService, CatalogServiceImpl};
use faqbot::services::chat::{ChatService, ChatServiceImpl};
use faqbot::services::matcher::FaqMatcher;
use faqbot::storage::memory::{FaqRepository, MessageRepository, SessionRepository};

struct Harness {
    chat: ChatServiceImpl,
    catalog: CatalogServiceImpl,
}

fn harness() -> Harness {
    let faq_repository = Arc::new(FaqRepository::new());
    let session_repository = Arc::new(SessionRepository::new());
    let message_repository = Arc::new(MessageRepository::new());

    Harness {
        chat: ChatServiceImpl::new(
            FaqMatcher::default(),
            faq_repository.clone(),
            session_repository.clone(),
            message_repository.clone(),
        ),
        catalog: CatalogServiceImpl::new(faq_repository, message_repository),
    }
}

#[tokio::test]
async fn full_conversation_flow() {
    let h = harness();
    assert_eq!(h.catalog.ensure_default_faqs().await.unwrap(), 6);

    // 问候
    let reply = h.chat.submit_message(Some("visitor"), "hello").await.unwrap();
    assert_eq!(reply.confidence, 100);
    assert!(reply.matched_faq_id.is_none());

    // 命中退货政策条目
    let reply = h
        .chat
        .submit_message(Some("visitor"), "what is your refund policy")
        .await
        .unwrap();
    let matched_id = reply.matched_faq_id.clone().expect("should match an FAQ");
    assert!(reply.confidence >= 20);
    assert!(reply.reply.contains("return"));

    // 乱码兜底
    let reply = h
        .chat
        .submit_message(Some("visitor"), "asdkjasd")
        .await
        .unwrap();
    assert_eq!(reply.confidence, 0);
    assert!(reply.matched_faq_id.is_none());

    // 历史按时间升序，三条都在
    let history = h.chat.history("visitor").await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].user_message, "hello");
    assert_eq!(history[1].matched_faq_id.as_deref(), Some(matched_id.as_str()));
    assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    // 删除命中的 FAQ 后，记录保留但弱引用清空
    assert!(h.catalog.delete(&matched_id).await.unwrap());
    let history = h.chat.history("visitor").await.unwrap();
    assert_eq!(history.len(), 3);
    assert!(history[1].matched_faq_id.is_none());
    assert!(history[1].bot_response.contains("return"));
}

#[tokio::test]
async fn seeding_twice_adds_nothing() {
    let h = harness();
    assert_eq!(h.catalog.ensure_default_faqs().await.unwrap(), 6);
    assert_eq!(h.catalog.ensure_default_faqs().await.unwrap(), 0);
    assert_eq!(h.catalog.list_all().await.unwrap().len(), 6);
}

#[tokio::test]
async fn fresh_session_history_is_empty_not_an_error() {
    let h = harness();
    // 一条问候创建会话 s1；s2 从未出现过
    h.chat.submit_message(Some("s1"), "hi").await.unwrap();

    let history = h.chat.history("s1").await.unwrap();
    assert_eq!(history.len(), 1);

    assert!(h.chat.history("s2").await.is_err());
}

#[tokio::test]
async fn deactivated_entries_do_not_match() {
    let h = harness();
    let entry = h
        .catalog
        .create(
            "What is your return policy?",
            "7 days.",
            "return,policy,refund",
        )
        .await
        .unwrap();

    let mut deactivated = entry.clone();
    deactivated.active = false;
    h.catalog.update(&deactivated).await.unwrap();

    let reply = h
        .chat
        .submit_message(Some("s1"), "what is your refund policy")
        .await
        .unwrap();
    assert!(reply.matched_faq_id.is_none());
    assert_eq!(reply.confidence, 0);
}
