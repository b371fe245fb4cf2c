use crate::observability::AppMetrics;
use crate::services::catalog::CatalogService;
use crate::services::chat::ChatService;
use crate::storage::memory::{FaqRepository, MessageRepository, SessionRepository};
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// FAQ repository for catalog storage
    pub faq_repository: Arc<FaqRepository>,
    /// Session repository for chat session storage
    pub session_repository: Arc<SessionRepository>,
    /// Message repository for transcript storage
    pub message_repository: Arc<MessageRepository>,
    /// Chat service for the message pipeline
    pub chat_service: Arc<dyn ChatService>,
    /// Catalog service for FAQ administration
    pub catalog_service: Arc<dyn CatalogService>,
    /// Application metrics
    pub metrics: AppMetrics,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("faq_repository", &"Arc<FaqRepository>")
            .field("session_repository", &"Arc<SessionRepository>")
            .field("message_repository", &"Arc<MessageRepository>")
            .field("chat_service", &"Arc<dyn ChatService>")
            .field("catalog_service", &"Arc<dyn CatalogService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        faq_repository: Arc<FaqRepository>,
        session_repository: Arc<SessionRepository>,
        message_repository: Arc<MessageRepository>,
        chat_service: Box<dyn ChatService>,
        catalog_service: Box<dyn CatalogService>,
        metrics: AppMetrics,
    ) -> Self {
        Self {
            faq_repository,
            session_repository,
            message_repository,
            chat_service: Arc::from(chat_service),
            catalog_service: Arc::from(catalog_service),
            metrics,
        }
    }

    /// Create application state with default wiring over fresh in-process stores
    pub fn development() -> Self {
        use crate::services::catalog::create_catalog_service;
        use crate::services::chat::create_chat_service;
        use crate::services::matcher::FaqMatcher;

        let faq_repository = Arc::new(FaqRepository::new());
        let session_repository = Arc::new(SessionRepository::new());
        let message_repository = Arc::new(MessageRepository::new());

        let chat_service = create_chat_service(
            FaqMatcher::default(),
            faq_repository.clone(),
            session_repository.clone(),
            message_repository.clone(),
        );
        let catalog_service =
            create_catalog_service(faq_repository.clone(), message_repository.clone());

        Self::new(
            faq_repository,
            session_repository,
            message_repository,
            chat_service,
            catalog_service,
            AppMetrics::default(),
        )
    }
}
