use faqbot::api::{self, app_state::AppState};
use faqbot::config::loader::ConfigLoader;
use faqbot::observability::{AppMetrics, ObservabilityState, create_observability_router};
use faqbot::services::catalog::create_catalog_service;
use faqbot::services::chat::create_chat_service;
use faqbot::services::matcher::FaqMatcher;
use faqbot::storage::memory::{FaqRepository, MessageRepository, SessionRepository};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.structured {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Faqbot...");
    info!("Configuration loaded successfully");

    let faq_repository = Arc::new(FaqRepository::new());
    let session_repository = Arc::new(SessionRepository::new());
    let message_repository = Arc::new(MessageRepository::new());
    info!("Repositories initialized");

    let chat_service = create_chat_service(
        FaqMatcher::default(),
        faq_repository.clone(),
        session_repository.clone(),
        message_repository.clone(),
    );
    info!("Chat service initialized");

    let catalog_service =
        create_catalog_service(faq_repository.clone(), message_repository.clone());
    info!("Catalog service initialized");

    let metrics = AppMetrics::default();
    let app_state = AppState::new(
        faq_repository,
        session_repository,
        message_repository,
        chat_service,
        catalog_service,
        metrics.clone(),
    );
    info!("Application state created");

    if config.chat.seed_on_startup {
        let created = app_state.catalog_service.ensure_default_faqs().await?;
        info!("FAQ catalog ready ({} entries seeded)", created);
    }

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
