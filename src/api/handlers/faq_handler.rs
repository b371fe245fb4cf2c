use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::faq_dto::*},
    error::AppError,
    storage::repository::Repository,
};

pub async fn list_faqs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing active FAQ entries");

    let entries = state.catalog_service.list_active().await?;
    let faqs: Vec<FaqResponse> = entries.into_iter().map(FaqResponse::from).collect();
    let total = faqs.len();

    Ok(Json(FaqListResponse { faqs, total }))
}

pub async fn list_all_faqs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing all FAQ entries");

    let entries = state.catalog_service.list_all().await?;
    let faqs: Vec<FaqResponse> = entries.into_iter().map(FaqResponse::from).collect();
    let total = faqs.len();

    Ok(Json(FaqListResponse { faqs, total }))
}

pub async fn create_faq(
    State(state): State<AppState>,
    Json(request): Json<CreateFaqRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating FAQ entry: {}", request.question);

    let entry = state
        .catalog_service
        .create(&request.question, &request.answer, &request.keywords)
        .await?;

    Ok((StatusCode::CREATED, Json(FaqResponse::from(entry))))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFaqRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating FAQ entry: {}", id);

    let mut entry = state
        .catalog_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("FAQ not found: {}", id)))?;

    if let Some(question) = request.question {
        entry.question = question;
    }
    if let Some(answer) = request.answer {
        entry.answer = answer;
    }
    if let Some(keywords) = request.keywords {
        entry.keywords = crate::models::faq::FaqEntry::parse_keywords(&keywords);
    }
    if let Some(active) = request.active {
        entry.active = active;
    }

    let updated = state.catalog_service.update(&entry).await?;
    Ok(Json(FaqResponse::from(updated)))
}

pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting FAQ entry: {}", id);

    let deleted = state.catalog_service.delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("FAQ not found: {}", id)));
    }

    let response = DeleteFaqResponse {
        id,
        message: "FAQ deleted successfully".to_string(),
    };

    Ok(Json(response))
}

pub async fn seed_faqs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Seeding default FAQ entries");

    let created = state.catalog_service.ensure_default_faqs().await?;
    let total = state.faq_repository.count().await?;

    let response = SeedFaqsResponse {
        created,
        total,
        message: if created > 0 {
            "Default FAQs populated".to_string()
        } else {
            "Catalog already populated, nothing to do".to_string()
        },
    };

    Ok(Json(response))
}
