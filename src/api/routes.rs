use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use chrono::Utc;
use url::Url;

use crate::error::{Result, AppError};
use crate::api::models::{Answer, QueryRequest, ScrapeRequest, ScrapedDocument};
use crate::classifier;
use crate::query;
use crate::synthesizer;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/scrape", post(scrape_handler))
        .route("/api/query", post(query_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn scrape_handler(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapedDocument>> {
    let url = match req.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::MissingInput("URL is required".to_string())),
    };

    if Url::parse(url).is_err() {
        tracing::debug!("rejecting malformed url: {}", url);
        return Err(AppError::InvalidInput);
    }

    // Simulated scraping cost. Non-blocking; nothing is held across the wait.
    tokio::time::sleep(state.config.scrape_delay).await;

    let category = classifier::classify(url);
    tracing::info!("scrape request for {} classified as {:?}", url, category);

    let document = synthesizer::synthesize(category, url, Utc::now());
    Ok(Json(document))
}

async fn query_handler(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<Answer>> {
    let question = match req.question.as_deref() {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(AppError::MissingInput("Question is required".to_string())),
    };

    let backend_url = state
        .config
        .query_backend_url
        .as_deref()
        .ok_or_else(|| AppError::ConfigError("Query backend is not configured".to_string()))?;

    tracing::info!("forwarding question to query backend");
    let answer = query::forward_question(backend_url, question).await?;
    Ok(Json(answer))
}
