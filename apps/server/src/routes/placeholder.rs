//! Notes and quiz placeholder pages. Every action answers "Coming Soon".

use axum::{extract::Path, Json};
use study_core::content;

use crate::error::{ApiError, Result};
use crate::models::*;

/// GET /api/notes
pub async fn notes() -> Json<PlaceholderPage> {
    Json(content::notes_page())
}

/// GET /api/quiz
pub async fn quiz() -> Json<PlaceholderPage> {
    Json(content::quiz_page())
}

/// POST /api/notes/{feature}
pub async fn notes_action(Path(feature): Path<String>) -> Result<Json<Feature>> {
    coming_soon(&content::notes_page(), &feature)
}

/// POST /api/quiz/{feature}
pub async fn quiz_action(Path(feature): Path<String>) -> Result<Json<Feature>> {
    coming_soon(&content::quiz_page(), &feature)
}

fn coming_soon(page: &PlaceholderPage, slug: &str) -> Result<Json<Feature>> {
    let feature = page
        .feature(slug)
        .ok_or_else(|| ApiError::NotFound(format!("{} feature {}", page.title, slug)))?;
    Err(ApiError::ComingSoon(feature.title.to_string()))
}
