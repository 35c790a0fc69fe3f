//! Landing page endpoints

use axum::{extract::State, Json};
use study_core::content;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::state::lock;
use crate::AppState;

/// GET /api/home
pub async fn get(State(state): State<AppState>) -> Result<Json<HomeResponse>> {
    let home = lock(&state.home)?;
    Ok(Json(HomeResponse {
        features: content::landing_features(),
        stats: content::landing_stats(),
        flashcard: SessionView::from_session(&home.session),
        playing: home.playing,
    }))
}

/// POST /api/home/flashcard/toggle
pub async fn toggle_card(State(state): State<AppState>) -> Result<Json<TransitionResponse>> {
    let mut home = lock(&state.home)?;
    let outcome = home.session.toggle();
    Ok(Json(TransitionResponse::new(&outcome, &home.session)))
}

/// POST /api/home/flashcard/next
pub async fn next_card(State(state): State<AppState>) -> Result<Json<TransitionResponse>> {
    let mut home = lock(&state.home)?;
    let outcome = home.session.advance();
    Ok(Json(TransitionResponse::new(&outcome, &home.session)))
}

/// POST /api/home/audio/toggle
pub async fn toggle_audio(State(state): State<AppState>) -> Result<Json<DemoAudioResponse>> {
    let mut home = lock(&state.home)?;
    home.playing = !home.playing;
    Ok(Json(DemoAudioResponse {
        playing: home.playing,
    }))
}

/// POST /api/home/upload
///
/// Echoes the chosen file back. The document itself is never read.
pub async fn upload(Json(request): Json<UploadRequest>) -> Result<Json<UploadResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("file name is required".to_string()));
    }
    if !content::is_supported_upload(&request.name) {
        tracing::warn!(name = %request.name, "Rejected upload with unsupported format");
        return Err(ApiError::BadRequest(format!(
            "unsupported file format; expected one of {}",
            content::SUPPORTED_FORMATS.join(", ")
        )));
    }
    if request.size > content::MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(format!(
            "file exceeds the {} limit",
            size_label(content::MAX_UPLOAD_BYTES)
        )));
    }

    tracing::info!(name = %request.name, size = request.size, "Upload selected");
    Ok(Json(UploadResponse {
        size_label: size_label(request.size),
        name: request.name,
        size: request.size,
        message: "Document processing is coming soon".to_string(),
    }))
}
