//! Summary page endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use study_core::content;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::state::lock;
use crate::AppState;

/// GET /api/summary
pub async fn get(State(state): State<AppState>) -> Result<Json<SummaryResponse>> {
    let session = lock(&state.summary)?;
    Ok(Json(SummaryResponse {
        summary: content::document_summary(),
        flashcard: SessionView::from_session(&session),
        stats: SummaryStats::from_session(&session),
    }))
}

/// POST /api/summary/flashcard/{action}
pub async fn flashcard_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<Json<TransitionResponse>> {
    let mut session = lock(&state.summary)?;
    let outcome = match action.as_str() {
        "reveal" => session.reveal(),
        "hide" => session.hide(),
        "next" => session.advance(),
        "previous" => session.retreat(),
        "reset" => session.reset(),
        _ => {
            return Err(ApiError::BadRequest(format!(
                "Unknown flashcard action: {}",
                action
            )))
        }
    };
    Ok(Json(TransitionResponse::new(&outcome, &session)))
}
