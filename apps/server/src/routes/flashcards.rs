//! Flashcards page endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use study_core::Outcome;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::state::lock;
use crate::AppState;

/// Study-mode buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAction {
    Reveal,
    Correct,
    Incorrect,
    Next,
    Previous,
    Reset,
}

impl StudyAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reveal" => Some(Self::Reveal),
            "correct" => Some(Self::Correct),
            "incorrect" => Some(Self::Incorrect),
            "next" => Some(Self::Next),
            "previous" => Some(Self::Previous),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// GET /api/flashcards
pub async fn list(State(state): State<AppState>) -> Result<Json<FlashcardListResponse>> {
    let page = lock(&state.flashcards)?;
    let deck = page.session.deck();
    Ok(Json(FlashcardListResponse {
        cards: deck.cards().to_vec(),
        categories: deck.categories().into_iter().map(String::from).collect(),
        empty: deck.is_empty(),
        study_mode: page.study_mode,
    }))
}

/// POST /api/flashcards
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewCard>,
) -> Result<(StatusCode, Json<Card>)> {
    let mut page = lock(&state.flashcards)?;

    // adding only ever applies or rejects
    if let Outcome::Rejected(e) = page.session.add_card(request) {
        tracing::warn!(error = %e, "Rejected new flashcard");
        return Err(e.into());
    }

    let card = page
        .session
        .deck()
        .cards()
        .last()
        .cloned()
        .ok_or_else(|| ApiError::Internal("deck empty after add".to_string()))?;
    tracing::info!(card_id = card.id, "Flashcard created");
    Ok((StatusCode::CREATED, Json(card)))
}

/// DELETE /api/flashcards/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteCardResponse>> {
    let mut page = lock(&state.flashcards)?;

    if !page.session.delete_card(id).is_applied() {
        return Err(ApiError::NotFound(format!("Card {}", id)));
    }

    tracing::info!(card_id = id, "Flashcard deleted");
    Ok(Json(DeleteCardResponse {
        deleted: id,
        session: SessionView::from_session(&page.session),
    }))
}

/// POST /api/flashcards/study-mode
pub async fn toggle_study_mode(State(state): State<AppState>) -> Result<Json<StudyModeResponse>> {
    let mut page = lock(&state.flashcards)?;
    page.study_mode = !page.study_mode;
    Ok(Json(StudyModeResponse {
        study_mode: page.study_mode,
    }))
}

/// GET /api/flashcards/study
pub async fn study(State(state): State<AppState>) -> Result<Json<SessionView>> {
    let page = lock(&state.flashcards)?;
    Ok(Json(SessionView::from_session(&page.session)))
}

/// POST /api/flashcards/study/{action}
///
/// Only available while study mode is on.
pub async fn study_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<Json<TransitionResponse>> {
    let parsed = StudyAction::parse(&action)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown study action: {}", action)))?;

    let mut page = lock(&state.flashcards)?;
    if !page.study_mode {
        return Err(ApiError::BadRequest(
            "Study mode is off; enable it before studying".to_string(),
        ));
    }
    let session = &mut page.session;
    let outcome = match parsed {
        StudyAction::Reveal => session.reveal(),
        StudyAction::Correct => session.mark_correct(),
        StudyAction::Incorrect => session.mark_incorrect(),
        StudyAction::Next => session.advance(),
        StudyAction::Previous => session.retreat(),
        StudyAction::Reset => session.reset(),
    };

    if !outcome.is_applied() {
        tracing::debug!(action = %action, "Study action ignored");
    }
    Ok(Json(TransitionResponse::new(&outcome, session)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_study_actions() {
        assert_eq!(StudyAction::parse("reveal"), Some(StudyAction::Reveal));
        assert_eq!(StudyAction::parse("previous"), Some(StudyAction::Previous));
        assert_eq!(StudyAction::parse("skip"), None);
    }
}
