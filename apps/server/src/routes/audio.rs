//! Audio page endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/audio
pub async fn get(State(state): State<AppState>) -> Result<Json<AudioResponse>> {
    let playback = state.audio.snapshot()?;
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// POST /api/audio/play
pub async fn play(State(state): State<AppState>) -> Result<Json<AudioResponse>> {
    let playback = state.audio.play()?;
    tracing::info!(position = playback.current_secs, "Playback started");
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// POST /api/audio/pause
pub async fn pause(State(state): State<AppState>) -> Result<Json<AudioResponse>> {
    let playback = state.audio.pause()?;
    tracing::info!(position = playback.current_secs, "Playback paused");
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// POST /api/audio/toggle
pub async fn toggle(State(state): State<AppState>) -> Result<Json<AudioResponse>> {
    let playback = state.audio.toggle()?;
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// PUT /api/audio/seek
pub async fn seek(
    State(state): State<AppState>,
    Json(request): Json<SeekRequest>,
) -> Result<Json<AudioResponse>> {
    let playback = state.audio.update(|p| {
        p.seek(request.secs);
        p.clone()
    })?;
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// PUT /api/audio/volume
pub async fn volume(
    State(state): State<AppState>,
    Json(request): Json<VolumeRequest>,
) -> Result<Json<AudioResponse>> {
    let playback = state.audio.update(|p| {
        p.set_volume(request.volume);
        p.clone()
    })?;
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// PUT /api/audio/speed
pub async fn speed(
    State(state): State<AppState>,
    Json(request): Json<SpeedRequest>,
) -> Result<Json<AudioResponse>> {
    let playback = state
        .audio
        .update(|p| p.set_speed(request.speed).map(|_| p.clone()))??;
    Ok(Json(AudioResponse::from_playback(&playback)))
}

/// POST /api/audio/convert
pub async fn convert() -> Result<Json<AudioResponse>> {
    Err(ApiError::ComingSoon(
        "Text-to-audio conversion is coming soon".to_string(),
    ))
}
