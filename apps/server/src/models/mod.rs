//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from study-core
pub use study_core::content::{About, DocumentSummary, Feature, PageRoute, PlaceholderPage, Stat};
pub use study_core::{Card, CardView, NewCard, Playback, StudySession, WaveformBar};

use study_core::{format_time, Outcome};

/// Number of bars in the audio page waveform.
pub const WAVEFORM_BARS: usize = 40;

// === Study views ===

/// Current position of a flashcard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// `None` when the deck is empty.
    pub card: Option<CardView>,
    pub revealed: bool,
    pub correct_count: u32,
    pub reviewed: usize,
    pub total: usize,
}

impl SessionView {
    pub fn from_session(session: &StudySession) -> Self {
        let state = session.state();
        Self {
            card: session.view(),
            revealed: state.revealed,
            correct_count: state.correct_count,
            reviewed: session.reviewed(),
            total: session.deck().len(),
        }
    }
}

/// Response to a session transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// `false` when the transition was not valid in the current state.
    pub applied: bool,
    #[serde(flatten)]
    pub session: SessionView,
}

impl TransitionResponse {
    pub fn new(outcome: &Outcome, session: &StudySession) -> Self {
        Self {
            applied: outcome.is_applied(),
            session: SessionView::from_session(session),
        }
    }
}

// === Landing page ===

#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub flashcard: SessionView,
    pub playing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoAudioResponse {
    pub playing: bool,
}

/// File chosen in the upload control. Only its metadata is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub name: String,
    pub size: u64,
    pub size_label: String,
    pub message: String,
}

/// Human-readable size with one decimal, e.g. `1.5 MB`.
pub fn size_label(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

// === Flashcards page ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardListResponse {
    pub cards: Vec<Card>,
    pub categories: Vec<String>,
    pub empty: bool,
    pub study_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyModeResponse {
    pub study_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCardResponse {
    pub deleted: i64,
    #[serde(flatten)]
    pub session: SessionView,
}

// === Audio page ===

#[derive(Debug, Clone, Serialize)]
pub struct AudioResponse {
    pub title: &'static str,
    pub playing: bool,
    pub current_secs: u32,
    pub duration_secs: u32,
    pub current_time: String,
    pub duration: String,
    pub progress_percent: f64,
    pub volume: u8,
    pub speed: f64,
    pub speeds: Vec<f64>,
    pub waveform: Vec<WaveformBar>,
    pub transcript: Vec<&'static str>,
}

impl AudioResponse {
    pub fn from_playback(playback: &Playback) -> Self {
        Self {
            title: study_core::content::document_summary().title,
            playing: playback.playing,
            current_secs: playback.current_secs,
            duration_secs: playback.duration_secs,
            current_time: format_time(playback.current_secs),
            duration: format_time(playback.duration_secs),
            progress_percent: playback.progress_percent(),
            volume: playback.volume,
            speed: playback.speed,
            speeds: study_core::PLAYBACK_SPEEDS.to_vec(),
            waveform: playback.waveform(WAVEFORM_BARS),
            transcript: study_core::content::transcript(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeekRequest {
    pub secs: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeRequest {
    pub volume: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeedRequest {
    pub speed: f64,
}

// === Summary page ===

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: DocumentSummary,
    pub flashcard: SessionView,
    pub stats: SummaryStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub total_cards: usize,
    pub cards_reviewed: usize,
    pub progress_percent: f64,
}

impl SummaryStats {
    pub fn from_session(session: &StudySession) -> Self {
        Self {
            total_cards: session.deck().len(),
            cards_reviewed: session.reviewed(),
            progress_percent: session.progress_percent(),
        }
    }
}

// === Misc ===

#[derive(Debug, Clone, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<PageRoute>,
}
