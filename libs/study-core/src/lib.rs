//! Core study-aid library shared by the server pages.
//!
//! Provides:
//! - Card and deck types with id assignment on create
//! - Flashcard study session reducer (reveal, mark, cyclic navigation)
//! - Audio playback simulation (tick-driven progress, volume, speed)
//! - Seeded page content (demo decks, summaries, feature tiles)

pub mod content;
pub mod deck;
pub mod error;
pub mod playback;
pub mod session;
pub mod types;

pub use deck::Deck;
pub use error::{DeckError, PlaybackError, Result};
pub use playback::{format_time, Playback, TickOutcome, WaveformBar, PLAYBACK_SPEEDS};
pub use session::{reduce, Action, Outcome, SessionState, StudySession};
pub use types::{Card, CardFace, CardView, Difficulty, NewCard};
