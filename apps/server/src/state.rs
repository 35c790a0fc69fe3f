//! Per-page in-memory state.
//!
//! Each page owns its state exclusively behind its own mutex. Locks are
//! never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use study_core::content;
use study_core::{Playback, StudySession, TickOutcome};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Lock a page mutex, mapping poisoning to an internal error.
pub fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| ApiError::Internal("page state lock poisoned".to_string()))
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub home: Arc<Mutex<HomePage>>,
    pub flashcards: Arc<Mutex<FlashcardsPage>>,
    pub summary: Arc<Mutex<StudySession>>,
    pub audio: Arc<AudioPlayer>,
}

impl AppState {
    /// Fresh state seeded with the demo content.
    pub fn new(config: &Config) -> Self {
        Self {
            home: Arc::new(Mutex::new(HomePage::default())),
            flashcards: Arc::new(Mutex::new(FlashcardsPage::default())),
            summary: Arc::new(Mutex::new(StudySession::new(content::summary_deck()))),
            audio: Arc::new(AudioPlayer::new(Playback::default(), config.playback_tick)),
        }
    }
}

/// Landing page: flashcard demo plus a play/pause flag.
#[derive(Debug)]
pub struct HomePage {
    pub session: StudySession,
    pub playing: bool,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            session: StudySession::new(content::landing_deck()),
            playing: false,
        }
    }
}

/// Flashcards page: browse view plus study mode.
#[derive(Debug)]
pub struct FlashcardsPage {
    pub session: StudySession,
    pub study_mode: bool,
}

impl Default for FlashcardsPage {
    fn default() -> Self {
        Self {
            session: StudySession::new(content::browse_deck()),
            study_mode: false,
        }
    }
}

/// Audio page player.
///
/// While playing, a background task ticks the playback once per interval.
/// The task exits on its own when the track finishes and is aborted on
/// pause or when the player is dropped. The playing flag and the task are
/// only changed together, under the playback lock.
pub struct AudioPlayer {
    playback: Arc<Mutex<Playback>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    tick_interval: Duration,
}

impl AudioPlayer {
    pub fn new(playback: Playback, tick_interval: Duration) -> Self {
        Self {
            playback: Arc::new(Mutex::new(playback)),
            ticker: Mutex::new(None),
            tick_interval,
        }
    }

    pub fn snapshot(&self) -> Result<Playback> {
        Ok(lock(&self.playback)?.clone())
    }

    /// Run a closure against the playback without touching the ticker.
    pub fn update<R>(&self, f: impl FnOnce(&mut Playback) -> R) -> Result<R> {
        let mut playback = lock(&self.playback)?;
        Ok(f(&mut playback))
    }

    pub fn play(&self) -> Result<Playback> {
        let mut playback = lock(&self.playback)?;
        if !playback.playing {
            playback.play();
            self.restart_ticker()?;
        }
        Ok(playback.clone())
    }

    pub fn pause(&self) -> Result<Playback> {
        let mut playback = lock(&self.playback)?;
        playback.pause();
        self.stop_ticker()?;
        Ok(playback.clone())
    }

    pub fn toggle(&self) -> Result<Playback> {
        let mut playback = lock(&self.playback)?;
        if playback.playing {
            playback.pause();
            self.stop_ticker()?;
        } else {
            playback.play();
            self.restart_ticker()?;
        }
        Ok(playback.clone())
    }

    /// Whether a ticking task is currently alive.
    pub fn is_ticking(&self) -> Result<bool> {
        Ok(lock(&self.ticker)?
            .as_ref()
            .is_some_and(|handle| !handle.is_finished()))
    }

    // Callers hold the playback lock, so a ticker that has just seen the
    // track finish can never be mistaken for a live one.
    fn restart_ticker(&self) -> Result<()> {
        let mut ticker = lock(&self.ticker)?;
        if let Some(stale) = ticker.take() {
            stale.abort();
        }

        let playback = Arc::clone(&self.playback);
        let period = self.tick_interval;
        *ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let outcome = match playback.lock() {
                    Ok(mut playback) => playback.tick(),
                    Err(_) => break,
                };
                match outcome {
                    TickOutcome::Advanced => {}
                    TickOutcome::Finished => {
                        tracing::info!("Playback reached the end, rewinding");
                        break;
                    }
                    TickOutcome::Idle => break,
                }
            }
        }));
        tracing::debug!(?period, "Playback ticker started");
        Ok(())
    }

    fn stop_ticker(&self) -> Result<()> {
        if let Some(handle) = lock(&self.ticker)?.take() {
            handle.abort();
            tracing::debug!("Playback ticker stopped");
        }
        Ok(())
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        if let Ok(mut ticker) = self.ticker.lock() {
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
        }
    }
}
