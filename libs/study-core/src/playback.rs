//! Audio playback simulation.
//!
//! There is no real audio. While playing, the host calls [`Playback::tick`]
//! once per fixed interval; each tick advances the position by one second
//! until the duration is reached, at which point playback stops and rewinds.

use crate::error::PlaybackError;
use serde::{Deserialize, Serialize};

/// Demo track length in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 300;
pub const DEFAULT_VOLUME: u8 = 75;
/// Speeds offered by the speed selector.
pub const PLAYBACK_SPEEDS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed.
    Idle,
    Advanced,
    /// Reached the end; playback stopped and rewound to zero.
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playback {
    pub playing: bool,
    pub current_secs: u32,
    pub duration_secs: u32,
    pub volume: u8,
    pub speed: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::with_duration(DEFAULT_DURATION_SECS)
    }
}

impl Playback {
    pub fn with_duration(duration_secs: u32) -> Self {
        Self {
            playing: false,
            current_secs: 0,
            duration_secs,
            volume: DEFAULT_VOLUME,
            speed: 1.0,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip between playing and paused, returning the new flag.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        if self.current_secs >= self.duration_secs {
            self.playing = false;
            self.current_secs = 0;
            return TickOutcome::Finished;
        }
        self.current_secs += 1;
        TickOutcome::Advanced
    }

    /// Move the position, clamped to the track.
    pub fn seek(&mut self, secs: u32) {
        self.current_secs = secs.min(self.duration_secs);
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), PlaybackError> {
        if !PLAYBACK_SPEEDS.iter().any(|s| (s - speed).abs() < f64::EPSILON) {
            return Err(PlaybackError::UnsupportedSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        f64::from(self.current_secs) / f64::from(self.duration_secs) * 100.0
    }

    /// Decorative waveform bars. Heights are fixed per bar index; bars
    /// before the play position are marked as played.
    pub fn waveform(&self, bars: usize) -> Vec<WaveformBar> {
        let played = (self.progress_percent() / 100.0 * bars as f64) as usize;
        (0..bars)
            .map(|i| WaveformBar {
                height: 20 + ((i * 17 + 7) % 41) as u32,
                played: i < played,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveformBar {
    pub height: u32,
    pub played: bool,
}

/// Format seconds as `m:ss`.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
