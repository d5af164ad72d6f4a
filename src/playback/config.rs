#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::envelope::ToneEnvelope;

/// Timing and envelope settings for tone playback.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Seconds a single note rings when no duration is given
    pub note_duration: f64,
    /// Seconds each note of a chord rings
    pub stack_duration: f64,
    /// Seconds between successive note onsets within a chord
    pub strum: f64,
    pub envelope: ToneEnvelope,
}

impl PlaybackConfig {
    pub fn new() -> Self {
        Self {
            note_duration: 0.5,
            stack_duration: 1.5,
            strum: 0.05,
            envelope: ToneEnvelope::DEFAULT,
        }
    }

    pub fn note_duration(mut self, seconds: f64) -> Self {
        self.note_duration = seconds;
        self
    }

    pub fn stack_duration(mut self, seconds: f64) -> Self {
        self.stack_duration = seconds;
        self
    }

    /// Set the onset spacing within a chord. 0.0 hits every note at once.
    pub fn strum(mut self, seconds: f64) -> Self {
        self.strum = seconds.max(0.0);
        self
    }

    pub fn envelope(mut self, envelope: ToneEnvelope) -> Self {
        self.envelope = envelope;
        self
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::new()
    }
}
