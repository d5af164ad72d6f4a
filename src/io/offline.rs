use std::collections::VecDeque;

use crate::{
    playback::{PlaybackError, ToneBackend, ToneRequest},
    synth::mixer::ToneMixer,
    MAX_BLOCK_SIZE,
};

/// Renders scheduled tones into memory instead of a device.
///
/// Time only advances through [`OfflineBackend::render`]; while suspended,
/// rendering yields silence and the clock stands still.
pub struct OfflineBackend {
    mixer: ToneMixer<VecDeque<ToneRequest>>,
    suspended: bool,
}

impl OfflineBackend {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            mixer: ToneMixer::new(sample_rate, VecDeque::new()),
            suspended: false,
        }
    }

    /// Start suspended; the first tone request resumes it.
    pub fn suspended(sample_rate: f32) -> Self {
        Self {
            suspended: true,
            ..Self::new(sample_rate)
        }
    }

    /// Render `frames` mono samples.
    pub fn render(&mut self, frames: usize) -> Vec<f32> {
        let mut out = vec![0.0f32; frames];
        if self.suspended {
            return out;
        }

        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.mixer.render_block(block);
        }
        out
    }

    /// Render `seconds` of audio.
    pub fn render_seconds(&mut self, seconds: f64) -> Vec<f32> {
        let frames = (seconds * self.mixer.sample_rate() as f64).round() as usize;
        self.render(frames)
    }

    pub fn sample_rate(&self) -> f32 {
        self.mixer.sample_rate()
    }

    /// Seconds rendered so far.
    pub fn current_time(&self) -> f64 {
        self.mixer.current_time()
    }

    pub fn active_voices(&self) -> usize {
        self.mixer.active_voices()
    }
}

impl ToneBackend for OfflineBackend {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        self.suspended = false;
        Ok(())
    }

    fn schedule(&mut self, request: ToneRequest) -> Result<(), PlaybackError> {
        self.mixer.receiver_mut().push_back(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{plan_single_tone, PlaybackConfig};

    #[test]
    fn suspended_backend_keeps_clock_still() {
        let mut backend = OfflineBackend::suspended(8_000.0);
        let out = backend.render(256);
        assert!(out.iter().all(|&s| s == 0.0));
        assert_eq!(backend.current_time(), 0.0);
    }

    #[test]
    fn renders_scheduled_tone() {
        let mut backend = OfflineBackend::new(8_000.0);
        backend
            .schedule(plan_single_tone("A4", 0.5, 0.0, &PlaybackConfig::default()))
            .unwrap();

        let out = backend.render_seconds(0.5);
        let peak = out.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak > 0.25 && peak <= 0.3, "peak {peak}");
        assert_eq!(backend.active_voices(), 0);
    }
}
