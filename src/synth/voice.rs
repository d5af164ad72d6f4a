use crate::{
    dsp::{envelope::Envelope, oscillator::SineOscillator},
    playback::ToneRequest,
};

/// One scheduled sine tone: an oscillator gated by its envelope, waiting for
/// its start frame.
pub struct ToneVoice {
    pitch_value: i32,
    start_frame: u64,
    osc: SineOscillator,
    env: Envelope,
}

impl ToneVoice {
    pub fn new(request: &ToneRequest, start_frame: u64, sample_rate: f32) -> Self {
        Self {
            pitch_value: request.pitch_value,
            start_frame,
            osc: SineOscillator::new(request.frequency, sample_rate),
            env: Envelope::new(request.envelope, request.duration, sample_rate),
        }
    }

    /// Mix this voice into `out`, whose first sample sits at `block_start`.
    pub fn render_add(&mut self, out: &mut [f32], block_start: u64) {
        let skip = self.start_frame.saturating_sub(block_start);
        if skip >= out.len() as u64 {
            return;
        }

        for sample in out[skip as usize..].iter_mut() {
            if !self.env.is_active() {
                break;
            }
            let gain = self.env.next_sample();
            *sample += self.osc.next_sample() * gain;
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.env.is_active()
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    pub fn pitch_value(&self) -> i32 {
        self.pitch_value
    }

    /// Current envelope gain (for visualization)
    pub fn level(&self) -> f32 {
        self.env.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{plan_single_tone, PlaybackConfig};

    #[test]
    fn waits_for_start_frame() {
        let request = plan_single_tone("A4", 0.5, 0.0, &PlaybackConfig::default());
        let mut voice = ToneVoice::new(&request, 100, 1_000.0);

        let mut block = vec![0.0f32; 64];
        voice.render_add(&mut block, 0);
        assert!(block.iter().all(|&s| s == 0.0));

        let mut block = vec![0.0f32; 64];
        voice.render_add(&mut block, 64);
        assert!(block[..36].iter().all(|&s| s == 0.0));
        assert!(!voice.is_finished());
    }

    #[test]
    fn finishes_after_duration() {
        let request = plan_single_tone("C4", 0.1, 0.0, &PlaybackConfig::default());
        let mut voice = ToneVoice::new(&request, 0, 1_000.0);

        let mut block = vec![0.0f32; 128];
        voice.render_add(&mut block, 0);

        assert!(voice.is_finished());
        assert!(block[100..].iter().all(|&s| s == 0.0));
        assert!(block.iter().all(|s| s.abs() <= 0.3));
    }
}
