use crate::{
    dsp::envelope::ToneEnvelope,
    pitch::{first_enharmonic, pitch_value_to_freq, resolve_pitch_value},
};

use super::config::PlaybackConfig;

/// Everything a backend needs to sound one tone.
///
/// `Copy` and allocation-free so it can cross into the audio thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Resolved pitch value (C4 = 60)
    pub pitch_value: i32,
    /// Oscillator frequency in Hz
    pub frequency: f64,
    /// Seconds from "now" until the tone starts
    pub start_delay: f64,
    /// Seconds from tone start until the oscillator stops
    pub duration: f64,
    pub envelope: ToneEnvelope,
}

impl ToneRequest {
    /// Seconds from "now" until the tone has stopped.
    pub fn end_time(&self) -> f64 {
        self.start_delay + self.duration
    }
}

/// Build the request for one tone.
///
/// Display strings holding an enharmonic pair ("C#/Db") sound their first
/// alternative.
pub fn plan_single_tone(
    spelling: &str,
    duration: f64,
    start_delay: f64,
    config: &PlaybackConfig,
) -> ToneRequest {
    let pitch_value = resolve_pitch_value(first_enharmonic(spelling));

    ToneRequest {
        pitch_value,
        frequency: pitch_value_to_freq(pitch_value),
        start_delay,
        duration,
        envelope: config.envelope,
    }
}

/// Build the strummed requests for a chord: note `i` starts `i * strum`
/// seconds in and rings for the stack duration.
pub fn plan_tone_stack<S: AsRef<str>>(spellings: &[S], config: &PlaybackConfig) -> Vec<ToneRequest> {
    spellings
        .iter()
        .enumerate()
        .map(|(index, spelling)| {
            plan_single_tone(
                spelling.as_ref(),
                config.stack_duration,
                index as f64 * config.strum,
                config,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tone_resolves_first_alternative() {
        let config = PlaybackConfig::default();
        let request = plan_single_tone("A#/Bb", 0.5, 0.0, &config);
        assert_eq!(request.pitch_value, 70);
        assert!((request.frequency - 466.16).abs() < 1e-2);
        assert_eq!(request.envelope, ToneEnvelope::DEFAULT);
    }

    #[test]
    fn stack_is_strummed_in_input_order() {
        let requests = plan_tone_stack(&["C", "E", "G"], &PlaybackConfig::default());
        let delays: Vec<f64> = requests.iter().map(|r| r.start_delay).collect();
        let pitches: Vec<i32> = requests.iter().map(|r| r.pitch_value).collect();

        assert_eq!(pitches, vec![60, 64, 67]);
        assert_eq!(delays[0], 0.0);
        assert!((delays[1] - 0.05).abs() < 1e-12);
        assert!((delays[2] - 0.10).abs() < 1e-12);
        assert!(requests.iter().all(|r| r.duration == 1.5));
    }

    #[test]
    fn empty_stack_plans_nothing() {
        let none: [&str; 0] = [];
        assert!(plan_tone_stack(&none, &PlaybackConfig::default()).is_empty());
    }

    #[test]
    fn end_time_includes_delay() {
        let request = plan_single_tone("C", 1.5, 0.1, &PlaybackConfig::default());
        assert!((request.end_time() - 1.6).abs() < 1e-12);
    }
}
