use std::f64::consts::TAU;

/*
Sine Oscillator
===============

A phase accumulator driving sin(). Phase is kept in cycles (0.0 to 1.0) and
advanced by frequency / sample_rate each sample, wrapping at 1.0:

    sample[n] = sin(2π * phase[n])
    phase[n + 1] = (phase[n] + f / sr) mod 1

Phase is held in f64 so a 1.5 s tone does not drift audibly from the ideal
sin(2π f n / sr).
*/

pub struct SineOscillator {
    phase: f64,
    increment: f64,
}

impl SineOscillator {
    pub fn new(frequency: f64, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            increment: frequency / sample_rate as f64,
        }
    }

    pub fn next_sample(&mut self) -> f32 {
        let sample = (TAU * self.phase).sin() as f32;
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }
        sample
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let frequency = 440.0;
        let mut osc = SineOscillator::new(frequency, sample_rate);

        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer);

        // sample n should be sin(2pi f n / sr)
        for sample_index in [0usize, 12, 127] {
            let expected = (TAU * frequency * sample_index as f64 / sample_rate as f64).sin() as f32;
            let actual = buffer[sample_index];
            assert!(
                (actual - expected).abs() < 1e-5,
                "expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn stays_in_unit_range() {
        let mut osc = SineOscillator::new(3_520.0, 44_100.0);
        let mut buffer = vec![0.0f32; 4096];
        osc.render(&mut buffer);
        assert!(buffer.iter().all(|s| s.abs() <= 1.0));
    }
}
