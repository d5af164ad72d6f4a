#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Tone Envelope
=============

Every feedback tone gets the same two-segment amplitude shape: a short
linear attack followed by an exponential decay toward silence. Starting and
ending near zero keeps the sine from clicking at its boundaries.

Vocabulary
----------

  peak      Gain reached at the end of the attack (0.3 by default, which
            leaves headroom when a whole chord sounds at once).

  attack    Seconds spent ramping linearly from 0 to peak (0.05).

  floor     Gain the decay aims for at the end of the tone (0.001). An
            exponential curve can never reach zero, so it targets a tiny
            positive value and the oscillator stops there.

  duration  Seconds from tone start to oscillator stop. The decay segment
            fills whatever the attack leaves over.


The Shape
---------

  Gain
   peak ┐   ╱╲
        │  ╱  ╲
        │ ╱    ╲_
        │╱       ╲___
  floor └──────────────────┤ stop
        0  attack        duration

  0 <= t < attack:         gain = peak * t / attack
  attack <= t < duration:  gain = peak * (floor / peak) ^ ((t - attack) / (duration - attack))
  t >= duration:           0 (oscillator stopped)

The decay is exponential because loudness is perceived logarithmically: a
constant ratio per unit time sounds like an even fade, where a linear ramp
seems to hang and then drop off at the end.

If the duration is shorter than the attack, the attack is cut off and the
tone stops mid-ramp.
*/

/// Shape of a tone's amplitude over time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEnvelope {
    /// Gain at the end of the attack.
    pub peak: f32,
    /// Attack length in seconds.
    pub attack: f64,
    /// Gain the decay reaches at the end of the tone.
    pub floor: f32,
}

impl ToneEnvelope {
    pub const DEFAULT: ToneEnvelope = ToneEnvelope {
        peak: 0.3,
        attack: 0.05,
        floor: 0.001,
    };

    /// Gain `elapsed` seconds after the tone starts, for a tone lasting
    /// `duration` seconds.
    pub fn level_at(&self, elapsed: f64, duration: f64) -> f32 {
        match self.stage_at(elapsed, duration) {
            EnvelopeState::Pending | EnvelopeState::Finished => 0.0,
            EnvelopeState::Attack => {
                if self.attack <= 0.0 {
                    self.peak
                } else {
                    self.peak * (elapsed / self.attack) as f32
                }
            }
            EnvelopeState::Decay => {
                let progress = (elapsed - self.attack) / (duration - self.attack);
                let ratio = (self.floor / self.peak) as f64;
                self.peak * ratio.powf(progress) as f32
            }
        }
    }

    /// Which segment `elapsed` falls in.
    pub fn stage_at(&self, elapsed: f64, duration: f64) -> EnvelopeState {
        if elapsed < 0.0 {
            EnvelopeState::Pending
        } else if elapsed >= duration {
            EnvelopeState::Finished
        } else if elapsed < self.attack {
            EnvelopeState::Attack
        } else {
            EnvelopeState::Decay
        }
    }
}

impl Default for ToneEnvelope {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Segment of the tone envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Pending,  // Start time not reached yet
    Attack,   // Ramping 0 → peak
    Decay,    // Falling peak → floor
    Finished, // Oscillator stopped
}

/// Sample-clocked playback of a [`ToneEnvelope`].
///
/// Levels are computed from the elapsed sample count rather than by
/// accumulating increments, so the curve lands on its breakpoints exactly
/// regardless of block size.
#[derive(Debug, Clone)]
pub struct Envelope {
    shape: ToneEnvelope,
    sample_rate: f64,
    duration: f64,
    elapsed_samples: u64,
    level: f32,
}

impl Envelope {
    pub fn new(shape: ToneEnvelope, duration: f64, sample_rate: f32) -> Self {
        Self {
            shape,
            sample_rate: sample_rate as f64,
            duration,
            elapsed_samples: 0,
            level: 0.0,
        }
    }

    /// Advance by one sample and return the new level.
    pub fn next_sample(&mut self) -> f32 {
        let elapsed = self.elapsed_seconds();
        self.level = self.shape.level_at(elapsed, self.duration);
        self.elapsed_samples += 1;
        self.level
    }

    /// Render a block of gain values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// True until the tone's duration has been rendered.
    pub fn is_active(&self) -> bool {
        !matches!(self.state(), EnvelopeState::Finished)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.shape.stage_at(self.elapsed_seconds(), self.duration)
    }

    fn elapsed_seconds(&self) -> f64 {
        self.elapsed_samples as f64 / self.sample_rate
    }
}
