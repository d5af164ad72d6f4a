//! Low-level DSP primitives used by the tone voices.
//!
//! These components are allocation-free and realtime-safe, so they can live
//! inside voices rendered on the audio thread.

/// Linear-attack, exponential-decay tone envelope.
pub mod envelope;
/// Phase-accumulating sine oscillator.
pub mod oscillator;

pub use envelope::{EnvelopeState, ToneEnvelope};
