pub mod context; // Lazily created audio context
pub mod dsp;
pub mod io; // Audio backends
pub mod keyboard; // Two-octave keyboard model
pub mod pitch; // Note spelling -> pitch value, pitch class, frequency
pub mod playback; // Tone planning and scheduling
pub mod synth; // Voices and mixing
pub mod theory; // Scale and chord payloads, chord loop

pub const MAX_BLOCK_SIZE: usize = 2048;
/// Capacity of the request queue feeding the audio thread.
pub const REQUEST_QUEUE_SIZE: usize = 256;
