//! Tone playback.
//!
//! Playing a note is split in two: planning turns spellings into explicit
//! [`ToneRequest`]s (pitch, frequency, start offset, duration, envelope), and
//! a [`ToneBackend`] sounds them. Planning is pure, so what a chord *would*
//! play can be checked without any audio device.
//!
//! ## Key Types
//! - [`TonePlayer`] - plays single notes and strummed stacks on a lazily opened backend
//! - [`ToneRequest`] - one scheduled sine tone
//! - [`PlaybackConfig`] - durations, strum spacing, envelope
//! - [`RecordingBackend`] - keeps requests instead of sounding them
//!
//! ## Example
//! ```rust
//! use tonal_keys::playback::{RecordingBackend, TonePlayer};
//!
//! let mut player = TonePlayer::with_backend(RecordingBackend::new());
//! player.play_tone_stack(&["C", "E", "G"]).unwrap();
//!
//! let delays: Vec<f64> = player
//!     .backend()
//!     .unwrap()
//!     .requests()
//!     .iter()
//!     .map(|r| r.start_delay)
//!     .collect();
//! assert_eq!(delays[0], 0.0);
//! assert!((delays[2] - 0.10).abs() < 1e-9);
//! ```

mod backend;
mod config;
mod error;
mod player;
mod request;

pub use backend::{RecordingBackend, ToneBackend};
pub use config::PlaybackConfig;
pub use error::PlaybackError;
pub use player::TonePlayer;
pub use request::{plan_single_tone, plan_tone_stack, ToneRequest};
