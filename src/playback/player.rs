use crate::context::LazyContext;

use super::{
    backend::ToneBackend,
    config::PlaybackConfig,
    error::PlaybackError,
    request::{plan_single_tone, plan_tone_stack, ToneRequest},
};

/// Plays notes and strummed chords on a lazily created backend.
///
/// Every call is fire-and-schedule: it returns once the requests are
/// queued, without waiting for them to sound, and nothing can cancel a tone
/// once queued. Spacing successive chords apart is up to the caller.
pub struct TonePlayer<B: ToneBackend> {
    context: LazyContext<B>,
    config: PlaybackConfig,
}

impl<B: ToneBackend> TonePlayer<B> {
    /// Player whose backend is opened by `factory` on first playback.
    pub fn new(factory: impl FnMut() -> Result<B, PlaybackError> + 'static) -> Self {
        Self {
            context: LazyContext::new(factory),
            config: PlaybackConfig::default(),
        }
    }

    /// Player around an already open backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            context: LazyContext::ready(backend),
            config: PlaybackConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlaybackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Play one note with the configured single-note duration, right away.
    pub fn play_note(&mut self, spelling: &str) -> Result<(), PlaybackError> {
        self.play_single_tone(spelling, self.config.note_duration, 0.0)
    }

    /// Play one note for `duration` seconds, starting `start_delay` seconds
    /// from now.
    pub fn play_single_tone(
        &mut self,
        spelling: &str,
        duration: f64,
        start_delay: f64,
    ) -> Result<(), PlaybackError> {
        let request = plan_single_tone(spelling, duration, start_delay, &self.config);
        self.dispatch(std::iter::once(request))
    }

    /// Play a chord as a strum: note `i` starts `i * strum` seconds in.
    pub fn play_tone_stack<S: AsRef<str>>(&mut self, spellings: &[S]) -> Result<(), PlaybackError> {
        let requests = plan_tone_stack(spellings, &self.config);
        self.dispatch(requests)
    }

    /// The backend, opening it if this is the first use.
    pub fn backend_mut(&mut self) -> Result<&mut B, PlaybackError> {
        self.context.get_or_create()
    }

    /// The backend, if it has been opened.
    pub fn backend(&self) -> Option<&B> {
        self.context.get()
    }

    fn dispatch(
        &mut self,
        requests: impl IntoIterator<Item = ToneRequest>,
    ) -> Result<(), PlaybackError> {
        let backend = self.context.get_or_create()?;

        for request in requests {
            if backend.is_suspended() {
                backend.resume()?;
            }
            log::trace!(
                "tone {} ({:.2} Hz) at +{:.3}s for {:.2}s",
                request.pitch_value,
                request.frequency,
                request.start_delay,
                request.duration
            );
            backend.schedule(request)?;
        }

        Ok(())
    }
}
