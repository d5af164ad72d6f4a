use super::{error::PlaybackError, request::ToneRequest};

/// Anything that can sound scheduled tones.
///
/// Mirrors the small slice of an audio context the player needs: a
/// suspended/running state and a way to hand over tone requests.
pub trait ToneBackend {
    /// True while the output is paused (e.g. before the first user gesture).
    fn is_suspended(&self) -> bool;

    /// Start or restart output.
    fn resume(&mut self) -> Result<(), PlaybackError>;

    /// Queue one tone. Returns as soon as the request is accepted.
    fn schedule(&mut self, request: ToneRequest) -> Result<(), PlaybackError>;
}

/// Allow boxed backends to be used as backends (for dynamic dispatch)
impl<B: ToneBackend + ?Sized> ToneBackend for Box<B> {
    fn is_suspended(&self) -> bool {
        (**self).is_suspended()
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        (**self).resume()
    }

    fn schedule(&mut self, request: ToneRequest) -> Result<(), PlaybackError> {
        (**self).schedule(request)
    }
}

/// Backend that keeps every request instead of sounding it.
///
/// Lets callers assert on what would have been played.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    requests: Vec<ToneRequest>,
    suspended: bool,
    resumes: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out suspended, like a context created before any user gesture.
    pub fn suspended() -> Self {
        Self {
            suspended: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> &[ToneRequest] {
        &self.requests
    }

    /// How many times `resume` was called.
    pub fn resumes(&self) -> usize {
        self.resumes
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl ToneBackend for RecordingBackend {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        self.suspended = false;
        self.resumes += 1;
        Ok(())
    }

    fn schedule(&mut self, request: ToneRequest) -> Result<(), PlaybackError> {
        self.requests.push(request);
        Ok(())
    }
}
