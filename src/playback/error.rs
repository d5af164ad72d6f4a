/// Errors raised by audio backends.
///
/// Note spellings never produce these; only opening or driving the output
/// does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host has no default output device
    NoOutputDevice,
    /// The output device's configuration could not be queried
    StreamConfig(String),
    /// The output stream could not be built
    BuildStream(String),
    /// The output stream refused to start or pause
    Stream(String),
    /// The request queue to the audio thread is full
    QueueFull,
    /// The audio context could not be created
    ContextUnavailable(String),
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackError::NoOutputDevice => write!(f, "no default output device available"),
            PlaybackError::StreamConfig(msg) => {
                write!(f, "failed to fetch default output config: {}", msg)
            }
            PlaybackError::BuildStream(msg) => write!(f, "failed to build output stream: {}", msg),
            PlaybackError::Stream(msg) => write!(f, "output stream error: {}", msg),
            PlaybackError::QueueFull => {
                write!(f, "tone request queue is full; audio thread is not draining it")
            }
            PlaybackError::ContextUnavailable(msg) => {
                write!(f, "audio context unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlaybackError {}
