//! Lazily created audio context.
//!
//! Opening an output stream is slow and may prompt the platform for
//! permission, so the backend is created on first use and then kept for the
//! rest of the process. `LazyContext` owns that one handle.
//!
//! Creation happens at most once per `LazyContext`: the first successful
//! `get_or_create` stores the handle and every later call returns that same
//! handle without touching the factory. A failed creation stores nothing, so
//! the next call tries again. Access needs `&mut self`, so a single owner
//! holds the context; a multi-threaded host puts that owner behind its lock
//! and the one-time creation still holds.

use crate::playback::PlaybackError;

type Factory<B> = Box<dyn FnMut() -> Result<B, PlaybackError>>;

pub struct LazyContext<B> {
    handle: Option<B>,
    factory: Factory<B>,
}

impl<B> LazyContext<B> {
    /// Context that will call `factory` the first time it is needed.
    pub fn new(factory: impl FnMut() -> Result<B, PlaybackError> + 'static) -> Self {
        Self {
            handle: None,
            factory: Box::new(factory),
        }
    }

    /// Context around an already created handle.
    pub fn ready(handle: B) -> Self {
        Self {
            handle: Some(handle),
            factory: Box::new(|| {
                Err(PlaybackError::ContextUnavailable(
                    "context handle was released".to_string(),
                ))
            }),
        }
    }

    /// Return the handle, creating it on first use.
    pub fn get_or_create(&mut self) -> Result<&mut B, PlaybackError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                let handle = (self.factory)()?;
                log::debug!("audio context created");
                handle
            }
        };
        Ok(self.handle.insert(handle))
    }

    /// The handle, if it has been created.
    pub fn get(&self) -> Option<&B> {
        self.handle.as_ref()
    }

    pub fn is_created(&self) -> bool {
        self.handle.is_some()
    }
}
