// Purpose - audio backends that turn tone requests into sound

/// Default output device via cpal.
#[cfg(feature = "rtrb")]
pub mod cpal_backend;
/// In-memory rendering for tests and tooling.
pub mod offline;

#[cfg(feature = "rtrb")]
pub use cpal_backend::CpalBackend;
pub use offline::OfflineBackend;
