use serde::ser::StdError;
use thiserror::Error;

/// Errors raised when interacting with a [`Secret`](crate::Secret).
#[derive(Debug, Error)]
pub enum Error {
    /// The secret was read or written before anything sealed a value into it.
    ///
    /// This is a construction bug in the calling code, never a consequence of
    /// external input, which is why [`get`](crate::Secret::get) and
    /// [`set`](crate::Secret::set) turn it into a panic.
    #[error("secret used before it was initialized")]
    Uninitialized,
    /// A structure-decoding pipeline could not place a source value into its
    /// target field.
    #[error(transparent)]
    Decode(Box<dyn StdError + Send + Sync>),
}
