//! Error types for script filter serialization and output.
//!
//! The failure surface of this crate is deliberately small. Documents built
//! through the public API only contain JSON-representable values (strings,
//! bools, string maps, and nested entities of the same kind), so encoding
//! cannot fail in practice. The one real-world failure mode is the final
//! write to the output sink, e.g. a closed stdout pipe.

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while serializing or
/// writing a script filter document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing serialized output to the sink.
    #[error("write output: {0}")]
    Io(String),

    /// JSON encoding error.
    ///
    /// Unreachable for documents built through this crate's own
    /// construction API; kept so encoder errors propagate instead of
    /// panicking.
    #[error("encode json: {0}")]
    Json(String),
}

impl Error {
    /// Creates an I/O error for output write failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alfred_script_filter::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert!(err.to_string().contains("broken pipe"));
    /// ```
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a JSON encoding error.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
