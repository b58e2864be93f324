//! Error types for magicchunk.
//!
//! Only faults live here. Expected pipeline outcomes such as an empty file or
//! a suffix that disagrees with the content are reported through
//! [`crate::ProcessOutcome`], never through [`Error`].

use thiserror::Error;

/// Result type alias for magicchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, registering or configuring.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while reading the byte source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A magic pattern could not be parsed.
    #[error("invalid magic pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern text as given.
        pattern: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A type tag is empty or contains characters other than ASCII alphanumerics.
    #[error("invalid type tag {tag:?}")]
    InvalidTag {
        /// The tag as given.
        tag: String,
    },
}
