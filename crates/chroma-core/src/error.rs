//! Error types for chroma-core operations.
//!
//! Failures here are contract violations detected at the call that made
//! them: a color paired with a format of different arity, a channel
//! requested from a format that lacks it, or a codec read past the end
//! of a buffer. None are retried - these are pure deterministic
//! computations - and each message names the precondition that failed.

use crate::format::{Channel, PixelFormat};
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core color operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A color's component count does not match its declared format.
    ///
    /// Colors are untagged tuples; wherever one is paired with a
    /// [`PixelFormat`] the arities must agree. Mismatches are rejected,
    /// never silently coerced.
    #[error("color has {got} components but format {format} has {expected} channels")]
    ArityMismatch {
        /// The declared format.
        format: PixelFormat,
        /// The format's channel count.
        expected: usize,
        /// The color's component count.
        got: usize,
    },

    /// The format does not carry the requested channel.
    ///
    /// Returned by channel lookups, e.g. requesting alpha from `rgb`.
    #[error("format {format} has no {channel} channel")]
    UnsupportedChannel {
        /// The format that was queried.
        format: PixelFormat,
        /// The channel it lacks.
        channel: Channel,
    },

    /// A codec read ran past the end of the buffer.
    #[error("need {needed} bytes but only {available} available")]
    TruncatedBuffer {
        /// Bytes the read required.
        needed: usize,
        /// Bytes remaining from the read offset.
        available: usize,
    },
}

impl Error {
    /// Creates an [`Error::ArityMismatch`] for a color of `got`
    /// components paired with `format`.
    #[inline]
    pub fn arity_mismatch(format: PixelFormat, got: usize) -> Self {
        Self::ArityMismatch {
            format,
            expected: format.channel_count(),
            got,
        }
    }
}
