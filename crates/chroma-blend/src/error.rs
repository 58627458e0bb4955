//! Blend error types.

use crate::mode::BlendFactor;
use thiserror::Error;

/// Result type for blend operations.
pub type BlendResult<T> = Result<T, BlendError>;

/// Errors that can occur when building or evaluating a blend mode.
#[derive(Debug, Error)]
pub enum BlendError {
    /// A selected factor references a constant color/alpha that was not
    /// supplied.
    ///
    /// Caught when the [`BlendMode`](crate::BlendMode) is constructed,
    /// not deep inside the math.
    #[error("blend factor {factor} requires a constant that was not supplied")]
    MissingConstant {
        /// The factor that needs the constant.
        factor: BlendFactor,
    },

    /// A color/format pairing violated a core contract (arity mismatch).
    #[error(transparent)]
    Core(#[from] chroma_core::Error),
}
