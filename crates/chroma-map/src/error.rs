//! Colormap error types.

use thiserror::Error;

/// Result type for colormap operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur when building, probing, or validating a
/// colormap.
#[derive(Debug, Error)]
pub enum MapError {
    /// Lookup index not present in the table.
    ///
    /// Does not occur for tables produced by the builders, which fill
    /// every key in range.
    #[error("index {index} not present in colormap")]
    IndexNotFound {
        /// The probed index.
        index: u8,
    },

    /// The key set is not contiguous from 0.
    #[error("colormap keys are not contiguous: missing index {missing}")]
    InvalidIndexRange {
        /// First absent index.
        missing: usize,
    },

    /// The largest key exceeds the byte index range.
    #[error("colormap max index {max} exceeds 255")]
    IndexOutOfBounds {
        /// The offending maximum key.
        max: usize,
    },

    /// `from_colors` was given no colors.
    #[error("color list is empty")]
    EmptyColorList,

    /// A gradient was given no control points.
    #[error("control point list is empty")]
    EmptyPointList,

    /// Control point indices are not strictly ascending.
    #[error("control point indices must be strictly ascending: {prev} followed by {next}")]
    InvalidPointOrder {
        /// The earlier index.
        prev: u8,
        /// The offending successor.
        next: u8,
    },

    /// A gradient does not span the full byte range.
    #[error("gradient must start at index 0 and end at 255, got {first}..={last}")]
    BadEndpoint {
        /// First control index supplied.
        first: u8,
        /// Last control index supplied.
        last: u8,
    },
}
