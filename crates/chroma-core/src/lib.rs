//! # chroma-core
//!
//! Core types for immutable color data.
//!
//! This crate provides the foundational types used throughout the
//! chroma-rs workspace:
//!
//! - [`Component`] - byte (0-255) and unit-float (0.0-1.0) components
//!   with defined conversions between the two
//! - [`Color1`], [`Color3`], [`Color4`] - fixed-arity, untagged color
//!   tuples
//! - [`PixelFormat`], [`Channel`] - the closed registry of channel
//!   layouts that gives untagged tuples their meaning
//! - [`codec`] - fixed-width binary append/read of byte colors
//!
//! ## Design Philosophy
//!
//! Color values carry no embedded channel tag; a `Color3<u8>` is three
//! bytes whose meaning comes from the [`PixelFormat`] passed next to it.
//! APIs that interpret channels always take the format explicitly and
//! reject arity mismatches as typed errors rather than coercing.
//!
//! All values are immutable - every "modify" operation returns a new
//! value - so completed colors and tables can be shared freely across
//! threads without coordination.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of chroma-rs and has no internal
//! dependencies. The other workspace crates build on it:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-space (RGB <-> HSL conversion)
//!    +-- chroma-blend (blend-equation evaluator)
//!    +-- chroma-map (indexed colormaps)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for color values and formats

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod color;
pub mod component;
pub mod error;
pub mod format;

// Re-exports for convenience
pub use color::{Color1, Color3, Color4};
pub use component::Component;
pub use error::{Error, Result};
pub use format::{ALL_FORMATS, Channel, PixelFormat};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use chroma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color1, Color3, Color4};
    pub use crate::component::Component;
    pub use crate::error::{Error, Result};
    pub use crate::format::{ALL_FORMATS, Channel, PixelFormat};
}
