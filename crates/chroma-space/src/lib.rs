//! # chroma-space
//!
//! Color space conversion between RGB and HSL.
//!
//! Both directions operate on normalized 3-component float colors and
//! are pure, total functions - no input in the documented [0, 1] domain
//! fails. Away from zero saturation they are mutual inverses to within
//! 1e-6.
//!
//! # Usage
//!
//! ```rust
//! use chroma_space::{hsl_to_rgb, rgb_to_hsl};
//!
//! let hsl = rgb_to_hsl([1.0, 0.0, 0.0]);
//! assert_eq!(hsl, [0.0, 1.0, 0.5]);
//!
//! let rgb = hsl_to_rgb(hsl);
//! for (got, want) in rgb.iter().zip(&[1.0, 0.0, 0.0]) {
//!     assert!((got - want).abs() < 1e-6);
//! }
//! ```
//!
//! # Achromatic colors
//!
//! Grays carry no hue. [`rgb_to_hsl`] reports hue 0.0 (and saturation
//! 0.0) for them by convention instead of a sentinel, so round-trips
//! through an achromatic color do not preserve an original hue.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - color value types for the typed wrappers
//!
//! # Used By
//!
//! - `chroma-map` - HSL-mode gradient construction
//!
//! [`chroma-core`]: chroma_core

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hsl;

pub use hsl::{hsl_to_rgb, rgb_to_hsl};

use chroma_core::Color3;

/// [`rgb_to_hsl`] over a typed float color.
#[inline]
pub fn rgb_to_hsl_color(rgb: Color3<f32>) -> Color3<f32> {
    Color3(rgb_to_hsl(rgb.0))
}

/// [`hsl_to_rgb`] over a typed float color.
#[inline]
pub fn hsl_to_rgb_color(hsl: Color3<f32>) -> Color3<f32> {
    Color3(hsl_to_rgb(hsl.0))
}
