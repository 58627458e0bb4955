//! # chroma-map
//!
//! Indexed colormaps with piecewise-linear gradient builders.
//!
//! A [`Colormap`] maps byte indices to colors for indexed and
//! false-color rendering. Tables are built once - from an explicit
//! color list or from gradient control points - and are immutable
//! afterwards, so completed maps can be shared for lock-free read-only
//! lookup.
//!
//! # Builders
//!
//! - [`Colormap::from_colors`] - one entry per listed color
//! - [`Colormap::gradient_two`] / [`Colormap::gradient_three`] -
//!   full-range gradients from 2 or 3 anchors
//! - [`Colormap::gradient_points`] - arbitrary ascending control points
//!
//! All builders accept [`GradientSpace::Hsl`] to interpret (and, for
//! gradients, interpolate) the input colors as HSL; stored tables are
//! always RGB bytes.
//!
//! # Usage
//!
//! ```rust
//! use chroma_map::{Colormap, GradientSpace};
//!
//! let heat = Colormap::gradient_three(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//!     GradientSpace::Rgb,
//! )?;
//! assert_eq!(heat.validate()?, 255);
//! assert_eq!(heat.lookup(127)?.to_array(), [255, 0, 0]);
//! # Ok::<(), chroma_map::MapError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - color values stored in the table
//! - [`chroma-space`] - the HSL detour
//! - [`thiserror`] - error handling
//! - [`tracing`] - builder-level debug logging
//!
//! # Feature Flags
//!
//! - `serde` - serialize/deserialize colormaps (validate after
//!   deserializing)
//!
//! [`chroma-core`]: chroma_core
//! [`chroma-space`]: chroma_space

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colormap;
mod error;
mod gradient;

pub use colormap::{Colormap, MapKind};
pub use error::{MapError, MapResult};
pub use gradient::GradientSpace;
