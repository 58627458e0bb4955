//! Piecewise-linear gradient builders.
//!
//! Gradients are defined by control points: (byte index, float color)
//! anchors in ascending index order, spanning 0..=255. Every integer
//! index between two consecutive anchors is filled by linear
//! interpolation, giving a dense 256-entry [`Colormap`].
//!
//! In [`GradientSpace::Hsl`] mode the control colors are HSL triples;
//! interpolation runs in HSL and each filled entry converts to RGB
//! before byte storage, so hue sweeps stay on the hue wheel instead of
//! cutting across RGB space.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::Color3;
//! use chroma_map::{Colormap, GradientSpace};
//!
//! let map = Colormap::gradient_two(
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//!     GradientSpace::Rgb,
//! )
//! .unwrap();
//! assert_eq!(map.lookup(170).unwrap(), Color3::new(85, 0, 170));
//! ```

use crate::colormap::{Colormap, store_entry};
use crate::error::{MapError, MapResult};
use std::collections::HashMap;
use tracing::debug;

/// Space the gradient's control colors are given in - and interpolated
/// through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientSpace {
    /// Control colors are RGB; interpolate componentwise in RGB.
    #[default]
    Rgb,
    /// Control colors are HSL; interpolate in HSL, store as RGB.
    Hsl,
}

impl Colormap {
    /// Two-color gradient across the full byte range.
    ///
    /// Shorthand for [`Colormap::gradient_points`] with anchors at 0
    /// and 255.
    pub fn gradient_two(
        c1: [f32; 3],
        c2: [f32; 3],
        space: GradientSpace,
    ) -> MapResult<Self> {
        Self::gradient_points(&[(0, c1), (255, c2)], space)
    }

    /// Three-color gradient with the middle anchor at index 127.
    pub fn gradient_three(
        c1: [f32; 3],
        c2: [f32; 3],
        c3: [f32; 3],
        space: GradientSpace,
    ) -> MapResult<Self> {
        Self::gradient_points(&[(0, c1), (127, c2), (255, c3)], space)
    }

    /// Builds a dense colormap from ascending control points.
    ///
    /// For each consecutive pair `(i, ci)`, `(j, cj)` every integer key
    /// in `i..=j` is filled with `lerp(ci, (k - i) / (j - i), cj)`;
    /// shared boundary indices are written by both segments, which
    /// agree there, so the overlap is idempotent. Interpolation runs in
    /// f32 and components convert to bytes only at storage time
    /// (round-to-nearest, clamped).
    ///
    /// # Errors
    ///
    /// - [`MapError::EmptyPointList`] for an empty anchor list
    /// - [`MapError::BadEndpoint`] unless the anchors span exactly
    ///   0..=255
    /// - [`MapError::InvalidPointOrder`] unless indices strictly ascend
    pub fn gradient_points(
        points: &[(u8, [f32; 3])],
        space: GradientSpace,
    ) -> MapResult<Self> {
        debug!(count = points.len(), ?space, "building gradient colormap");
        let Some(&(first, _)) = points.first() else {
            return Err(MapError::EmptyPointList);
        };
        let (last, _) = points[points.len() - 1];
        if first != 0 || last != 255 {
            return Err(MapError::BadEndpoint { first, last });
        }
        for pair in points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(MapError::InvalidPointOrder {
                    prev: pair[0].0,
                    next: pair[1].0,
                });
            }
        }

        let mut table = HashMap::with_capacity(256);
        for pair in points.windows(2) {
            let (i, ci) = pair[0];
            let (j, cj) = pair[1];
            let span = (j - i) as f32;
            for k in i..=j {
                let x = (k - i) as f32 / span;
                table.insert(k as usize, store_entry(lerp3(ci, x, cj), space));
            }
        }
        Ok(Self::from_parts(table))
    }
}

/// Componentwise `a + (b - a) * x`.
fn lerp3(a: [f32; 3], x: f32, b: [f32; 3]) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * x,
        a[1] + (b[1] - a[1]) * x,
        a[2] + (b[2] - a[2]) * x,
    ]
}
