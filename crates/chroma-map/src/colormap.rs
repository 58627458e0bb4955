//! Indexed colormap type.
//!
//! A [`Colormap`] is a dense lookup table from byte index to color,
//! used for indexed and false-color rendering. Construction happens in
//! one pass (see the builders in [`gradient`](crate::gradient) and
//! [`Colormap::from_colors`]); afterwards the table is immutable and can
//! be shared across threads for read-only lookup without coordination.
//!
//! Builder-produced tables always hold every key in their range. Tables
//! assembled by hand or deserialized may not; [`Colormap::validate`]
//! recomputes the key set and reports gaps or out-of-range keys as
//! typed errors.

use crate::error::{MapError, MapResult};
use crate::gradient::GradientSpace;
use chroma_core::Color3;
use chroma_space::hsl_to_rgb;
use std::collections::HashMap;
use tracing::debug;

/// Declared value kind of a colormap.
///
/// A tag describing what the stored entries represent; the builders in
/// this crate always produce [`MapKind::Rgb`] tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapKind {
    /// RGB entries.
    #[default]
    Rgb,
    /// RGBA entries.
    Rgba,
    /// Gray entries.
    Gray,
}

/// A dense index -> color table.
///
/// Keys are stored wider than `u8` so that hand-built or deserialized
/// tables can hold out-of-range indices long enough for
/// [`Colormap::validate`] to report them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colormap {
    kind: MapKind,
    table: HashMap<usize, Color3<u8>>,
}

impl Colormap {
    /// Builds a colormap assigning `colors` to consecutive indices
    /// `0..len-1`.
    ///
    /// In [`GradientSpace::Hsl`] mode every input color is converted to
    /// RGB before storage; the stored table is always RGB-typed.
    ///
    /// Oversized inputs (more than 256 colors) are deliberately not
    /// rejected here - construction fills every key in range and
    /// [`Colormap::validate`] reports the overflow.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyColorList`] when `colors` is empty.
    pub fn from_colors(colors: &[[f32; 3]], space: GradientSpace) -> MapResult<Self> {
        debug!(count = colors.len(), ?space, "building colormap from color list");
        if colors.is_empty() {
            return Err(MapError::EmptyColorList);
        }
        let table = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| (i, store_entry(color, space)))
            .collect();
        Ok(Self {
            kind: MapKind::Rgb,
            table,
        })
    }

    /// Wraps a hand-built table without checking it.
    ///
    /// The escape hatch for deserialized or manually assembled tables;
    /// run [`Colormap::validate`] before trusting lookups on the
    /// result.
    pub fn from_table(kind: MapKind, table: HashMap<usize, Color3<u8>>) -> Self {
        Self { kind, table }
    }

    /// The declared value kind.
    #[inline]
    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// O(1) lookup of the color stored at `index`.
    ///
    /// # Errors
    ///
    /// [`MapError::IndexNotFound`] when the key is absent. This should
    /// not occur for a validly constructed table.
    pub fn lookup(&self, index: u8) -> MapResult<Color3<u8>> {
        self.table
            .get(&(index as usize))
            .copied()
            .ok_or(MapError::IndexNotFound { index })
    }

    /// Checks that the key set is exactly `0..=max` with `max <= 255`,
    /// returning `max`.
    ///
    /// An `O(n log n)` diagnostic pass - the builders cannot produce a
    /// table that fails it, but hand-built and deserialized tables can.
    ///
    /// # Errors
    ///
    /// - [`MapError::InvalidIndexRange`] on gaps (or an empty table)
    /// - [`MapError::IndexOutOfBounds`] when the largest key exceeds 255
    pub fn validate(&self) -> MapResult<usize> {
        let mut keys: Vec<usize> = self.table.keys().copied().collect();
        keys.sort_unstable();

        let mut max = None;
        for (expected, &key) in keys.iter().enumerate() {
            if key != expected {
                return Err(MapError::InvalidIndexRange { missing: expected });
            }
            max = Some(key);
        }
        let max = max.ok_or(MapError::InvalidIndexRange { missing: 0 })?;
        if max > 255 {
            return Err(MapError::IndexOutOfBounds { max });
        }
        Ok(max)
    }

    pub(crate) fn from_parts(table: HashMap<usize, Color3<u8>>) -> Self {
        Self {
            kind: MapKind::Rgb,
            table,
        }
    }
}

/// Converts a float color for storage: HSL inputs detour through RGB,
/// then components round to bytes.
pub(crate) fn store_entry(color: [f32; 3], space: GradientSpace) -> Color3<u8> {
    let rgb = match space {
        GradientSpace::Rgb => color,
        GradientSpace::Hsl => hsl_to_rgb(color),
    };
    Color3::from_unit_array(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_colors_assigns_consecutive_indices() {
        let colors = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let map = Colormap::from_colors(&colors, GradientSpace::Rgb).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.lookup(0).unwrap(), Color3::new(255, 0, 0));
        assert_eq!(map.lookup(1).unwrap(), Color3::new(0, 255, 0));
        assert_eq!(map.lookup(2).unwrap(), Color3::new(0, 0, 255));
        assert_eq!(map.validate().unwrap(), 2);
    }

    #[test]
    fn test_from_colors_hsl_converts_before_storage() {
        // Pure red as HSL.
        let map = Colormap::from_colors(&[[0.0, 1.0, 0.5]], GradientSpace::Hsl).unwrap();
        assert_eq!(map.lookup(0).unwrap(), Color3::new(255, 0, 0));
        assert_eq!(map.kind(), MapKind::Rgb);
    }

    #[test]
    fn test_from_colors_empty_rejected() {
        assert!(matches!(
            Colormap::from_colors(&[], GradientSpace::Rgb),
            Err(MapError::EmptyColorList)
        ));
    }

    #[test]
    fn test_lookup_miss() {
        let map = Colormap::from_colors(&[[0.0; 3]], GradientSpace::Rgb).unwrap();
        assert!(matches!(
            map.lookup(7),
            Err(MapError::IndexNotFound { index: 7 })
        ));
    }

    #[test]
    fn test_validate_detects_gap() {
        let mut table = HashMap::new();
        table.insert(0, Color3::new(0, 0, 0));
        table.insert(2, Color3::new(255, 255, 255));
        let map = Colormap::from_table(MapKind::Rgb, table);
        assert!(matches!(
            map.validate(),
            Err(MapError::InvalidIndexRange { missing: 1 })
        ));
    }

    #[test]
    fn test_validate_detects_out_of_bounds() {
        let mut table = HashMap::new();
        for i in 0..=256 {
            table.insert(i, Color3::new(0, 0, 0));
        }
        let map = Colormap::from_table(MapKind::Rgb, table);
        assert!(matches!(
            map.validate(),
            Err(MapError::IndexOutOfBounds { max: 256 })
        ));
    }

    #[test]
    fn test_validate_empty_table() {
        let map = Colormap::from_table(MapKind::Rgb, HashMap::new());
        assert!(matches!(
            map.validate(),
            Err(MapError::InvalidIndexRange { missing: 0 })
        ));
    }

    #[test]
    fn test_oversized_from_colors_caught_by_validate() {
        let colors = vec![[0.5, 0.5, 0.5]; 300];
        let map = Colormap::from_colors(&colors, GradientSpace::Rgb).unwrap();
        assert!(matches!(
            map.validate(),
            Err(MapError::IndexOutOfBounds { max: 299 })
        ));
    }
}
