//! Untagged color value types.
//!
//! This module provides fixed-arity color tuples of 1, 3, or 4
//! components:
//!
//! - [`Color1`] - single component (index, gray, or alpha)
//! - [`Color3`] - three components (rgb, bgr, ...)
//! - [`Color4`] - four components (rgba, argb, ...)
//!
//! # Design
//!
//! Colors carry no embedded channel meaning. A `Color3<u8>` may hold an
//! RGB triple or a BGR triple; only the [`PixelFormat`] passed alongside
//! it decides. Every API that interprets channels therefore takes an
//! explicit format parameter and never infers meaning from the value's
//! shape beyond its arity.
//!
//! All components of a value share one representation - all bytes or all
//! unit floats (see [`Component`]). Values are immutable; every "modify"
//! operation returns a new value.
//!
//! ```
//! use chroma_core::Color3;
//!
//! let byte_color: Color3<u8> = Color3::new(255, 128, 0);
//! let float_color: Color3<f32> = byte_color.convert();
//! assert!((float_color.0[0] - 1.0).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! This module has no external dependencies.
//!
//! # Used By
//!
//! - `chroma-blend` - blend results are reassembled as color values
//! - `chroma-map` - colormap tables store `Color3<u8>` entries
//!
//! [`PixelFormat`]: crate::PixelFormat

use crate::component::Component;

// ============================================================================
// Color1
// ============================================================================

/// A single-component color value.
///
/// Holds one component - an index, a gray level, or a bare alpha,
/// depending on the paired [`PixelFormat`](crate::PixelFormat).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color1<T: Component>(pub [T; 1]);

impl<T: Component> Color1<T> {
    /// Create a new single-component color.
    #[inline]
    pub const fn new(v: T) -> Self {
        Self([v])
    }

    /// The component value.
    #[inline]
    pub fn value(self) -> T {
        self.0[0]
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 1] {
        self.0
    }

    /// Components as normalized floats.
    #[inline]
    pub fn to_unit_array(self) -> [f32; 1] {
        [self.0[0].to_unit()]
    }

    /// Build from normalized floats (round-to-nearest for bytes).
    #[inline]
    pub fn from_unit_array(arr: [f32; 1]) -> Self {
        Self([T::from_unit(arr[0])])
    }

    /// Convert to the other component representation.
    #[inline]
    pub fn convert<U: Component>(self) -> Color1<U> {
        Color1([U::from_unit(self.0[0].to_unit())])
    }

    /// Clamp the component to its valid range.
    #[inline]
    pub fn clamped(self) -> Self {
        Self([self.0[0].clamped()])
    }

    /// Componentwise linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, t: f32, other: Self) -> Self {
        Self([T::lerp(self.0[0], other.0[0], t)])
    }
}

impl Color1<u8> {
    /// Hex string of the form `#vv` (lowercase).
    pub fn hex_string(self) -> String {
        format!("#{:02x}", self.0[0])
    }
}

// ============================================================================
// Color3
// ============================================================================

/// A three-component color value.
///
/// Component order is declared by the paired
/// [`PixelFormat`](crate::PixelFormat) (`rgb` or `bgr`), never by the
/// value itself.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color3<T: Component>(pub [T; 3]);

impl<T: Component> Color3<T> {
    /// Create a new three-component color.
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self([c0, c1, c2])
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [T; 3]) -> Self {
        Self(arr)
    }

    /// Create a color with all three components equal.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self([v, v, v])
    }

    /// Black (all components zero).
    #[inline]
    pub fn black() -> Self {
        Self::splat(T::zero())
    }

    /// White (all components at full intensity).
    #[inline]
    pub fn white() -> Self {
        Self::splat(T::one())
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.0
    }

    /// Components as normalized floats.
    #[inline]
    pub fn to_unit_array(self) -> [f32; 3] {
        [self.0[0].to_unit(), self.0[1].to_unit(), self.0[2].to_unit()]
    }

    /// Build from normalized floats (round-to-nearest for bytes).
    #[inline]
    pub fn from_unit_array(arr: [f32; 3]) -> Self {
        Self([T::from_unit(arr[0]), T::from_unit(arr[1]), T::from_unit(arr[2])])
    }

    /// Convert to the other component representation.
    #[inline]
    pub fn convert<U: Component>(self) -> Color3<U> {
        Color3::from_unit_array(self.to_unit_array())
    }

    /// Apply a function to each component.
    #[inline]
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }

    /// Clamp each component to its valid range.
    #[inline]
    pub fn clamped(self) -> Self {
        self.map(|c| c.clamped())
    }

    /// Componentwise linear interpolation towards `other`.
    ///
    /// Returns `self` at `t = 0.0` and `other` at `t = 1.0`; the math
    /// runs in unit-float space with byte results rounded to nearest.
    #[inline]
    pub fn lerp(self, t: f32, other: Self) -> Self {
        Self([
            T::lerp(self.0[0], other.0[0], t),
            T::lerp(self.0[1], other.0[1], t),
            T::lerp(self.0[2], other.0[2], t),
        ])
    }
}

impl Color3<u8> {
    /// Hex string of the form `#rrggbb` (lowercase).
    ///
    /// Assumes the components are in RGB order.
    pub fn hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    /// CSS string of the form `rgb(r, g, b)`.
    ///
    /// Assumes the components are in RGB order.
    pub fn css_string(self) -> String {
        format!("rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

// ============================================================================
// Color4
// ============================================================================

/// A four-component color value.
///
/// Component order (and which position carries alpha) is declared by the
/// paired [`PixelFormat`](crate::PixelFormat).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color4<T: Component>(pub [T; 4]);

impl<T: Component> Color4<T> {
    /// Create a new four-component color.
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T, c3: T) -> Self {
        Self([c0, c1, c2, c3])
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [T; 4]) -> Self {
        Self(arr)
    }

    /// Create from a three-component color plus a trailing component.
    ///
    /// Matches `rgba`-style layouts where alpha comes last.
    #[inline]
    pub fn with_alpha(color: Color3<T>, alpha: T) -> Self {
        Self([color.0[0], color.0[1], color.0[2], alpha])
    }

    /// Create from a three-component color with a full-intensity
    /// trailing component.
    #[inline]
    pub fn opaque(color: Color3<T>) -> Self {
        Self::with_alpha(color, T::one())
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        self.0
    }

    /// Components as normalized floats.
    #[inline]
    pub fn to_unit_array(self) -> [f32; 4] {
        [
            self.0[0].to_unit(),
            self.0[1].to_unit(),
            self.0[2].to_unit(),
            self.0[3].to_unit(),
        ]
    }

    /// Build from normalized floats (round-to-nearest for bytes).
    #[inline]
    pub fn from_unit_array(arr: [f32; 4]) -> Self {
        Self([
            T::from_unit(arr[0]),
            T::from_unit(arr[1]),
            T::from_unit(arr[2]),
            T::from_unit(arr[3]),
        ])
    }

    /// Convert to the other component representation.
    #[inline]
    pub fn convert<U: Component>(self) -> Color4<U> {
        Color4::from_unit_array(self.to_unit_array())
    }

    /// Apply a function to each component.
    #[inline]
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2]), f(self.0[3])])
    }

    /// Clamp each component to its valid range.
    #[inline]
    pub fn clamped(self) -> Self {
        self.map(|c| c.clamped())
    }

    /// Componentwise linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, t: f32, other: Self) -> Self {
        Self([
            T::lerp(self.0[0], other.0[0], t),
            T::lerp(self.0[1], other.0[1], t),
            T::lerp(self.0[2], other.0[2], t),
            T::lerp(self.0[3], other.0[3], t),
        ])
    }
}

impl Color4<u8> {
    /// Hex string of the form `#rrggbbaa` (lowercase).
    ///
    /// Assumes the components are in RGBA order.
    pub fn hex_string(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }

    /// CSS string of the form `rgba(r, g, b, a)` with alpha in [0, 1].
    ///
    /// Assumes the components are in RGBA order.
    pub fn css_string(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0[0],
            self.0[1],
            self.0[2],
            self.0[3] as f32 / 255.0
        )
    }
}
