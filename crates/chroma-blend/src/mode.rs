//! Blend mode configuration.
//!
//! A [`BlendMode`] bundles the full blend state of an OpenGL-style
//! separate blend: one equation and factor pair for the color channels,
//! one for alpha, plus the optional constant color/alpha some factors
//! reference.
//!
//! Constants are optional by design. [`BlendMode::new`] rejects a mode
//! whose factors reference an absent constant, so the evaluator never has
//! to deal with a half-configured mode.

use crate::error::{BlendError, BlendResult};
use std::fmt;

/// Arithmetic combinator applied to the pre-scaled source and
/// destination terms.
///
/// `Min` and `Max` apply componentwise to the unscaled inputs and ignore
/// the blend factors entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BlendEquation {
    /// `src * sf + dst * df`
    #[default]
    Add,
    /// `src * sf - dst * df`
    Subtract,
    /// `dst * df - src * sf`
    ReverseSubtract,
    /// Componentwise minimum (factors ignored).
    Min,
    /// Componentwise maximum (factors ignored).
    Max,
}

/// Rule producing the scale applied to a color or alpha term before
/// combination.
///
/// Resolution depends on the current source/destination colors and
/// alphas and, for the `Const*` variants, on the constant supplied with
/// the [`BlendMode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendFactor {
    /// `0` - collapses the term to the additive identity without
    /// evaluating anything else.
    Zero,
    /// `1` - leaves the term unscaled.
    One,
    /// Source color, per channel.
    SrcColor,
    /// `1 - source color`, per channel.
    OneMinusSrcColor,
    /// Destination color, per channel.
    DstColor,
    /// `1 - destination color`, per channel.
    OneMinusDstColor,
    /// The constant color.
    ConstColor,
    /// `1 - constant color`.
    OneMinusConstColor,
    /// Source alpha.
    SrcAlpha,
    /// `1 - source alpha`.
    OneMinusSrcAlpha,
    /// Destination alpha.
    DstAlpha,
    /// `1 - destination alpha`.
    OneMinusDstAlpha,
    /// The constant alpha.
    ConstAlpha,
    /// `1 - constant alpha`.
    OneMinusConstAlpha,
}

impl BlendFactor {
    /// Whether resolving this factor in the color pipeline reads the
    /// constant color.
    #[inline]
    pub const fn needs_constant_color(self) -> bool {
        matches!(self, Self::ConstColor | Self::OneMinusConstColor)
    }

    /// Whether resolving this factor reads the constant alpha.
    #[inline]
    pub const fn needs_constant_alpha(self) -> bool {
        matches!(self, Self::ConstAlpha | Self::OneMinusConstAlpha)
    }

    /// Whether this factor references either constant.
    #[inline]
    pub const fn needs_constant(self) -> bool {
        self.needs_constant_color() || self.needs_constant_alpha()
    }
}

impl fmt::Display for BlendFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::SrcColor => "src_color",
            Self::OneMinusSrcColor => "one_minus_src_color",
            Self::DstColor => "dst_color",
            Self::OneMinusDstColor => "one_minus_dst_color",
            Self::ConstColor => "constant_color",
            Self::OneMinusConstColor => "one_minus_constant_color",
            Self::SrcAlpha => "src_alpha",
            Self::OneMinusSrcAlpha => "one_minus_src_alpha",
            Self::DstAlpha => "dst_alpha",
            Self::OneMinusDstAlpha => "one_minus_dst_alpha",
            Self::ConstAlpha => "constant_alpha",
            Self::OneMinusConstAlpha => "one_minus_constant_alpha",
        };
        f.write_str(name)
    }
}

/// Complete blend state: equations, factors, and optional constants.
///
/// Immutable once constructed; [`BlendMode::new`] guarantees that every
/// factor which references a constant has that constant supplied.
///
/// # Example
///
/// ```rust
/// use chroma_blend::{BlendEquation, BlendFactor, BlendMode};
///
/// // Classic "source over" via the preset:
/// let over = BlendMode::source_over();
///
/// // The same state spelled out:
/// let explicit = BlendMode::new(
///     BlendEquation::Add,
///     BlendEquation::Add,
///     BlendFactor::SrcAlpha,
///     BlendFactor::OneMinusSrcAlpha,
///     None,
///     BlendFactor::One,
///     BlendFactor::OneMinusSrcAlpha,
///     None,
/// ).unwrap();
/// assert_eq!(over, explicit);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BlendMode {
    rgb_equation: BlendEquation,
    alpha_equation: BlendEquation,
    src_rgb_factor: BlendFactor,
    dst_rgb_factor: BlendFactor,
    constant_rgb: Option<[f32; 3]>,
    src_alpha_factor: BlendFactor,
    dst_alpha_factor: BlendFactor,
    constant_alpha: Option<f32>,
}

impl BlendMode {
    /// Builds a blend mode, validating constant usage.
    ///
    /// The constant color is given in the same channel order the caller
    /// uses for source and destination colors.
    ///
    /// # Errors
    ///
    /// [`BlendError::MissingConstant`] when a color factor references
    /// the constant color (or alpha) and `constant_rgb`
    /// (`constant_alpha`) is `None`, or when an alpha factor references
    /// either constant and `constant_alpha` is `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rgb_equation: BlendEquation,
        alpha_equation: BlendEquation,
        src_rgb_factor: BlendFactor,
        dst_rgb_factor: BlendFactor,
        constant_rgb: Option<[f32; 3]>,
        src_alpha_factor: BlendFactor,
        dst_alpha_factor: BlendFactor,
        constant_alpha: Option<f32>,
    ) -> BlendResult<Self> {
        for factor in [src_rgb_factor, dst_rgb_factor] {
            if factor.needs_constant_color() && constant_rgb.is_none() {
                return Err(BlendError::MissingConstant { factor });
            }
            if factor.needs_constant_alpha() && constant_alpha.is_none() {
                return Err(BlendError::MissingConstant { factor });
            }
        }
        // Alpha-pipeline factors only ever read the constant alpha:
        // color-flavored variants resolve to it there.
        for factor in [src_alpha_factor, dst_alpha_factor] {
            if factor.needs_constant() && constant_alpha.is_none() {
                return Err(BlendError::MissingConstant { factor });
            }
        }
        Ok(Self {
            rgb_equation,
            alpha_equation,
            src_rgb_factor,
            dst_rgb_factor,
            constant_rgb,
            src_alpha_factor,
            dst_alpha_factor,
            constant_alpha,
        })
    }

    /// The "replace" preset: `(add, add, one, zero, one, zero)`.
    ///
    /// Compositing with this mode returns the source unchanged.
    pub fn replace() -> Self {
        Self {
            rgb_equation: BlendEquation::Add,
            alpha_equation: BlendEquation::Add,
            src_rgb_factor: BlendFactor::One,
            dst_rgb_factor: BlendFactor::Zero,
            constant_rgb: None,
            src_alpha_factor: BlendFactor::One,
            dst_alpha_factor: BlendFactor::Zero,
            constant_alpha: None,
        }
    }

    /// The classic straight-alpha "source over" preset.
    ///
    /// Color blends `src_alpha / one_minus_src_alpha`; alpha blends
    /// `one / one_minus_src_alpha`.
    pub fn source_over() -> Self {
        Self {
            rgb_equation: BlendEquation::Add,
            alpha_equation: BlendEquation::Add,
            src_rgb_factor: BlendFactor::SrcAlpha,
            dst_rgb_factor: BlendFactor::OneMinusSrcAlpha,
            constant_rgb: None,
            src_alpha_factor: BlendFactor::One,
            dst_alpha_factor: BlendFactor::OneMinusSrcAlpha,
            constant_alpha: None,
        }
    }

    /// The color-pipeline equation.
    #[inline]
    pub fn rgb_equation(&self) -> BlendEquation {
        self.rgb_equation
    }

    /// The alpha-pipeline equation.
    #[inline]
    pub fn alpha_equation(&self) -> BlendEquation {
        self.alpha_equation
    }

    /// The source color factor.
    #[inline]
    pub fn src_rgb_factor(&self) -> BlendFactor {
        self.src_rgb_factor
    }

    /// The destination color factor.
    #[inline]
    pub fn dst_rgb_factor(&self) -> BlendFactor {
        self.dst_rgb_factor
    }

    /// The constant color, if supplied.
    #[inline]
    pub fn constant_rgb(&self) -> Option<[f32; 3]> {
        self.constant_rgb
    }

    /// The source alpha factor.
    #[inline]
    pub fn src_alpha_factor(&self) -> BlendFactor {
        self.src_alpha_factor
    }

    /// The destination alpha factor.
    #[inline]
    pub fn dst_alpha_factor(&self) -> BlendFactor {
        self.dst_alpha_factor
    }

    /// The constant alpha, if supplied.
    #[inline]
    pub fn constant_alpha(&self) -> Option<f32> {
        self.constant_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_constant_color_rejected() {
        let err = BlendMode::new(
            BlendEquation::Add,
            BlendEquation::Add,
            BlendFactor::ConstColor,
            BlendFactor::Zero,
            None,
            BlendFactor::One,
            BlendFactor::Zero,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BlendError::MissingConstant {
                factor: BlendFactor::ConstColor
            }
        ));
    }

    #[test]
    fn test_missing_constant_alpha_rejected() {
        // Constant alpha referenced from the color pipeline.
        assert!(
            BlendMode::new(
                BlendEquation::Add,
                BlendEquation::Add,
                BlendFactor::ConstAlpha,
                BlendFactor::Zero,
                Some([0.5, 0.5, 0.5]),
                BlendFactor::One,
                BlendFactor::Zero,
                None,
            )
            .is_err()
        );
        // Constant color factor in the alpha pipeline reads the
        // constant alpha.
        assert!(
            BlendMode::new(
                BlendEquation::Add,
                BlendEquation::Add,
                BlendFactor::One,
                BlendFactor::Zero,
                None,
                BlendFactor::ConstColor,
                BlendFactor::Zero,
                None,
            )
            .is_err()
        );
    }

    #[test]
    fn test_constant_supplied_accepted() {
        let mode = BlendMode::new(
            BlendEquation::Add,
            BlendEquation::Add,
            BlendFactor::ConstColor,
            BlendFactor::OneMinusConstColor,
            Some([0.25, 0.5, 0.75]),
            BlendFactor::ConstAlpha,
            BlendFactor::OneMinusConstAlpha,
            Some(0.5),
        )
        .unwrap();
        assert_eq!(mode.constant_rgb(), Some([0.25, 0.5, 0.75]));
        assert_eq!(mode.constant_alpha(), Some(0.5));
    }

    #[test]
    fn test_unused_constants_not_required() {
        // Zero factors never dereference constants.
        assert!(
            BlendMode::new(
                BlendEquation::Add,
                BlendEquation::Add,
                BlendFactor::One,
                BlendFactor::Zero,
                None,
                BlendFactor::One,
                BlendFactor::Zero,
                None,
            )
            .is_ok()
        );
    }

    #[test]
    fn test_factor_display() {
        assert_eq!(BlendFactor::OneMinusConstColor.to_string(), "one_minus_constant_color");
        assert_eq!(BlendFactor::SrcAlpha.to_string(), "src_alpha");
    }
}
