//! The generalized blend-equation evaluator.
//!
//! Composites a source color over a destination color under a
//! [`BlendMode`], with both colors given in their own declared
//! [`PixelFormat`]. The result is typed in the destination's format.
//!
//! # Algorithm
//!
//! 1. Strip alpha from each input per its format, leaving the color
//!    subvector in declared order; formats without alpha default it to
//!    1.0.
//! 2. For `Min`/`Max` color equations, combine the subvectors
//!    componentwise directly (factors are ignored). Otherwise resolve
//!    the source and destination factors, scale each term, and combine
//!    via `add` / `subtract` / `reverse-subtract`.
//! 3. If the destination format carries alpha, run the scalar alpha
//!    pipeline the same way; otherwise the output is the composited
//!    color subvector alone.
//! 4. Reassemble in destination channel order, clamped to [0, 1].
//!
//! All intermediate math is normalized float; [`composite_bytes`]
//! converts byte inputs in and results back out at the boundary.
//!
//! # Zero sentinel
//!
//! A `zero` factor resolves to an explicit sentinel, not a numeric 0.0.
//! The sentinel survives scaling and acts as the additive identity in
//! combination, so a zeroed term never evaluates its side of the
//! expression - in particular it never dereferences the optional
//! constant color/alpha.
//!
//! # Preconditions
//!
//! Source, destination, and constant color must share one color channel
//! order; the source/destination agreement is asserted defensively
//! (`debug_assert!`), not checked at runtime. Arity of each color slice
//! against its format IS checked and rejected as a typed error.

use crate::error::BlendResult;
use crate::mode::{BlendEquation, BlendFactor, BlendMode};
use chroma_core::{Channel, Component, Error as CoreError, PixelFormat};
use tracing::trace;

/// Per-call inputs the factor resolvers read.
struct Inputs<'a> {
    src_color: &'a [f32],
    src_alpha: f32,
    dst_color: &'a [f32],
    dst_alpha: f32,
    constant_rgb: Option<[f32; 3]>,
    constant_alpha: Option<f32>,
}

/// A resolved scale.
#[derive(Copy, Clone)]
enum Scale {
    /// Explicit zero sentinel; never multiplies.
    Zero,
    /// One scalar for every channel.
    Uniform(f32),
    /// Independent per-channel scales.
    PerChannel([f32; 3]),
}

/// A color term after scaling.
#[derive(Copy, Clone)]
enum Term {
    /// The zero sentinel, carried through to combination.
    Zero,
    /// Scaled channel values (leading `n` entries meaningful).
    Scaled([f32; 3]),
}

impl Term {
    #[inline]
    fn values(self) -> [f32; 3] {
        match self {
            Self::Zero => [0.0; 3],
            Self::Scaled(v) => v,
        }
    }
}

/// A scalar (alpha) term after scaling.
#[derive(Copy, Clone)]
enum ScalarTerm {
    Zero,
    Scaled(f32),
}

impl ScalarTerm {
    #[inline]
    fn value(self) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::Scaled(v) => v,
        }
    }
}

/// Composites `src` over `dst` under `mode`, producing a color in the
/// destination's format.
///
/// Inputs are unit-float slices whose lengths must equal their formats'
/// channel counts. Output components are clamped to [0, 1].
///
/// # Errors
///
/// - arity mismatch between a slice and its format
/// - a factor referencing an unsupplied constant (unreachable for modes
///   built via [`BlendMode::new`], which validates at construction)
///
/// # Example
///
/// ```rust
/// use chroma_blend::{composite, BlendMode};
/// use chroma_core::PixelFormat;
///
/// let src = [1.0, 0.0, 0.0, 0.5];
/// let dst = [0.0, 0.0, 1.0, 1.0];
/// let out = composite(
///     &src,
///     PixelFormat::Rgba,
///     &dst,
///     PixelFormat::Rgba,
///     &BlendMode::source_over(),
/// )
/// .unwrap();
/// assert_eq!(out, vec![0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn composite(
    src: &[f32],
    src_format: PixelFormat,
    dst: &[f32],
    dst_format: PixelFormat,
    mode: &BlendMode,
) -> BlendResult<Vec<f32>> {
    trace!(%src_format, %dst_format, "composite");
    check_arity(src, src_format)?;
    check_arity(dst, dst_format)?;
    debug_assert_eq!(
        src_format.color_channels(),
        dst_format.color_channels(),
        "source and destination formats must agree on color channel order"
    );

    let (src_color, src_alpha) = split_alpha(src, src_format);
    let (dst_color, dst_alpha) = split_alpha(dst, dst_format);
    let inputs = Inputs {
        src_color: &src_color,
        src_alpha,
        dst_color: &dst_color,
        dst_alpha,
        constant_rgb: mode.constant_rgb(),
        constant_alpha: mode.constant_alpha(),
    };

    let color = run_color_pipeline(mode, &inputs, dst_color.len())?;
    // Keyed on the channel list, not has_alpha(): the bare `alpha`
    // format holds an alpha channel too.
    let alpha = if dst_format.channels().contains(&Channel::Alpha) {
        Some(run_alpha_pipeline(mode, &inputs)?)
    } else {
        None
    };

    let mut out = vec![0.0f32; dst_format.channel_count()];
    let mut ci = 0;
    for (slot, channel) in out.iter_mut().zip(dst_format.channels()) {
        if *channel == Channel::Alpha {
            *slot = alpha.unwrap_or(1.0).clamp(0.0, 1.0);
        } else {
            *slot = color.get(ci).copied().unwrap_or(0.0).clamp(0.0, 1.0);
            ci += 1;
        }
    }
    Ok(out)
}

/// [`composite`] over byte colors.
///
/// Converts in (divide by 255), blends in float, converts back out
/// (round to nearest, clamped to [0, 255]).
pub fn composite_bytes(
    src: &[u8],
    src_format: PixelFormat,
    dst: &[u8],
    dst_format: PixelFormat,
    mode: &BlendMode,
) -> BlendResult<Vec<u8>> {
    let src_f: Vec<f32> = src.iter().map(|&b| b.to_unit()).collect();
    let dst_f: Vec<f32> = dst.iter().map(|&b| b.to_unit()).collect();
    let out = composite(&src_f, src_format, &dst_f, dst_format, mode)?;
    Ok(out.into_iter().map(u8::from_unit).collect())
}

fn check_arity(color: &[f32], format: PixelFormat) -> BlendResult<()> {
    if color.len() != format.channel_count() {
        return Err(CoreError::arity_mismatch(format, color.len()).into());
    }
    Ok(())
}

/// Splits a pixel into its color subvector (declared order preserved)
/// and its alpha, defaulting alpha to 1.0 for alpha-free formats.
fn split_alpha(pixel: &[f32], format: PixelFormat) -> (Vec<f32>, f32) {
    let mut color = Vec::with_capacity(3);
    let mut alpha = 1.0;
    for (&value, &channel) in pixel.iter().zip(format.channels()) {
        if channel == Channel::Alpha {
            alpha = value;
        } else {
            color.push(value);
        }
    }
    (color, alpha)
}

fn run_color_pipeline(mode: &BlendMode, inputs: &Inputs<'_>, n: usize) -> BlendResult<Vec<f32>> {
    let equation = mode.rgb_equation();
    let (src_term, dst_term) = match equation {
        // Min/max operate on the raw subvectors; the factors are
        // ignored and never resolved.
        BlendEquation::Min | BlendEquation::Max => (
            Term::Scaled(pad3(inputs.src_color)),
            Term::Scaled(pad3(inputs.dst_color)),
        ),
        _ => {
            let src_scale = resolve_color_factor(mode.src_rgb_factor(), inputs)?;
            let dst_scale = resolve_color_factor(mode.dst_rgb_factor(), inputs)?;
            (
                scale_term(inputs.src_color, src_scale),
                scale_term(inputs.dst_color, dst_scale),
            )
        }
    };
    let combined = combine(equation, src_term, dst_term);
    Ok(combined[..n.min(3)].to_vec())
}

fn run_alpha_pipeline(mode: &BlendMode, inputs: &Inputs<'_>) -> BlendResult<f32> {
    let equation = mode.alpha_equation();
    let (src_term, dst_term) = match equation {
        BlendEquation::Min | BlendEquation::Max => (
            ScalarTerm::Scaled(inputs.src_alpha),
            ScalarTerm::Scaled(inputs.dst_alpha),
        ),
        _ => {
            let src_scale = resolve_alpha_factor(mode.src_alpha_factor(), inputs)?;
            let dst_scale = resolve_alpha_factor(mode.dst_alpha_factor(), inputs)?;
            (
                scale_scalar(inputs.src_alpha, src_scale),
                scale_scalar(inputs.dst_alpha, dst_scale),
            )
        }
    };
    Ok(combine_scalar(equation, src_term, dst_term))
}

/// Resolves a factor for the color pipeline.
///
/// `zero` resolves to the sentinel before anything else is looked at,
/// so a mode whose only constant-referencing slot is zeroed never needs
/// the constant.
fn resolve_color_factor(factor: BlendFactor, inputs: &Inputs<'_>) -> BlendResult<Scale> {
    Ok(match factor {
        BlendFactor::Zero => Scale::Zero,
        BlendFactor::One => Scale::Uniform(1.0),
        BlendFactor::SrcColor => Scale::PerChannel(pad3(inputs.src_color)),
        BlendFactor::OneMinusSrcColor => Scale::PerChannel(one_minus3(pad3(inputs.src_color))),
        BlendFactor::DstColor => Scale::PerChannel(pad3(inputs.dst_color)),
        BlendFactor::OneMinusDstColor => Scale::PerChannel(one_minus3(pad3(inputs.dst_color))),
        BlendFactor::ConstColor => Scale::PerChannel(require_rgb(inputs, factor)?),
        BlendFactor::OneMinusConstColor => {
            Scale::PerChannel(one_minus3(require_rgb(inputs, factor)?))
        }
        BlendFactor::SrcAlpha => Scale::Uniform(inputs.src_alpha),
        BlendFactor::OneMinusSrcAlpha => Scale::Uniform(1.0 - inputs.src_alpha),
        BlendFactor::DstAlpha => Scale::Uniform(inputs.dst_alpha),
        BlendFactor::OneMinusDstAlpha => Scale::Uniform(1.0 - inputs.dst_alpha),
        BlendFactor::ConstAlpha => Scale::Uniform(require_alpha(inputs, factor)?),
        BlendFactor::OneMinusConstAlpha => Scale::Uniform(1.0 - require_alpha(inputs, factor)?),
    })
}

/// Resolves a factor for the alpha pipeline.
///
/// Color-flavored factors read the corresponding alpha here, as in
/// `glBlendFuncSeparate`.
fn resolve_alpha_factor(factor: BlendFactor, inputs: &Inputs<'_>) -> BlendResult<Scale> {
    Ok(match factor {
        BlendFactor::Zero => Scale::Zero,
        BlendFactor::One => Scale::Uniform(1.0),
        BlendFactor::SrcColor | BlendFactor::SrcAlpha => Scale::Uniform(inputs.src_alpha),
        BlendFactor::OneMinusSrcColor | BlendFactor::OneMinusSrcAlpha => {
            Scale::Uniform(1.0 - inputs.src_alpha)
        }
        BlendFactor::DstColor | BlendFactor::DstAlpha => Scale::Uniform(inputs.dst_alpha),
        BlendFactor::OneMinusDstColor | BlendFactor::OneMinusDstAlpha => {
            Scale::Uniform(1.0 - inputs.dst_alpha)
        }
        BlendFactor::ConstColor | BlendFactor::ConstAlpha => {
            Scale::Uniform(require_alpha(inputs, factor)?)
        }
        BlendFactor::OneMinusConstColor | BlendFactor::OneMinusConstAlpha => {
            Scale::Uniform(1.0 - require_alpha(inputs, factor)?)
        }
    })
}

fn require_rgb(inputs: &Inputs<'_>, factor: BlendFactor) -> BlendResult<[f32; 3]> {
    inputs
        .constant_rgb
        .ok_or(crate::BlendError::MissingConstant { factor })
}

fn require_alpha(inputs: &Inputs<'_>, factor: BlendFactor) -> BlendResult<f32> {
    inputs
        .constant_alpha
        .ok_or(crate::BlendError::MissingConstant { factor })
}

fn scale_term(color: &[f32], scale: Scale) -> Term {
    match scale {
        Scale::Zero => Term::Zero,
        Scale::Uniform(k) => {
            let mut out = [0.0; 3];
            for (slot, &c) in out.iter_mut().zip(color) {
                *slot = c * k;
            }
            Term::Scaled(out)
        }
        Scale::PerChannel(ks) => {
            let mut out = [0.0; 3];
            for (i, (slot, &c)) in out.iter_mut().zip(color).enumerate() {
                *slot = c * ks[i];
            }
            Term::Scaled(out)
        }
    }
}

fn scale_scalar(alpha: f32, scale: Scale) -> ScalarTerm {
    match scale {
        Scale::Zero => ScalarTerm::Zero,
        Scale::Uniform(k) => ScalarTerm::Scaled(alpha * k),
        Scale::PerChannel(ks) => ScalarTerm::Scaled(alpha * ks[0]),
    }
}

fn combine(equation: BlendEquation, src: Term, dst: Term) -> [f32; 3] {
    match equation {
        BlendEquation::Add => match (src, dst) {
            (Term::Zero, Term::Zero) => [0.0; 3],
            (Term::Zero, Term::Scaled(d)) => d,
            (Term::Scaled(s), Term::Zero) => s,
            (Term::Scaled(s), Term::Scaled(d)) => [s[0] + d[0], s[1] + d[1], s[2] + d[2]],
        },
        BlendEquation::Subtract => {
            let (s, d) = (src.values(), dst.values());
            [s[0] - d[0], s[1] - d[1], s[2] - d[2]]
        }
        BlendEquation::ReverseSubtract => {
            let (s, d) = (src.values(), dst.values());
            [d[0] - s[0], d[1] - s[1], d[2] - s[2]]
        }
        BlendEquation::Min => {
            let (s, d) = (src.values(), dst.values());
            [s[0].min(d[0]), s[1].min(d[1]), s[2].min(d[2])]
        }
        BlendEquation::Max => {
            let (s, d) = (src.values(), dst.values());
            [s[0].max(d[0]), s[1].max(d[1]), s[2].max(d[2])]
        }
    }
}

fn combine_scalar(equation: BlendEquation, src: ScalarTerm, dst: ScalarTerm) -> f32 {
    match equation {
        BlendEquation::Add => match (src, dst) {
            (ScalarTerm::Zero, ScalarTerm::Zero) => 0.0,
            (ScalarTerm::Zero, ScalarTerm::Scaled(d)) => d,
            (ScalarTerm::Scaled(s), ScalarTerm::Zero) => s,
            (ScalarTerm::Scaled(s), ScalarTerm::Scaled(d)) => s + d,
        },
        BlendEquation::Subtract => src.value() - dst.value(),
        BlendEquation::ReverseSubtract => dst.value() - src.value(),
        BlendEquation::Min => src.value().min(dst.value()),
        BlendEquation::Max => src.value().max(dst.value()),
    }
}

/// Copies up to three leading components into a fixed array.
fn pad3(color: &[f32]) -> [f32; 3] {
    let mut out = [0.0; 3];
    for (slot, &c) in out.iter_mut().zip(color) {
        *slot = c;
    }
    out
}

fn one_minus3(v: [f32; 3]) -> [f32; 3] {
    [1.0 - v[0], 1.0 - v[1], 1.0 - v[2]]
}
