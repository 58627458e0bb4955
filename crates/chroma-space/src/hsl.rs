//! RGB <-> HSL conversion.
//!
//! Operates on normalized 3-component float colors. Hue, saturation, and
//! lightness are all expressed in [0, 1]; hue wraps, so 0.0 and 1.0 are
//! the same angle.
//!
//! # Achromatic convention
//!
//! When all three RGB channels are equal there is no meaningful hue. This
//! implementation returns hue = 0.0 and saturation = 0.0 for that case
//! rather than a sentinel; round-trip tests must special-case zero
//! saturation accordingly.

/// Converts an RGB triple to HSL.
///
/// All components in [0, 1]; hue is normalized to [0, 1) by dividing the
/// sector angle by 6.
///
/// # Formula
///
/// ```text
/// vmax = max(r, g, b); vmin = min(r, g, b)
/// l = (vmax + vmin) / 2
/// if vmax == vmin: (0, 0, l)               # achromatic
/// d = vmax - vmin
/// s = d / (vmax + vmin)        if l < 0.5
///   = d / (2 - vmax - vmin)    otherwise
/// h = sector(vmax) / 6         # +6 wrap on the red sector when g < b
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_space::rgb_to_hsl;
///
/// let [h, s, l] = rgb_to_hsl([1.0, 0.0, 0.0]);
/// assert_eq!([h, s, l], [0.0, 1.0, 0.5]);
/// ```
pub fn rgb_to_hsl(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let l = (vmax + vmin) / 2.0;

    if vmax == vmin {
        // Achromatic: hue and saturation pinned to 0 by convention.
        return [0.0, 0.0, l];
    }

    let d = vmax - vmin;
    let s = if l < 0.5 {
        d / (vmax + vmin)
    } else {
        d / (2.0 - vmax - vmin)
    };

    let h = if vmax == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if vmax == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    [h, s, l]
}

/// Converts an HSL triple to RGB.
///
/// All components in [0, 1]. Zero saturation yields the gray
/// `(l, l, l)`.
///
/// # Formula
///
/// ```text
/// if s == 0: (l, l, l)
/// q = l * (1 + s)      if l < 0.5
///   = l + s - l * s    otherwise
/// p = 2l - q
/// channel(t) for t = h + 1/3, h, h - 1/3   # t wrapped into [0, 1)
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_space::hsl_to_rgb;
///
/// let [r, g, b] = hsl_to_rgb([0.0, 1.0, 0.5]);
/// assert!((r - 1.0).abs() < 1e-6 && g.abs() < 1e-6 && b.abs() < 1e-6);
/// ```
pub fn hsl_to_rgb(hsl: [f32; 3]) -> [f32; 3] {
    let [h, s, l] = hsl;
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Maps a wrapped hue position through the 4-piece linear profile with
/// breakpoints at 1/6, 1/2, and 2/3.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);

        let [h, s, l] = rgb_to_hsl([0.0, 1.0, 0.0]);
        assert_relative_eq!(h, 1.0 / 3.0, epsilon = 1e-6);
        assert_eq!([s, l], [1.0, 0.5]);

        let [h, s, l] = rgb_to_hsl([0.0, 0.0, 1.0]);
        assert_relative_eq!(h, 2.0 / 3.0, epsilon = 1e-6);
        assert_eq!([s, l], [1.0, 0.5]);
    }

    #[test]
    fn test_achromatic_pins_hue_to_zero() {
        // Documented convention: gray has hue 0 and saturation 0, not a
        // sentinel.
        assert_eq!(rgb_to_hsl([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_eq!(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsl_to_rgb([0.7, 0.0, 0.25]), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_red_sector_wrap() {
        // Magenta-ish: red is max and g < b, exercising the +6 wrap.
        let [h, _, _] = rgb_to_hsl([1.0, 0.0, 0.5]);
        assert!(h > 0.9 && h < 1.0, "h = {h}");
    }

    #[test]
    fn test_hsl_roundtrip() {
        // hsl -> rgb -> hsl, skipping the achromatic case where hue is
        // unconstrained.
        for hi in 0..12 {
            for si in 1..=4 {
                for li in 1..4 {
                    let hsl = [hi as f32 / 12.0, si as f32 / 4.0, li as f32 / 4.0];
                    let back = rgb_to_hsl(hsl_to_rgb(hsl));
                    for c in 0..3 {
                        assert!(
                            (hsl[c] - back[c]).abs() < 1e-6,
                            "hsl = {hsl:?}, back = {back:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rgb_roundtrip() {
        for ri in 0..=4 {
            for gi in 0..=4 {
                for bi in 0..=4 {
                    let rgb = [ri as f32 / 4.0, gi as f32 / 4.0, bi as f32 / 4.0];
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    for c in 0..3 {
                        assert!(
                            (rgb[c] - back[c]).abs() < 1e-6,
                            "rgb = {rgb:?}, back = {back:?}"
                        );
                    }
                }
            }
        }
    }
}
