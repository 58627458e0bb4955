//! Pixel format registry.
//!
//! A pixel format names a channel layout: how many components a color
//! carries, which channel each position holds, and in what order. The set
//! of formats is closed - lookups are exhaustive matches over the
//! [`PixelFormat`] enum, so adding a format is a compile-time event, not
//! a runtime registration.
//!
//! # Layouts
//!
//! | Channels | Formats |
//! |----------|---------|
//! | 1 | `index`, `gray`, `alpha` |
//! | 2 | `gray_alpha`, `alpha_gray` |
//! | 3 | `rgb`, `bgr` |
//! | 4 | `rgba`, `argb`, `bgra`, `abgr` |
//!
//! # Example
//!
//! ```
//! use chroma_core::{Channel, PixelFormat};
//!
//! assert_eq!(PixelFormat::Bgra.channel_count(), 4);
//! assert_eq!(PixelFormat::Bgra.channel_index(Channel::Red).unwrap(), 2);
//! assert!(PixelFormat::Bgra.has_alpha());
//! assert!(PixelFormat::Rgb.channel_index(Channel::Alpha).is_err());
//! ```
//!
//! # Used By
//!
//! - `chroma-blend` - strips alpha and reassembles blend results per format
//! - `chroma-map` - interprets colormap entry layout

use crate::error::{Error, Result};
use std::fmt;

/// A channel identity within a pixel format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Palette / colormap index.
    Index,
    /// Gray level.
    Gray,
    /// Opacity.
    Alpha,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::Gray => "gray",
            Self::Alpha => "alpha",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// A channel layout: component count, identity, and order.
///
/// Color values themselves are untagged tuples; pairing a color with a
/// `PixelFormat` is what gives its components meaning. A color's arity
/// must equal the format's channel count wherever the two meet - the
/// mismatch is rejected as [`Error::ArityMismatch`], never coerced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// 1 channel: palette index.
    Index,
    /// 1 channel: gray.
    Gray,
    /// 1 channel: alpha.
    Alpha,
    /// 2 channels: gray, alpha.
    GrayAlpha,
    /// 2 channels: alpha, gray.
    AlphaGray,
    /// 3 channels: red, green, blue.
    Rgb,
    /// 3 channels: blue, green, red.
    Bgr,
    /// 4 channels: red, green, blue, alpha.
    Rgba,
    /// 4 channels: alpha, red, green, blue.
    Argb,
    /// 4 channels: blue, green, red, alpha.
    Bgra,
    /// 4 channels: alpha, blue, green, red.
    Abgr,
}

impl PixelFormat {
    /// The ordered channel identities of this format.
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            Self::Index => &[Channel::Index],
            Self::Gray => &[Channel::Gray],
            Self::Alpha => &[Channel::Alpha],
            Self::GrayAlpha => &[Channel::Gray, Channel::Alpha],
            Self::AlphaGray => &[Channel::Alpha, Channel::Gray],
            Self::Rgb => &[Channel::Red, Channel::Green, Channel::Blue],
            Self::Bgr => &[Channel::Blue, Channel::Green, Channel::Red],
            Self::Rgba => &[Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha],
            Self::Argb => &[Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue],
            Self::Bgra => &[Channel::Blue, Channel::Green, Channel::Red, Channel::Alpha],
            Self::Abgr => &[Channel::Alpha, Channel::Blue, Channel::Green, Channel::Red],
        }
    }

    /// Number of channels (1, 2, 3, or 4).
    #[inline]
    pub const fn channel_count(self) -> usize {
        self.channels().len()
    }

    /// The non-alpha channels of this format, in declared order.
    ///
    /// This is the color subvector blending operates on; for the bare
    /// `alpha` format it is empty.
    pub const fn color_channels(self) -> &'static [Channel] {
        match self {
            Self::Index => &[Channel::Index],
            Self::Gray | Self::GrayAlpha | Self::AlphaGray => &[Channel::Gray],
            Self::Alpha => &[],
            Self::Rgb | Self::Rgba | Self::Argb => {
                &[Channel::Red, Channel::Green, Channel::Blue]
            }
            Self::Bgr | Self::Bgra | Self::Abgr => {
                &[Channel::Blue, Channel::Green, Channel::Red]
            }
        }
    }

    /// Position of `channel` within this format.
    ///
    /// Fails with [`Error::UnsupportedChannel`] when the format does not
    /// carry the channel (e.g. requesting alpha from `rgb`).
    pub fn channel_index(self, channel: Channel) -> Result<usize> {
        self.channels()
            .iter()
            .position(|&c| c == channel)
            .ok_or(Error::UnsupportedChannel {
                format: self,
                channel,
            })
    }

    /// Whether the format carries an alpha channel.
    ///
    /// True exactly for the 2- and 4-channel layouts.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self.channel_count(), 2 | 4)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::Gray => "gray",
            Self::Alpha => "alpha",
            Self::GrayAlpha => "gray_alpha",
            Self::AlphaGray => "alpha_gray",
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
            Self::Rgba => "rgba",
            Self::Argb => "argb",
            Self::Bgra => "bgra",
            Self::Abgr => "abgr",
        };
        f.write_str(name)
    }
}

/// All supported pixel formats.
///
/// Handy for tests and for callers enumerating layouts.
pub const ALL_FORMATS: [PixelFormat; 11] = [
    PixelFormat::Index,
    PixelFormat::Gray,
    PixelFormat::Alpha,
    PixelFormat::GrayAlpha,
    PixelFormat::AlphaGray,
    PixelFormat::Rgb,
    PixelFormat::Bgr,
    PixelFormat::Rgba,
    PixelFormat::Argb,
    PixelFormat::Bgra,
    PixelFormat::Abgr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(PixelFormat::Gray.channel_count(), 1);
        assert_eq!(PixelFormat::GrayAlpha.channel_count(), 2);
        assert_eq!(PixelFormat::Bgr.channel_count(), 3);
        assert_eq!(PixelFormat::Abgr.channel_count(), 4);
    }

    #[test]
    fn test_channel_sequences() {
        assert_eq!(
            PixelFormat::Argb.channels(),
            &[Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue]
        );
        assert_eq!(
            PixelFormat::Bgr.channels(),
            &[Channel::Blue, Channel::Green, Channel::Red]
        );
    }

    #[test]
    fn test_channel_index() {
        assert_eq!(PixelFormat::Rgba.channel_index(Channel::Alpha).unwrap(), 3);
        assert_eq!(PixelFormat::Argb.channel_index(Channel::Alpha).unwrap(), 0);
        assert_eq!(PixelFormat::Bgra.channel_index(Channel::Red).unwrap(), 2);
        assert_eq!(PixelFormat::AlphaGray.channel_index(Channel::Gray).unwrap(), 1);
    }

    #[test]
    fn test_unsupported_channel() {
        let err = PixelFormat::Rgb.channel_index(Channel::Alpha).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rgb"));
        assert!(msg.contains("alpha"));
    }

    #[test]
    fn test_alpha_bearing() {
        for format in ALL_FORMATS {
            assert_eq!(
                format.has_alpha(),
                matches!(format.channel_count(), 2 | 4),
                "{format}"
            );
        }
        // The bare alpha format holds an alpha channel but is not
        // "alpha-bearing" in the 2-/4-channel sense.
        assert!(!PixelFormat::Alpha.has_alpha());
        assert!(PixelFormat::Alpha.channel_index(Channel::Alpha).is_ok());
    }

    #[test]
    fn test_color_channels_strip_alpha() {
        for format in ALL_FORMATS {
            let stripped = format.color_channels();
            assert!(!stripped.contains(&Channel::Alpha), "{format}");
            let expected = if format.has_alpha() {
                format.channel_count() - 1
            } else {
                format.channel_count()
            };
            assert_eq!(stripped.len(), expected, "{format}");
        }
    }
}
