//! Integration tests for chroma-rs crates.
//!
//! End-to-end tests that verify the interaction between the workspace
//! crates: gradients built through the HSL converter, blend results
//! flowing back into color values, and codec round-trips of colormap
//! entries.

#[cfg(test)]
mod tests {
    use chroma_blend::{BlendEquation, BlendFactor, BlendMode, composite, composite_bytes};
    use chroma_core::{Channel, Color3, Color4, PixelFormat, codec};
    use chroma_map::{Colormap, GradientSpace, MapError};
    use chroma_space::{hsl_to_rgb, rgb_to_hsl};

    /// Gradient built from HSL anchors, looked up, serialized as hex.
    #[test]
    fn test_hsl_gradient_to_hex() {
        let map = Colormap::gradient_two(
            rgb_to_hsl([1.0, 0.0, 0.0]),
            rgb_to_hsl([0.0, 1.0, 0.0]),
            GradientSpace::Hsl,
        )
        .unwrap();

        assert_eq!(map.validate().unwrap(), 255);
        assert_eq!(map.lookup(0).unwrap().hex_string(), "#ff0000");
        assert_eq!(map.lookup(255).unwrap().hex_string(), "#00ff00");
        // Midpoint swings through yellow on the hue wheel.
        let mid = map.lookup(128).unwrap();
        assert!(mid.0[0] > 200 && mid.0[1] > 200, "expected yellow-ish, got {mid:?}");
    }

    /// Full-range gradient entries survive the binary codec.
    #[test]
    fn test_gradient_codec_roundtrip() {
        let map = Colormap::gradient_two(
            [0.0, 0.0, 0.0],
            [1.0, 0.5, 0.25],
            GradientSpace::Rgb,
        )
        .unwrap();

        let mut buf = Vec::new();
        for i in 0..=255u8 {
            codec::put_color3(&mut buf, map.lookup(i).unwrap());
        }
        assert_eq!(buf.len(), 256 * 3);

        for i in 0..=255u8 {
            let decoded = codec::get_color3(&buf, i as usize * 3).unwrap();
            assert_eq!(decoded, map.lookup(i).unwrap());
        }
    }

    /// Composite gradient entries over a background in bgra order.
    #[test]
    fn test_blend_colormap_entry_over_background() {
        let map = Colormap::gradient_two(
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            GradientSpace::Rgb,
        )
        .unwrap();
        let entry = map.lookup(170).unwrap();
        assert_eq!(entry, Color3::new(85, 0, 170));

        // Entry is RGB; present it to the compositor as bgra at half
        // coverage over an opaque white background.
        let src = Color4::new(entry.0[2], entry.0[1], entry.0[0], 128);
        let dst = Color4::new(255u8, 255, 255, 255);
        let out = composite_bytes(
            &src.to_array(),
            PixelFormat::Bgra,
            &dst.to_array(),
            PixelFormat::Bgra,
            &BlendMode::source_over(),
        )
        .unwrap();

        let alpha_pos = PixelFormat::Bgra.channel_index(Channel::Alpha).unwrap();
        assert_eq!(out[alpha_pos], 255);
        // Each color channel is mixed halfway toward white.
        assert!(out[0].abs_diff(213) <= 1, "blue channel: {}", out[0]);
        assert!(out[1].abs_diff(128) <= 1, "green channel: {}", out[1]);
        assert!(out[2].abs_diff(170) <= 1, "red channel: {}", out[2]);
    }

    /// The replace mode is the identity for any destination, float or
    /// byte.
    #[test]
    fn test_replace_mode_across_representations() {
        let src = [0.2, 0.4, 0.6, 1.0];
        let dst = [0.9, 0.9, 0.9, 0.1];
        let out = composite(
            &src,
            PixelFormat::Rgba,
            &dst,
            PixelFormat::Rgba,
            &BlendMode::replace(),
        )
        .unwrap();
        for (o, s) in out.iter().zip(&src) {
            assert!((o - s).abs() < 1e-6);
        }

        let src_b = Color4::<f32>::from_array(src).convert::<u8>();
        let out_b = composite_bytes(
            &src_b.to_array(),
            PixelFormat::Rgba,
            &[10, 20, 30, 40],
            PixelFormat::Rgba,
            &BlendMode::replace(),
        )
        .unwrap();
        assert_eq!(out_b, src_b.to_array().to_vec());
    }

    /// Additive blending of two gradient midpoints saturates per
    /// channel.
    #[test]
    fn test_additive_blend_of_gradients() {
        let warm = Colormap::gradient_two([0.0; 3], [1.0, 0.5, 0.0], GradientSpace::Rgb).unwrap();
        let cool = Colormap::gradient_two([0.0; 3], [0.0, 0.5, 1.0], GradientSpace::Rgb).unwrap();
        let additive = BlendMode::new(
            BlendEquation::Add,
            BlendEquation::Add,
            BlendFactor::One,
            BlendFactor::One,
            None,
            BlendFactor::One,
            BlendFactor::One,
            None,
        )
        .unwrap();

        let a = warm.lookup(255).unwrap();
        let b = cool.lookup(255).unwrap();
        let out = composite_bytes(
            &a.to_array(),
            PixelFormat::Rgb,
            &b.to_array(),
            PixelFormat::Rgb,
            &additive,
        )
        .unwrap();
        assert_eq!(out, vec![255, 255, 255]);
    }

    /// A deserialized-looking, hand-built table fails validation the
    /// way builder output never does.
    #[test]
    fn test_hand_built_table_vs_builder_output() {
        use chroma_map::MapKind;
        use std::collections::HashMap;

        let built = Colormap::gradient_three(
            [0.0; 3],
            [0.5, 0.5, 0.5],
            [1.0, 1.0, 1.0],
            GradientSpace::Rgb,
        )
        .unwrap();
        assert_eq!(built.validate().unwrap(), 255);

        let mut sparse = HashMap::new();
        sparse.insert(0, Color3::new(0, 0, 0));
        sparse.insert(255, Color3::new(255, 255, 255));
        let bad = Colormap::from_table(MapKind::Rgb, sparse);
        assert!(matches!(
            bad.validate(),
            Err(MapError::InvalidIndexRange { missing: 1 })
        ));
    }

    /// HSL round-trips hold for colormap entries after byte
    /// quantization within a byte of error.
    #[test]
    fn test_hsl_roundtrip_through_bytes() {
        let map = Colormap::gradient_two(
            [0.9, 0.1, 0.3],
            [0.1, 0.8, 0.6],
            GradientSpace::Rgb,
        )
        .unwrap();
        for i in [0u8, 64, 127, 200, 255] {
            let rgb = map.lookup(i).unwrap().to_unit_array();
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            for c in 0..3 {
                assert!((rgb[c] - back[c]).abs() < 1e-5);
            }
        }
    }
}
