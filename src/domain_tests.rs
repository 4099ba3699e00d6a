//! Domain-critical regression tests for quad-colour.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::{Colour4, ColourInfo, Quad, SrgbColour, Vec2};

    // ========================================================================
    // GAP 1: Gamma correctness -- interpolation must happen in linear space
    // ========================================================================

    /// If this breaks, it means: gradient interpolation is operating on the
    /// raw sRGB components instead of linearized ones, making gradient
    /// midpoints too dark. The midpoint of a black-to-white gradient is
    /// linear 0.5, which encodes to sRGB ~0.735; a naive sRGB-space lerp
    /// would report 0.5 instead.
    #[test]
    fn test_gradient_midpoint_is_gamma_correct() {
        let gradient = ColourInfo::gradient_horizontal(
            SrgbColour::new(Colour4::black()),
            SrgbColour::new(Colour4::white()),
        );

        let mid = gradient.interpolate(Vec2::new(0.5, 0.0));
        assert!(
            (mid.raw.r - 0.5).abs() < 1e-6,
            "REGRESSION: gradient midpoint is {:.4} in linear space, expected 0.5. \
             Interpolation is likely happening on raw sRGB components.",
            mid.raw.r
        );

        let mid_srgb = mid.to_srgb().raw.r;
        assert!(
            (mid_srgb - 0.7353569).abs() < 1e-4,
            "REGRESSION: gradient midpoint encodes to sRGB {:.4}, expected ~0.735. \
             If this is ~0.5, the linear round-trip has been dropped.",
            mid_srgb
        );
    }

    /// If this breaks, it means: colour multiplication is operating on raw
    /// sRGB components instead of linearized ones.
    #[test]
    fn test_multiplication_is_gamma_correct() {
        let grey = SrgbColour::new(Colour4::new(0.5, 0.5, 0.5, 1.0));
        let product = (grey * grey).raw.r;

        // toLinear(0.5)^2 back to sRGB is ~0.237, not the naive 0.25.
        assert!(
            (product - 0.237).abs() < 1e-3,
            "REGRESSION: grey * grey produced sRGB {:.4}, expected ~0.237. \
             If this is 0.25, multiplication is skipping the linear round-trip.",
            product
        );
    }

    // ========================================================================
    // GAP 2: White compositing identity must be bit-exact
    // ========================================================================

    /// If this breaks, it means: the white fast paths have been removed and
    /// colour state is drifting through float round-trips as it descends a
    /// draw hierarchy. A chain of opaque white parents must leave a child's
    /// colours bit-for-bit untouched, however deep the chain.
    #[test]
    fn test_white_hierarchy_is_bit_exact() {
        let child = ColourInfo::gradient_vertical(
            SrgbColour::from_rgba8(210, 180, 140, 255),
            SrgbColour::from_rgba8(100, 149, 237, 128),
        );

        let mut state = ColourInfo::single_colour(SrgbColour::new(Colour4::white()));
        state.apply_child(ColourInfo::single_colour(SrgbColour::new(Colour4::white())));
        state.apply_child(child);

        assert_eq!(
            child, state,
            "REGRESSION: descending through opaque white parents changed the \
             child's colours. The white identity fast path is broken."
        );
    }

    /// If this breaks, it means: translucent white is tinting instead of
    /// fading. A half-transparent white parent must scale only the child's
    /// alphas and keep its RGB verbatim.
    #[test]
    fn test_translucent_white_only_fades() {
        let tan = SrgbColour::new(Colour4::tan());

        let mut state =
            ColourInfo::single_colour(SrgbColour::new(Colour4::white()).opacity(0.5));
        state.apply_child(ColourInfo::single_colour(tan));

        let result = state.try_extract_single_colour().unwrap();
        assert_eq!(tan.raw.r, result.raw.r);
        assert_eq!(tan.raw.g, result.raw.g);
        assert_eq!(tan.raw.b, result.raw.b);
        assert_eq!(0.5, result.alpha());
    }

    // ========================================================================
    // GAP 3: Sub-quad sampling must be stable
    // ========================================================================

    /// If this breaks, it means: cropping a single colour to a sub-quad is
    /// round-tripping it through linear space, introducing drift where a
    /// position-independent colour should be returned untouched.
    #[test]
    fn test_cropping_a_single_colour_is_lossless() {
        let single =
            ColourInfo::single_colour(SrgbColour::from_rgba8(180, 90, 45, 200));

        let cropped = single.interpolate_quad(Quad::from_rect(0.33, 0.1, 0.2, 0.7));
        assert_eq!(
            single, cropped,
            "REGRESSION: sampling a single colour at a sub-quad changed it."
        );
    }

    /// If this breaks, it means: the corner weights of the bilinear blend
    /// are wired to the wrong corners. Sampling a gradient at the unit quad
    /// corners must reproduce its corner colours exactly (all test corner
    /// components are 0 or 1, which the transfer functions map exactly).
    #[test]
    fn test_unit_quad_sampling_reproduces_corners() {
        let gradient = ColourInfo::gradient_horizontal(
            SrgbColour::new(Colour4::red()),
            SrgbColour::new(Colour4::blue()),
        );

        let resampled = gradient.interpolate_quad(Quad::UNIT);
        assert_eq!(gradient, resampled);
    }

    // ========================================================================
    // GAP 4: Codec round trips
    // ========================================================================

    /// If this breaks, it means: the hex formatter and parser disagree on
    /// digit order or case, so serialized colours no longer load back.
    #[test]
    fn test_hex_round_trip() {
        let cases = [
            Colour4::tan(),
            Colour4::cornflower_blue(),
            Colour4::from_rgba8(1, 2, 3, 4),
            Colour4::from_rgba8(255, 0, 128, 64),
        ];

        for colour in cases {
            let hex = colour.to_hex(true);
            assert_eq!(Ok(colour), Colour4::from_hex(&hex), "hex was {hex:?}");
        }

        assert_eq!("#D2B48C", Colour4::tan().to_hex(false));
    }

    /// If this breaks, it means: float-to-byte channel conversion no longer
    /// truncates back to the source byte, so packed colours drift on every
    /// save/load cycle. Exercises every byte value in every channel position.
    #[test]
    fn test_packed_integer_round_trips_every_byte() {
        for b in 0..=255u8 {
            let rgba = u32::from_be_bytes([b, b.wrapping_add(85), b.wrapping_add(170), 255 - b]);
            assert_eq!(rgba, Colour4::from_rgba(rgba).to_rgba(), "byte {b}");

            let argb = rgba;
            assert_eq!(argb, Colour4::from_argb(argb).to_argb(), "byte {b}");
        }
    }

    /// If this breaks, it means: the HSV or HSL sector math has drifted and
    /// cylindrical round trips no longer land on the source coordinates.
    /// Degenerate coordinates (zero saturation, zero value, extreme
    /// lightness) are skipped because they legitimately lose hue.
    #[test]
    fn test_hsv_hsl_round_trips() {
        fn hue_distance(a: f32, b: f32) -> f32 {
            let d = (a - b).abs();
            d.min(1.0 - d)
        }

        for hi in 0..36 {
            let h = hi as f32 / 36.0;
            for si in 1..=4 {
                let s = si as f32 / 4.0;
                for vi in 1..=3 {
                    let v = vi as f32 / 4.0;

                    let [h2, s2, v2, a2] = Colour4::from_hsv(h, s, v, 1.0).to_hsv();
                    assert!(hue_distance(h, h2) < 5e-3, "hsv hue h={h} s={s} v={v}");
                    assert!((s - s2).abs() < 5e-3, "hsv saturation h={h} s={s} v={v}");
                    assert!((v - v2).abs() < 5e-3, "hsv value h={h} s={s} v={v}");
                    assert_eq!(1.0, a2);

                    let l = v; // reuse the grid; 0.25..0.75 avoids the poles
                    let [h3, s3, l3, _] = Colour4::from_hsl(h, s, l, 1.0).to_hsl();
                    assert!(hue_distance(h, h3) < 5e-3, "hsl hue h={h} s={s} l={l}");
                    assert!((s - s3).abs() < 5e-3, "hsl saturation h={h} s={s} l={l}");
                    assert!((l - l3).abs() < 5e-3, "hsl lightness h={h} s={s} l={l}");
                }
            }
        }
    }

    // ========================================================================
    // GAP 5: Alpha handling must bypass gamma
    // ========================================================================

    /// If this breaks, it means: alpha is being run through the sRGB
    /// transfer functions. Alpha carries no gamma; fading a colour state
    /// must leave every RGB component bit-exact.
    #[test]
    fn test_fading_never_touches_rgb() {
        let gradient = ColourInfo::gradient_horizontal(
            SrgbColour::from_rgba8(210, 180, 140, 255),
            SrgbColour::from_rgba8(100, 149, 237, 200),
        );

        let faded = gradient.multiply_alpha(0.25);

        assert_eq!(gradient.top_left().raw.r, faded.top_left().raw.r);
        assert_eq!(gradient.top_left().raw.g, faded.top_left().raw.g);
        assert_eq!(gradient.top_left().raw.b, faded.top_left().raw.b);
        assert_eq!(0.25, faded.top_left().alpha());
        assert_eq!(gradient.top_right().raw.b, faded.top_right().raw.b);
        assert!((faded.top_right().alpha() - (200.0 / 255.0) * 0.25).abs() < 1e-6);
    }
}
