//! sRGB transfer functions
//!
//! The piecewise gamma curve from IEC 61966-2-1, applied per chromatic
//! component. Alpha is never gamma-transformed.
//!
//! These are evaluated directly from the formula rather than through a
//! lookup table: downstream vertex output must reproduce the curve
//! ulp-for-ulp, and an interpolated table cannot guarantee that.

const GAMMA: f32 = 2.4;

/// Convert a gamma-corrected sRGB component (0.0..=1.0) to linear light.
///
/// Exact at the endpoints: `0.0` maps to `0.0` and `1.0` maps to `1.0`
/// without touching `powf`.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c == 1.0 {
        return 1.0;
    }

    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Convert a linear-light component (0.0..=1.0) to gamma-corrected sRGB.
///
/// Exact at the endpoints, like [`srgb_to_linear`].
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c == 1.0 {
        return 1.0;
    }

    if c < 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / GAMMA) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_eq!(srgb_to_linear(1.0), 1.0);
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert_eq!(linear_to_srgb(1.0), 1.0);
    }

    #[test]
    fn known_gamma_values() {
        // sRGB 0.5 -> linear ~0.214: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((srgb_to_linear(0.5) - 0.214_041).abs() < 1e-5);

        // linear 0.5 -> sRGB ~0.735: 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((linear_to_srgb(0.5) - 0.735_356).abs() < 1e-5);

        // Below the linear-segment knee the curve is a straight division.
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-9);
        assert!((linear_to_srgb(0.003) - 12.92 * 0.003).abs() < 1e-9);
    }

    #[test]
    fn round_trip_within_float_tolerance() {
        for i in 0..=1000 {
            let x = i as f32 / 1000.0;

            let there_and_back = linear_to_srgb(srgb_to_linear(x));
            assert!(
                (there_and_back - x).abs() < 1e-5,
                "sRGB {x} round-tripped to {there_and_back}"
            );

            let back_and_there = srgb_to_linear(linear_to_srgb(x));
            assert!(
                (back_and_there - x).abs() < 1e-5,
                "linear {x} round-tripped to {back_and_there}"
            );
        }
    }

    /// Cross-check against the `palette` crate, an independent
    /// implementation of the same IEC 61966-2-1 curve.
    #[test]
    fn matches_palette_crate() {
        for i in 0..=255u16 {
            let c = i as f32 / 255.0;

            let reference: palette::LinSrgb<f32> =
                palette::Srgb::new(c, c, c).into_linear();
            assert!(
                (srgb_to_linear(c) - reference.red).abs() < 1e-6,
                "srgb_to_linear({c}) diverges from palette: {} vs {}",
                srgb_to_linear(c),
                reference.red
            );

            let reference_srgb: palette::Srgb<f32> =
                palette::Srgb::from_linear(palette::LinSrgb::new(c, c, c));
            assert!(
                (linear_to_srgb(c) - reference_srgb.red).abs() < 1e-6,
                "linear_to_srgb({c}) diverges from palette: {} vs {}",
                linear_to_srgb(c),
                reference_srgb.red
            );
        }
    }
}
