use crate::model::Color;

/// True when every channel of `color` in sRGB lies in `[0, 1]`.
pub fn is_in_srgb_gamut(color: &Color) -> bool {
    let srgb = color.to_srgb();
    [srgb.r, srgb.g, srgb.b]
        .iter()
        .all(|c| (0.0..=1.0).contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Oklch, Rgb};

    #[test]
    fn test_is_in_srgb_gamut() {
        let cases = [
            (Rgb::from_u8(0xf5, 0xde, 0xb3), true),
            (Rgb::new(0.0, 0.0, 0.0), true),
            (Rgb::new(1.0, 1.0, 1.0), true),
            (Rgb::new(-0.01, 0.0, 0.0), false),
            (Rgb::new(0.0, -0.01, 0.0), false),
            (Rgb::new(0.0, 0.0, -0.01), false),
            (Rgb::new(1.1, 1.1, 1.1), false),
        ];
        for (rgb, expected) in cases {
            assert_eq!(is_in_srgb_gamut(&rgb.into()), expected, "{rgb:?}");
        }
    }

    #[test]
    fn test_saturated_oklch_is_out_of_gamut() {
        assert!(!is_in_srgb_gamut(&Oklch::new(0.7, 0.4, 150.0).into()));
        assert!(is_in_srgb_gamut(&Oklch::new(0.7, 0.05, 150.0).into()));
    }
}
