//! Device-independent CMYK over sRGB.

use super::Rgb;

/// Cyan, magenta, yellow, key (black), each `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
    pub alpha: f32,
}

impl Cmyk {
    #[inline]
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self {
            c,
            m,
            y,
            k,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn to_srgb(&self) -> Rgb {
        let ink = |v: f32| (1.0 - v) * (1.0 - self.k);
        Rgb::new(ink(self.c), ink(self.m), ink(self.y)).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_srgb() {
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_srgb().to_u8(), [255, 255, 255]);
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 1.0).to_srgb().to_u8(), [0, 0, 0]);
        assert_eq!(Cmyk::new(0.0, 1.0, 1.0, 0.0).to_srgb().to_u8(), [255, 0, 0]);
        assert_eq!(Cmyk::new(0.5, 0.0, 0.5, 0.5).to_srgb().to_u8(), [64, 128, 64]);
    }

    #[test]
    fn test_round_trip_through_rgb() {
        // Only colors with one zero ink survive the trip; the rest are normalized.
        let cmyk = Cmyk::new(0.0, 0.4, 0.6, 0.1).with_alpha(0.5);
        let back = cmyk.to_srgb().to_cmyk();
        assert!((back.c - cmyk.c).abs() < 1e-5);
        assert!((back.m - cmyk.m).abs() < 1e-5);
        assert!((back.y - cmyk.y).abs() < 1e-5);
        assert!((back.k - cmyk.k).abs() < 1e-5);
        assert_eq!(back.alpha, 0.5);
    }
}
