//! JzAzBz and JzCzHz.
//!
//! A perceptually uniform space for HDR and wide-gamut signals, always
//! relative to D65. Euclidean distance predicts perceived difference; see
//! [`crate::calculate::difference_ez`].
//!
//! # References
//!
//! M. Safdar, G. Cui, Y. Kim, and M. Luo, "Perceptually uniform color space
//! for image signals including high dynamic range and wide gamut,"
//! Opt. Express 25, 15131-15151 (2017).

use super::{Rgb, Xyz};
use crate::math::{from_polar, to_polar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JzAzBz {
    /// Lightness, `0.0..=1.0`
    pub j: f32,
    /// Green-red
    pub a: f32,
    /// Blue-yellow
    pub b: f32,
    pub alpha: f32,
}

impl JzAzBz {
    pub(crate) const D0: f64 = 1.6295499532821566e-11;

    #[inline]
    pub fn new(j: f32, a: f32, b: f32) -> Self {
        Self {
            j,
            a,
            b,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Combined inverse matrices from <https://observablehq.com/@jrus/jzazbz>.
    pub fn to_xyz(&self) -> Xyz {
        fn pq_inv(x: f64) -> f64 {
            let xx = x.powf(7.460772656268214e-03);
            let v = 1e4 * ((0.8359375 - xx) / (18.6875 * xx - 18.8515625)).powf(6.277394636015326);
            if v.is_nan() {
                0.0
            } else {
                v
            }
        }

        let (a, b) = (self.a as f64, self.b as f64);
        let jz = self.j as f64 + Self::D0;
        let iz = jz / (0.44 + 0.56 * jz);
        let l = pq_inv(iz + 1.386050432715393e-1 * a + 5.804731615611869e-2 * b);
        let m = pq_inv(iz - 1.386050432715393e-1 * a - 5.804731615611891e-2 * b);
        let s = pq_inv(iz - 9.601924202631895e-2 * a - 8.118918960560390e-1 * b);
        Xyz::new(
            (1.661373055774069e+00 * l - 9.145230923250668e-01 * m + 2.313620767186147e-01 * s)
                as f32,
            (-3.250758740427037e-01 * l + 1.571847038366936e+00 * m - 2.182538318672940e-01 * s)
                as f32,
            (-9.098281098284756e-02 * l - 3.127282905230740e-01 * m + 1.522766561305260e+00 * s)
                as f32,
        )
        .with_alpha(self.alpha)
    }

    /// Zero lightness is black regardless of the other components.
    pub fn to_srgb(&self) -> Rgb {
        if self.j == 0.0 {
            return Rgb::new(0.0, 0.0, 0.0).with_alpha(self.alpha);
        }
        self.to_xyz().to_srgb()
    }

    pub fn to_jzczhz(&self) -> JzCzHz {
        let (c, h) = to_polar(self.a, self.b);
        JzCzHz {
            j: self.j,
            c,
            h,
            alpha: self.alpha,
        }
    }
}

/// Cylindrical JzAzBz: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JzCzHz {
    pub j: f32,
    pub c: f32,
    /// Hue in degrees; `NaN` when achromatic
    pub h: f32,
    pub alpha: f32,
}

impl JzCzHz {
    #[inline]
    pub fn new(j: f32, c: f32, h: f32) -> Self {
        Self {
            j,
            c,
            h,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn to_jzazbz(&self) -> JzAzBz {
        let (a, b) = from_polar(self.c, self.h);
        JzAzBz::new(self.j, a, b).with_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_round_trip() {
        let xyz = Xyz::new(0.4, 0.3, 0.2);
        let jab = xyz.to_jzazbz();
        assert!(jab.j > 0.0);
        let back = jab.to_xyz();
        assert!((back.x - xyz.x).abs() < 1e-3, "{back:?}");
        assert!((back.y - xyz.y).abs() < 1e-3, "{back:?}");
        assert!((back.z - xyz.z).abs() < 1e-3, "{back:?}");
    }

    #[test]
    fn test_black() {
        let black = Xyz::new(0.0, 0.0, 0.0).to_jzazbz();
        assert!(black.j.abs() < 1e-9);
        assert_eq!(JzAzBz::new(0.0, 0.1, 0.1).to_srgb().to_u8(), [0, 0, 0]);
    }

    #[test]
    fn test_gray_has_no_hue() {
        let [x, y, z] = crate::white_point::illuminant::D65.chromaticity.tristimulus();
        let lch = Xyz::new(x * 0.5, y * 0.5, z * 0.5).to_jzazbz().to_jzczhz();
        assert!(lch.c < 1e-3, "{lch:?}");
    }
}
