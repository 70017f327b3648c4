//! CIE L\*a\*b\* and L\*u\*v\* with their cylindrical LCh forms.
//!
//! All four are relative to a reference white. Converting into one of them
//! from a color with a different white point adapts with CAT02 first.

use super::xyz::{CIE_E, CIE_E_TIMES_K, CIE_K};
use super::Xyz;
use crate::math::{from_polar, to_polar};
use crate::white_point::{illuminant, WhitePoint};

/// CIE 1976 L\*a\*b\*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, `0.0..=100.0`
    pub l: f32,
    pub a: f32,
    pub b: f32,
    pub alpha: f32,
    pub white_point: WhitePoint,
}

impl Lab {
    /// An opaque L\*a\*b\* color relative to D65.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self::in_white_point(l, a, b, 1.0, illuminant::D65)
    }

    #[inline]
    pub fn in_white_point(l: f32, a: f32, b: f32, alpha: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            a,
            b,
            alpha,
            white_point,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// <http://www.brucelindbloom.com/Eqn_Lab_to_XYZ.html>
    pub fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::in_white_point(0.0, 0.0, 0.0, self.alpha, self.white_point);
        }
        let l = self.l as f64;
        let fy = (l + 16.0) / 116.0;
        let fz = fy - self.b as f64 / 200.0;
        let fx = self.a as f64 / 500.0 + fy;

        let yr = if l > CIE_E_TIMES_K {
            fy.powi(3)
        } else {
            l / CIE_K
        };
        let inverse = |f: f64| {
            let cubed = f.powi(3);
            if cubed > CIE_E {
                cubed
            } else {
                (116.0 * f - 16.0) / CIE_K
            }
        };
        let [wx, wy, wz] = self.white_point.chromaticity.tristimulus();
        Xyz::in_white_point(
            (inverse(fx) * wx as f64) as f32,
            (yr * wy as f64) as f32,
            (inverse(fz) * wz as f64) as f32,
            self.alpha,
            self.white_point,
        )
    }

    pub fn to_lchab(&self) -> LchAb {
        let (c, h) = to_polar(self.a, self.b);
        LchAb {
            l: self.l,
            c,
            h,
            alpha: self.alpha,
            white_point: self.white_point,
        }
    }
}

/// Cylindrical L\*a\*b\*: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchAb {
    pub l: f32,
    pub c: f32,
    /// Hue in degrees; `NaN` when achromatic
    pub h: f32,
    pub alpha: f32,
    pub white_point: WhitePoint,
}

impl LchAb {
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self::in_white_point(l, c, h, 1.0, illuminant::D65)
    }

    #[inline]
    pub fn in_white_point(l: f32, c: f32, h: f32, alpha: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            c,
            h,
            alpha,
            white_point,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn to_lab(&self) -> Lab {
        let (a, b) = from_polar(self.c, self.h);
        Lab::in_white_point(self.l, a, b, self.alpha, self.white_point)
    }
}

/// CIE 1976 L\*u\*v\*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    /// Lightness, `0.0..=100.0`
    pub l: f32,
    pub u: f32,
    pub v: f32,
    pub alpha: f32,
    pub white_point: WhitePoint,
}

impl Luv {
    #[inline]
    pub fn new(l: f32, u: f32, v: f32) -> Self {
        Self::in_white_point(l, u, v, 1.0, illuminant::D65)
    }

    #[inline]
    pub fn in_white_point(l: f32, u: f32, v: f32, alpha: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            u,
            v,
            alpha,
            white_point,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// <http://www.brucelindbloom.com/Eqn_Luv_to_XYZ.html>
    pub fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::in_white_point(0.0, 0.0, 0.0, self.alpha, self.white_point);
        }
        let [wx, wy, wz] = self.white_point.chromaticity.tristimulus().map(f64::from);
        let denominator = wx + 15.0 * wy + 3.0 * wz;
        let u0 = 4.0 * wx / denominator;
        let v0 = 9.0 * wy / denominator;

        let l = self.l as f64;
        let y = if l > CIE_E_TIMES_K {
            ((l + 16.0) / 116.0).powi(3)
        } else {
            l / CIE_K
        } * wy;

        let a = (52.0 * l / (self.u as f64 + 13.0 * l * u0) - 1.0) / 3.0;
        let b = -5.0 * y;
        let c = -1.0 / 3.0;
        let d = y * (39.0 * l / (self.v as f64 + 13.0 * l * v0) - 5.0);

        let x = (d - b) / (a - c);
        let z = x * a + b;
        Xyz::in_white_point(x as f32, y as f32, z as f32, self.alpha, self.white_point)
    }

    pub fn to_lchuv(&self) -> LchUv {
        let (c, h) = to_polar(self.u, self.v);
        LchUv {
            l: self.l,
            c,
            h,
            alpha: self.alpha,
            white_point: self.white_point,
        }
    }
}

/// Cylindrical L\*u\*v\*: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchUv {
    pub l: f32,
    pub c: f32,
    /// Hue in degrees; `NaN` when achromatic
    pub h: f32,
    pub alpha: f32,
    pub white_point: WhitePoint,
}

impl LchUv {
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self::in_white_point(l, c, h, 1.0, illuminant::D65)
    }

    #[inline]
    pub fn in_white_point(l: f32, c: f32, h: f32, alpha: f32, white_point: WhitePoint) -> Self {
        Self {
            l,
            c,
            h,
            alpha,
            white_point,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn to_luv(&self) -> Luv {
        let (u, v) = from_polar(self.c, self.h);
        Luv::in_white_point(self.l, u, v, self.alpha, self.white_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    fn assert_close(actual: f32, expected: f32, epsilon: f32) {
        assert!(
            (actual - expected).abs() <= epsilon,
            "got {actual}, expected {expected}"
        );
    }

    #[test]
    fn test_srgb_red_to_lab_d65() {
        let lab = Rgb::new(1.0, 0.0, 0.0).to_xyz().to_lab();
        assert_close(lab.l, 53.2408, 1e-2);
        assert_close(lab.a, 80.0925, 2e-2);
        assert_close(lab.b, 67.2032, 2e-2);
    }

    #[test]
    fn test_lab_to_xyz_inverts() {
        let xyz = Xyz::new(0.2, 0.3, 0.4);
        let back = xyz.to_lab().to_xyz();
        assert_close(back.x, 0.2, 1e-5);
        assert_close(back.y, 0.3, 1e-5);
        assert_close(back.z, 0.4, 1e-5);

        let dark = Xyz::new(0.001, 0.002, 0.003);
        let back = dark.to_lab().to_xyz();
        assert_close(back.y, 0.002, 1e-6);
    }

    #[test]
    fn test_black_keeps_alpha() {
        let xyz = Lab::new(0.0, 0.0, 0.0).with_alpha(0.25).to_xyz();
        assert_eq!((xyz.x, xyz.y, xyz.z, xyz.alpha), (0.0, 0.0, 0.0, 0.25));
    }

    #[test]
    fn test_luv_to_xyz_inverts() {
        let xyz = Xyz::new(0.2, 0.3, 0.4);
        let back = xyz.to_luv().to_xyz();
        assert_close(back.x, 0.2, 1e-5);
        assert_close(back.y, 0.3, 1e-5);
        assert_close(back.z, 0.4, 1e-5);
    }

    #[test]
    fn test_lch_polar_forms() {
        let lch = Lab::new(50.0, 0.0, 20.0).to_lchab();
        assert_close(lch.c, 20.0, 1e-5);
        assert_close(lch.h, 90.0, 1e-4);

        let gray = Lab::new(50.0, 0.0, 0.0).to_lchab();
        assert!(gray.h.is_nan());
        assert_eq!(gray.to_lab().a, 0.0);

        let luv = LchUv::new(40.0, 10.0, 180.0).to_luv();
        assert_close(luv.u, -10.0, 1e-5);
        assert_close(luv.v, 0.0, 1e-5);
    }
}
