//! Oklab perceptual color space and its cylindrical form Oklch.
//!
//! Oklab is always relative to D65.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::{Rgb, Xyz};
use crate::math::{from_polar, to_polar};
use crate::rgb::{spaces, srgb_oetf};

/// A color in Oklab.
///
/// - `l`: lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
    pub alpha: f32,
}

impl Oklab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self {
            l,
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

    /// From linear sRGB through the M1 matrix, skipping XYZ.
    pub(crate) fn from_linear_srgb(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;
        Self::from_cone_response(l.cbrt(), m.cbrt(), s.cbrt(), alpha)
    }

    /// From nonlinear cone responses through the M2 matrix.
    pub(crate) fn from_cone_response(l: f64, m: f64, s: f64, alpha: f32) -> Self {
        Self {
            l: (0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s) as f32,
            a: (1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s) as f32,
            b: (0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s) as f32,
            alpha,
        }
    }

    /// Inverse M2, then cube.
    fn cone_response(&self) -> [f64; 3] {
        let (l, a, b) = (self.l as f64, self.a as f64, self.b as f64);
        let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = l - 0.0894841775 * a - 1.2914855480 * b;
        [l_.powi(3), m_.powi(3), s_.powi(3)]
    }

    /// Linear sRGB channels. Not clamped.
    pub fn to_linear_srgb(&self) -> [f32; 3] {
        let [l, m, s] = self.cone_response();
        [
            (4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s) as f32,
            (-1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s) as f32,
            (-0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s) as f32,
        ]
    }

    pub fn to_srgb(&self) -> Rgb {
        let [r, g, b] = self.to_linear_srgb();
        spaces::SRGB.color_with_alpha(srgb_oetf(r), srgb_oetf(g), srgb_oetf(b), self.alpha)
    }

    pub fn to_xyz(&self) -> Xyz {
        let [l, m, s] = self.cone_response();
        Xyz::new(
            (1.2270138511 * l - 0.5577999807 * m + 0.2812561490 * s) as f32,
            (-0.0405801784 * l + 1.1122568696 * m - 0.0716766787 * s) as f32,
            (-0.0763812845 * l - 0.4214819784 * m + 1.5861632204 * s) as f32,
        )
        .with_alpha(self.alpha)
    }

    pub fn to_oklch(&self) -> Oklch {
        let (c, h) = to_polar(self.a, self.b);
        Oklch {
            l: self.l,
            c,
            h,
            alpha: self.alpha,
        }
    }
}

/// Cylindrical Oklab: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    /// Hue in degrees; `NaN` when achromatic
    pub h: f32,
    pub alpha: f32,
}

impl Oklch {
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
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

    pub fn to_oklab(&self) -> Oklab {
        let (a, b) = from_polar(self.c, self.h);
        Oklab::new(self.l, a, b).with_alpha(self.alpha)
    }
}
