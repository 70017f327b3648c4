//! CIE 1931 XYZ, the connection space every cross-family conversion passes
//! through.

use super::{ICtCp, JzAzBz, Lab, Luv, Oklab, Rgb};
use crate::adapt::{chromatic_adaptation_matrix, chromatic_adaptation_matrix_with};
use crate::math::Matrix;
use crate::rgb::{spaces, RgbColorSpace};
use crate::white_point::{illuminant, Chromaticity, WhitePoint};

/// CIE ε = 216 / 24389
pub(crate) const CIE_E: f64 = 216.0 / 24389.0;
/// CIE κ = 24389 / 27
pub(crate) const CIE_K: f64 = 24389.0 / 27.0;
/// κ·ε = 8
pub(crate) const CIE_E_TIMES_K: f64 = 8.0;

/// Tristimulus values relative to a reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub alpha: f32,
    pub white_point: WhitePoint,
}

impl Xyz {
    /// An opaque XYZ color relative to D65.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::in_white_point(x, y, z, 1.0, illuminant::D65)
    }

    #[inline]
    pub fn in_white_point(x: f32, y: f32, z: f32, alpha: f32, white_point: WhitePoint) -> Self {
        Self {
            x,
            y,
            z,
            alpha,
            white_point,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Adapt to another reference white with CAT02.
    ///
    /// Returns `self` unchanged when the white points already match.
    pub fn adapt_to(&self, white_point: WhitePoint) -> Xyz {
        if white_point == self.white_point {
            return *self;
        }
        let m = chromatic_adaptation_matrix(
            &self.white_point.chromaticity,
            &white_point.chromaticity,
        );
        self.transformed(&m, white_point)
    }

    /// Adapt with a custom cone-response matrix and its inverse.
    pub fn adapt_to_with(
        &self,
        white_point: WhitePoint,
        xyz_to_lms: &Matrix,
        lms_to_xyz: &Matrix,
    ) -> Xyz {
        if white_point == self.white_point {
            return *self;
        }
        let m = chromatic_adaptation_matrix_with(
            &self.white_point.chromaticity,
            &white_point.chromaticity,
            xyz_to_lms,
            lms_to_xyz,
        );
        self.transformed(&m, white_point)
    }

    fn transformed(&self, m: &Matrix, white_point: WhitePoint) -> Xyz {
        let [x, y, z] = m.dot_vector(self.x, self.y, self.z);
        Xyz::in_white_point(x, y, z, self.alpha, white_point)
    }

    /// Encode in an RGB space, adapting to its white point first.
    pub fn to_rgb(&self, space: &RgbColorSpace) -> Rgb {
        let xyz = self.adapt_to(space.white_point());
        let f = space.transfer_functions();
        let [r, g, b] = space.matrix_from_xyz().dot_vector(xyz.x, xyz.y, xyz.z);
        space.color_with_alpha(f.oetf(r), f.oetf(g), f.oetf(b), self.alpha)
    }

    #[inline]
    pub fn to_srgb(&self) -> Rgb {
        self.to_rgb(&spaces::SRGB)
    }

    /// <http://www.brucelindbloom.com/Eqn_XYZ_to_Lab.html>
    pub fn to_lab(&self) -> Lab {
        fn f(t: f64) -> f64 {
            if t > CIE_E {
                t.cbrt()
            } else {
                (t * CIE_K + 16.0) / 116.0
            }
        }
        let [wx, wy, wz] = self.white_point.chromaticity.tristimulus();
        let fx = f(self.x as f64 / wx as f64);
        let fy = f(self.y as f64 / wy as f64);
        let fz = f(self.z as f64 / wz as f64);

        Lab {
            l: (116.0 * fy - 16.0) as f32,
            a: (500.0 * (fx - fy)) as f32,
            b: (200.0 * (fy - fz)) as f32,
            alpha: self.alpha,
            white_point: self.white_point,
        }
    }

    /// <http://www.brucelindbloom.com/Eqn_XYZ_to_Luv.html>
    pub fn to_luv(&self) -> Luv {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        let [wx, wy, wz] = self.white_point.chromaticity.tristimulus().map(f64::from);

        let denominator = x + 15.0 * y + 3.0 * z;
        let (u_prime, v_prime) = if denominator == 0.0 {
            (0.0, 0.0)
        } else {
            (4.0 * x / denominator, 9.0 * y / denominator)
        };
        let denominator_ref = wx + 15.0 * wy + 3.0 * wz;
        let u_ref = 4.0 * wx / denominator_ref;
        let v_ref = 9.0 * wy / denominator_ref;

        let yr = y / wy;
        let l = if yr > CIE_E {
            116.0 * yr.cbrt() - 16.0
        } else {
            CIE_K * yr
        };

        Luv {
            l: l.clamp(0.0, 100.0) as f32,
            u: (13.0 * l * (u_prime - u_ref)) as f32,
            v: (13.0 * l * (v_prime - v_ref)) as f32,
            alpha: self.alpha,
            white_point: self.white_point,
        }
    }

    /// <https://bottosson.github.io/posts/oklab/#converting-from-xyz-to-oklab>
    pub fn to_oklab(&self) -> Oklab {
        let xyz = self.adapt_to(illuminant::D65);
        let (x, y, z) = (xyz.x as f64, xyz.y as f64, xyz.z as f64);
        let l = 0.8189330101 * x + 0.3618667424 * y - 0.1288597137 * z;
        let m = 0.0329845436 * x + 0.9293118715 * y + 0.0361456387 * z;
        let s = 0.0482003018 * x + 0.2643662691 * y + 0.6338517070 * z;
        Oklab::from_cone_response(l.cbrt(), m.cbrt(), s.cbrt(), self.alpha)
    }

    /// Safdar et al. 2017, relative to D65.
    pub fn to_jzazbz(&self) -> JzAzBz {
        fn pq(x: f64) -> f64 {
            let xx = (x * 1e-4).powf(0.1593017578125);
            let v = ((0.8359375 + 18.8515625 * xx) / (1.0 + 18.6875 * xx)).powf(134.034375);
            if v.is_nan() {
                0.0
            } else {
                v
            }
        }

        let xyz = self.adapt_to(illuminant::D65);
        let (x, y, z) = (xyz.x as f64, xyz.y as f64, xyz.z as f64);
        let lp = pq(0.674207838 * x + 0.382799340 * y - 0.047570458 * z);
        let mp = pq(0.149284160 * x + 0.739628340 * y + 0.083327300 * z);
        let sp = pq(0.070941080 * x + 0.174768000 * y + 0.670970020 * z);
        let iz = 0.5 * (lp + mp);
        JzAzBz {
            j: ((0.44 * iz) / (1.0 - 0.56 * iz) - JzAzBz::D0) as f32,
            a: (3.524000 * lp - 4.066708 * mp + 0.542708 * sp) as f32,
            b: (0.199076 * lp + 1.096799 * mp - 1.295875 * sp) as f32,
            alpha: self.alpha,
        }
    }

    /// Rec. ITU-R BT.2100 ICtCp, relative to D65.
    pub fn to_ictcp(&self) -> ICtCp {
        let xyz = self.adapt_to(illuminant::D65);
        ICtCp::from_xyz_d65(xyz.x, xyz.y, xyz.z, self.alpha)
    }

    /// Project to `xyY`. Black takes the white point's chromaticity with zero
    /// luminance.
    pub fn to_chromaticity(&self) -> Chromaticity {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            let wp = self.white_point.chromaticity;
            return Chromaticity::with_luminance(wp.x, wp.y, 0.0);
        }
        let sum = self.x + self.y + self.z;
        Chromaticity::with_luminance(self.x / sum, self.y / sum, self.y)
    }
}
