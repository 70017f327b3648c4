//! ICtCp from Rec. ITU-R BT.2100, for HDR and wide-gamut imagery.
//!
//! Components are absolute: XYZ and RGB inputs are interpreted as cd/m² and
//! pushed through the ST 2084 PQ curve. Always relative to D65.
//!
//! | Component | Description          | Range        |
//! | --------- | -------------------- | ------------ |
//! | `i`       | intensity            | `0.0..=1.0`  |
//! | `ct`      | tritan (blue-yellow) | `-0.5..=0.5` |
//! | `cp`      | protan (red-green)   | `-0.5..=0.5` |

use std::sync::LazyLock;

use super::{Rgb, Xyz};
use crate::math::Matrix;
use crate::rgb::{pq, spaces};

const RGB_TO_LMS: Matrix = Matrix::new(
    1688.0 / 4096.0,
    2146.0 / 4096.0,
    262.0 / 4096.0,
    683.0 / 4096.0,
    2951.0 / 4096.0,
    462.0 / 4096.0,
    99.0 / 4096.0,
    309.0 / 4096.0,
    3688.0 / 4096.0,
);

const LMS_TO_ICTCP: Matrix = Matrix::new(
    2048.0 / 4096.0,
    2048.0 / 4096.0,
    0.0,
    6610.0 / 4096.0,
    -13613.0 / 4096.0,
    7003.0 / 4096.0,
    17933.0 / 4096.0,
    -17390.0 / 4096.0,
    -543.0 / 4096.0,
);

/// Hunt-Pointer-Estevez cone response.
const HPE_XYZ_TO_LMS: Matrix = Matrix::new(
    0.4002, 0.7076, -0.0808, //
    -0.2263, 1.1653, 0.0457, //
    0.0, 0.0, 0.9182,
);

const CROSSTALK: Matrix = Matrix::new(
    0.92, 0.04, 0.04, //
    0.04, 0.92, 0.04, //
    0.04, 0.04, 0.92,
);

static LMS_TO_RGB: LazyLock<Matrix> = LazyLock::new(|| RGB_TO_LMS.inverse());
static ICTCP_TO_LMS: LazyLock<Matrix> = LazyLock::new(|| LMS_TO_ICTCP.inverse());
static XYZ_TO_LMS: LazyLock<Matrix> = LazyLock::new(|| CROSSTALK.dot(&HPE_XYZ_TO_LMS));
static LMS_TO_XYZ: LazyLock<Matrix> = LazyLock::new(|| XYZ_TO_LMS.inverse());

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ICtCp {
    pub i: f32,
    pub ct: f32,
    pub cp: f32,
    pub alpha: f32,
}

impl ICtCp {
    #[inline]
    pub fn new(i: f32, ct: f32, cp: f32) -> Self {
        Self {
            i,
            ct,
            cp,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// From D65-relative XYZ.
    pub(crate) fn from_xyz_d65(x: f32, y: f32, z: f32, alpha: f32) -> Self {
        let [l, m, s] = XYZ_TO_LMS.dot_vector(x, y, z);
        Self::from_lms(l, m, s, alpha)
    }

    /// From a BT.2020 color, through the BT.2100 RGB → LMS matrix.
    pub(crate) fn from_bt2020(rgb: &Rgb) -> Self {
        let [r, g, b] = rgb.to_linear();
        let [l, m, s] = RGB_TO_LMS.dot_vector(r, g, b);
        Self::from_lms(l, m, s, rgb.alpha)
    }

    fn from_lms(l: f32, m: f32, s: f32, alpha: f32) -> Self {
        let [i, ct, cp] = LMS_TO_ICTCP.dot_vector(pq::oetf(l), pq::oetf(m), pq::oetf(s));
        Self { i, ct, cp, alpha }
    }

    fn linear_lms(&self) -> [f32; 3] {
        ICTCP_TO_LMS
            .dot_vector(self.i, self.ct, self.cp)
            .map(pq::eotf)
    }

    pub fn to_xyz(&self) -> Xyz {
        let [l, m, s] = self.linear_lms();
        let [x, y, z] = LMS_TO_XYZ.dot_vector(l, m, s);
        Xyz::new(x, y, z).with_alpha(self.alpha)
    }

    pub fn to_bt2020(&self) -> Rgb {
        let [l, m, s] = self.linear_lms();
        let [r, g, b] = LMS_TO_RGB.dot_vector(l, m, s);
        let f = spaces::BT2020.transfer_functions();
        spaces::BT2020.color_with_alpha(f.oetf(r), f.oetf(g), f.oetf(b), self.alpha)
    }

    pub fn to_srgb(&self) -> Rgb {
        self.to_xyz().to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_zero_intensity() {
        let black = Xyz::new(0.0, 0.0, 0.0).to_ictcp();
        assert!(black.i.abs() < 1e-5, "{black:?}");
        assert!(black.ct.abs() < 1e-6);
        assert!(black.cp.abs() < 1e-6);
    }

    #[test]
    fn test_xyz_round_trip() {
        let xyz = Xyz::new(40.0, 50.0, 30.0).with_alpha(0.5);
        let ictcp = xyz.to_ictcp();
        assert!(ictcp.i > 0.0 && ictcp.i < 1.0);
        let back = ictcp.to_xyz();
        assert!((back.x - 40.0).abs() < 1e-2, "{back:?}");
        assert!((back.y - 50.0).abs() < 1e-2, "{back:?}");
        assert!((back.z - 30.0).abs() < 1e-2, "{back:?}");
        assert_eq!(back.alpha, 0.5);
    }

    #[test]
    fn test_bt2020_round_trip() {
        let rgb = spaces::BT2020.color(0.5, 0.4, 0.3);
        let back = ICtCp::from_bt2020(&rgb).to_bt2020();
        assert!((back.r - 0.5).abs() < 1e-3, "{back:?}");
        assert!((back.g - 0.4).abs() < 1e-3, "{back:?}");
        assert!((back.b - 0.3).abs() < 1e-3, "{back:?}");
    }

    #[test]
    fn test_neutral_has_no_chroma() {
        let gray = ICtCp::from_bt2020(&spaces::BT2020.color(0.5, 0.5, 0.5));
        assert!(gray.ct.abs() < 1e-3, "{gray:?}");
        assert!(gray.cp.abs() < 1e-3, "{gray:?}");
    }
}
