//! RGB color spaces.
//!
//! An [`RgbColorSpace`] is plain data: a white point, a pair of
//! [`TransferFunctions`] and three primaries. The primaries→XYZ matrix and its
//! inverse are derived once in [`RgbColorSpace::new`] and never change.
//!
//! ```
//! use huebox_color::rgb::{spaces, RgbColorSpace};
//!
//! let srgb: RgbColorSpace = *spaces::SRGB;
//! let white = srgb.color(1.0, 1.0, 1.0);
//! let xyz = white.to_xyz();
//! assert!((xyz.y - 1.0).abs() < 1e-5);
//! ```

mod converter;
mod curves;
pub mod spaces;
mod transfer;

pub use converter::{ChromaticAdapter, RgbConverter};
pub use curves::{srgb_eotf, srgb_oetf};
pub use transfer::TransferFunctions;

pub(crate) use converter::rgb_to_rgb_matrix;
pub(crate) use curves::pq;

use std::hash::{Hash, Hasher};

use crate::math::Matrix;
use crate::model::Rgb;
use crate::white_point::{Chromaticity, WhitePoint};

/// A named RGB color space.
///
/// Two spaces compare equal when their name, white point, transfer functions
/// and primaries match; the derived matrices are not compared.
#[derive(Debug, Clone, Copy)]
pub struct RgbColorSpace {
    name: &'static str,
    white_point: WhitePoint,
    transfer: TransferFunctions,
    primaries: [Chromaticity; 3],
    to_xyz: Matrix,
    from_xyz: Matrix,
}

impl RgbColorSpace {
    /// Build a space from its white point, transfer functions and the
    /// chromaticities of its red, green and blue primaries.
    pub fn new(
        name: &'static str,
        white_point: WhitePoint,
        transfer: TransferFunctions,
        r: Chromaticity,
        g: Chromaticity,
        b: Chromaticity,
    ) -> Self {
        let to_xyz = primaries_to_xyz_matrix(&white_point, &r, &g, &b);
        Self {
            name,
            white_point,
            transfer,
            primaries: [r, g, b],
            to_xyz,
            from_xyz: to_xyz.inverse(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn white_point(&self) -> WhitePoint {
        self.white_point
    }

    #[inline]
    pub fn transfer_functions(&self) -> TransferFunctions {
        self.transfer
    }

    /// Chromaticities of the red, green and blue primaries.
    #[inline]
    pub fn primaries(&self) -> [Chromaticity; 3] {
        self.primaries
    }

    /// Linear RGB → XYZ, relative to [`Self::white_point`].
    #[inline]
    pub fn matrix_to_xyz(&self) -> Matrix {
        self.to_xyz
    }

    /// XYZ → linear RGB, the inverse of [`Self::matrix_to_xyz`].
    #[inline]
    pub fn matrix_from_xyz(&self) -> Matrix {
        self.from_xyz
    }

    /// An opaque color in this space.
    #[inline]
    pub fn color(&self, r: f32, g: f32, b: f32) -> Rgb {
        Rgb::in_space(r, g, b, 1.0, *self)
    }

    #[inline]
    pub fn color_with_alpha(&self, r: f32, g: f32, b: f32, alpha: f32) -> Rgb {
        Rgb::in_space(r, g, b, alpha, *self)
    }

    /// A converter that maps colors in this space into `destination`.
    pub fn converter_to(&self, destination: &RgbColorSpace) -> RgbConverter {
        RgbConverter::new(*self, *destination)
    }

    /// An adapter that maps colors captured under `source_white` to this
    /// space's white point.
    pub fn chromatic_adapter(&self, source_white: Chromaticity) -> ChromaticAdapter {
        ChromaticAdapter::new(*self, source_white)
    }
}

impl PartialEq for RgbColorSpace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.white_point == other.white_point
            && self.transfer == other.transfer
            && self.primaries == other.primaries
    }
}

impl Eq for RgbColorSpace {}

impl Hash for RgbColorSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.white_point.hash(state);
        self.transfer.hash(state);
        self.primaries.hash(state);
    }
}

impl std::fmt::Display for RgbColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// SMPTE RP 177-1993: scale the primaries so that RGB (1, 1, 1) lands on the
/// white point.
fn primaries_to_xyz_matrix(
    white_point: &WhitePoint,
    r: &Chromaticity,
    g: &Chromaticity,
    b: &Chromaticity,
) -> Matrix {
    let primaries = Matrix::new(
        r.x, g.x, b.x, //
        r.y, g.y, b.y, //
        r.z(), g.z(), b.z(),
    );
    let [wx, wy, wz] = white_point.chromaticity.tristimulus();
    let [sr, sg, sb] = primaries.inverse().dot_vector(wx, wy, wz);
    primaries.dot_diagonal(sr, sg, sb)
}
