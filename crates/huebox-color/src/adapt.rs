//! CAT02 von Kries chromatic adaptation.
//!
//! Both white points are moved into the CAT02 cone-response (LMS) basis, the
//! ratio of the two responses becomes a diagonal scale, and the result is
//! `M⁻¹ · diag(Ld/Ls, Md/Ms, Sd/Ss) · M`.
//!
//! # References
//!
//! - <https://en.wikipedia.org/wiki/CIECAM02#CAT02>
//! - <http://www.brucelindbloom.com/Eqn_ChromAdapt.html>

use std::sync::LazyLock;

use crate::math::Matrix;
use crate::white_point::Chromaticity;

/// CAT02 XYZ → LMS transform.
pub const CAT02_XYZ_TO_LMS: Matrix = Matrix::new(
    0.7328, 0.4296, -0.1624, //
    -0.7036, 1.6975, 0.0061, //
    0.0030, 0.0136, 0.9834,
);

/// CAT02 LMS → XYZ transform, the inverse of [`CAT02_XYZ_TO_LMS`].
pub static CAT02_LMS_TO_XYZ: LazyLock<Matrix> = LazyLock::new(|| CAT02_XYZ_TO_LMS.inverse());

/// Adaptation matrix from `src` white to `dst` white using CAT02.
///
/// Returns the identity when both whites are equal.
pub fn chromatic_adaptation_matrix(src: &Chromaticity, dst: &Chromaticity) -> Matrix {
    chromatic_adaptation_matrix_with(src, dst, &CAT02_XYZ_TO_LMS, &CAT02_LMS_TO_XYZ)
}

/// Adaptation matrix using a caller-supplied cone-response transform and its inverse.
pub fn chromatic_adaptation_matrix_with(
    src: &Chromaticity,
    dst: &Chromaticity,
    xyz_to_lms: &Matrix,
    lms_to_xyz: &Matrix,
) -> Matrix {
    if src == dst {
        return Matrix::IDENTITY;
    }
    let [sx, sy, sz] = src.tristimulus();
    let [dx, dy, dz] = dst.tristimulus();
    let [sl, sm, ss] = xyz_to_lms.dot_vector(sx, sy, sz);
    let [dl, dm, ds] = xyz_to_lms.dot_vector(dx, dy, dz);
    lms_to_xyz
        .dot_diagonal(dl / sl, dm / sm, ds / ss)
        .dot(xyz_to_lms)
}
