//! Precomputed RGB → RGB conversions.

use super::RgbColorSpace;
use crate::adapt::chromatic_adaptation_matrix;
use crate::math::Matrix;
use crate::model::Rgb;
use crate::white_point::Chromaticity;

/// Linear-light transform from `src` primaries to `dst` primaries, adapting
/// with CAT02 when the white points differ.
pub(crate) fn rgb_to_rgb_matrix(src: &RgbColorSpace, dst: &RgbColorSpace) -> Matrix {
    if src.white_point() == dst.white_point() {
        dst.matrix_from_xyz().dot(&src.matrix_to_xyz())
    } else {
        let adaptation = chromatic_adaptation_matrix(
            &src.white_point().chromaticity,
            &dst.white_point().chromaticity,
        );
        dst.matrix_from_xyz()
            .dot(&adaptation)
            .dot(&src.matrix_to_xyz())
    }
}

/// Converts colors from one RGB space to another with a single cached matrix.
///
/// Equivalent to [`Rgb::convert_to`], but the composed matrix is built once,
/// which matters when converting many colors between the same pair of spaces.
#[derive(Debug, Clone, Copy)]
pub struct RgbConverter {
    src: RgbColorSpace,
    dst: RgbColorSpace,
    transform: Matrix,
}

impl RgbConverter {
    pub fn new(src: RgbColorSpace, dst: RgbColorSpace) -> Self {
        Self {
            src,
            dst,
            transform: rgb_to_rgb_matrix(&src, &dst),
        }
    }

    pub fn source(&self) -> RgbColorSpace {
        self.src
    }

    pub fn destination(&self) -> RgbColorSpace {
        self.dst
    }

    /// Convert `rgb` into the destination space.
    ///
    /// A color that is not in the source space is first brought there with
    /// [`Rgb::convert_to`].
    pub fn convert(&self, rgb: &Rgb) -> Rgb {
        let rgb = if rgb.space == self.src {
            *rgb
        } else {
            rgb.convert_to(&self.src)
        };
        let fs = self.src.transfer_functions();
        let fd = self.dst.transfer_functions();
        let [r, g, b] = self
            .transform
            .dot_vector(fs.eotf(rgb.r), fs.eotf(rgb.g), fs.eotf(rgb.b));
        self.dst
            .color_with_alpha(fd.oetf(r), fd.oetf(g), fd.oetf(b), rgb.alpha)
    }
}

/// Adapts RGB colors captured under a source white to a space's own white point.
///
/// Typical use is white balancing: pass the chromaticity of a pixel that
/// should have been white, then adapt every pixel of the image.
#[derive(Debug, Clone, Copy)]
pub struct ChromaticAdapter {
    space: RgbColorSpace,
    transform: Matrix,
}

impl ChromaticAdapter {
    pub fn new(space: RgbColorSpace, source_white: Chromaticity) -> Self {
        let adaptation =
            chromatic_adaptation_matrix(&source_white, &space.white_point().chromaticity);
        Self {
            space,
            transform: space
                .matrix_from_xyz()
                .dot(&adaptation)
                .dot(&space.matrix_to_xyz()),
        }
    }

    pub fn space(&self) -> RgbColorSpace {
        self.space
    }

    /// Adapt a color in this adapter's space. The alpha channel is kept.
    pub fn adapt(&self, color: &Rgb) -> Rgb {
        let f = self.space.transfer_functions();
        let [r, g, b] = self
            .transform
            .dot_vector(f.eotf(color.r), f.eotf(color.g), f.eotf(color.b));
        self.space
            .color_with_alpha(f.oetf(r), f.oetf(g), f.oetf(b), color.alpha)
    }

    /// Adapt a batch of colors in place.
    pub fn adapt_all(&self, colors: &mut [Rgb]) {
        for color in colors.iter_mut() {
            *color = self.adapt(color);
        }
    }
}
