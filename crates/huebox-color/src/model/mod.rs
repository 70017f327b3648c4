//! Color models and the [`Color`] enum that dispatches between them.
//!
//! Each model is a small `Copy` struct with public `f32` fields and its own
//! direct conversions. [`Color`] is the closed set of all models. Its `to_*`
//! methods route through as few intermediate spaces as possible:
//!
//! - polar and rectangular pairs convert directly (HSV ↔ HSL, Lab ↔ LCHab,
//!   Oklab ↔ Oklch, ...)
//! - the sRGB-derived models (HSL, HSV, HWB, CMYK, ANSI) go through sRGB
//! - everything else goes through XYZ, adapting white points with CAT02
//!
//! A conversion into the color's own space returns it unchanged.

mod ansi;
mod cmyk;
mod hsl;
mod ictcp;
mod jzazbz;
mod lab;
mod oklab;
mod rgb;
mod xyz;

pub use ansi::{Ansi16, Ansi256};
pub use cmyk::Cmyk;
pub use hsl::{Hsl, Hsv, Hwb};
pub use ictcp::ICtCp;
pub use jzazbz::{JzAzBz, JzCzHz};
pub use lab::{Lab, LchAb, LchUv, Luv};
pub use oklab::{Oklab, Oklch};
pub use rgb::Rgb;
pub use xyz::Xyz;

use crate::rgb::{spaces, RgbColorSpace};
use crate::space::ColorSpace;
use crate::white_point::WhitePoint;

/// A color in any supported model.
///
/// # Example
/// ```
/// use huebox_color::{Color, Rgb};
///
/// let red = Color::from(Rgb::new(1.0, 0.0, 0.0));
/// let lch = red.to_oklch();
/// assert!((lch.h - 29.23).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Hwb(Hwb),
    Cmyk(Cmyk),
    Ansi16(Ansi16),
    Ansi256(Ansi256),
    Xyz(Xyz),
    Lab(Lab),
    LchAb(LchAb),
    Luv(Luv),
    LchUv(LchUv),
    Oklab(Oklab),
    Oklch(Oklch),
    JzAzBz(JzAzBz),
    JzCzHz(JzCzHz),
    ICtCp(ICtCp),
}

macro_rules! impl_from_model {
    ($($model:ident),* $(,)?) => {
        $(
            impl From<$model> for Color {
                #[inline]
                fn from(color: $model) -> Self {
                    Color::$model(color)
                }
            }
        )*
    };
}

impl_from_model!(
    Rgb, Hsl, Hsv, Hwb, Cmyk, Ansi16, Ansi256, Xyz, Lab, LchAb, Luv, LchUv, Oklab, Oklch, JzAzBz,
    JzCzHz, ICtCp,
);

impl Color {
    /// The space this color belongs to, including its white point or RGB
    /// space where the model is parameterized.
    pub fn space(&self) -> ColorSpace {
        match self {
            Color::Rgb(c) => ColorSpace::Rgb(c.space),
            Color::Hsl(_) => ColorSpace::Hsl,
            Color::Hsv(_) => ColorSpace::Hsv,
            Color::Hwb(_) => ColorSpace::Hwb,
            Color::Cmyk(_) => ColorSpace::Cmyk,
            Color::Ansi16(_) => ColorSpace::Ansi16,
            Color::Ansi256(_) => ColorSpace::Ansi256,
            Color::Xyz(c) => ColorSpace::Xyz(c.white_point),
            Color::Lab(c) => ColorSpace::Lab(c.white_point),
            Color::LchAb(c) => ColorSpace::LchAb(c.white_point),
            Color::Luv(c) => ColorSpace::Luv(c.white_point),
            Color::LchUv(c) => ColorSpace::LchUv(c.white_point),
            Color::Oklab(_) => ColorSpace::Oklab,
            Color::Oklch(_) => ColorSpace::Oklch,
            Color::JzAzBz(_) => ColorSpace::JzAzBz,
            Color::JzCzHz(_) => ColorSpace::JzCzHz,
            Color::ICtCp(_) => ColorSpace::ICtCp,
        }
    }

    /// Opacity. `NaN` is the unspecified sentinel; ANSI codes are always
    /// opaque.
    pub fn alpha(&self) -> f32 {
        match self {
            Color::Rgb(c) => c.alpha,
            Color::Hsl(c) => c.alpha,
            Color::Hsv(c) => c.alpha,
            Color::Hwb(c) => c.alpha,
            Color::Cmyk(c) => c.alpha,
            Color::Ansi16(_) | Color::Ansi256(_) => 1.0,
            Color::Xyz(c) => c.alpha,
            Color::Lab(c) => c.alpha,
            Color::LchAb(c) => c.alpha,
            Color::Luv(c) => c.alpha,
            Color::LchUv(c) => c.alpha,
            Color::Oklab(c) => c.alpha,
            Color::Oklch(c) => c.alpha,
            Color::JzAzBz(c) => c.alpha,
            Color::JzCzHz(c) => c.alpha,
            Color::ICtCp(c) => c.alpha,
        }
    }

    /// Components in the order of [`ColorSpace::components`], alpha last.
    pub fn to_array(&self) -> Vec<f32> {
        match *self {
            Color::Rgb(c) => vec![c.r, c.g, c.b, c.alpha],
            Color::Hsl(c) => vec![c.h, c.s, c.l, c.alpha],
            Color::Hsv(c) => vec![c.h, c.s, c.v, c.alpha],
            Color::Hwb(c) => vec![c.h, c.w, c.b, c.alpha],
            Color::Cmyk(c) => vec![c.c, c.m, c.y, c.k, c.alpha],
            Color::Ansi16(c) => vec![c.code as f32, 1.0],
            Color::Ansi256(c) => vec![c.code as f32, 1.0],
            Color::Xyz(c) => vec![c.x, c.y, c.z, c.alpha],
            Color::Lab(c) => vec![c.l, c.a, c.b, c.alpha],
            Color::LchAb(c) => vec![c.l, c.c, c.h, c.alpha],
            Color::Luv(c) => vec![c.l, c.u, c.v, c.alpha],
            Color::LchUv(c) => vec![c.l, c.c, c.h, c.alpha],
            Color::Oklab(c) => vec![c.l, c.a, c.b, c.alpha],
            Color::Oklch(c) => vec![c.l, c.c, c.h, c.alpha],
            Color::JzAzBz(c) => vec![c.j, c.a, c.b, c.alpha],
            Color::JzCzHz(c) => vec![c.j, c.c, c.h, c.alpha],
            Color::ICtCp(c) => vec![c.i, c.ct, c.cp, c.alpha],
        }
    }

    /// Convert into `space`. Shorthand for [`ColorSpace::convert`].
    #[inline]
    pub fn convert_to(&self, space: &ColorSpace) -> Color {
        space.convert(self)
    }

    /// Rebuild this color from its component array after `f` edits it in
    /// place.
    ///
    /// # Example
    /// ```
    /// use huebox_color::{Color, Hsl};
    ///
    /// let c = Color::from(Hsl::new(120.0, 0.5, 0.5));
    /// let darker = c.map(|_, comps| comps[2] *= 0.5);
    /// assert_eq!(darker.to_hsl().l, 0.25);
    /// ```
    pub fn map(&self, f: impl FnOnce(&ColorSpace, &mut [f32])) -> Color {
        let space = self.space();
        let mut components = self.to_array();
        f(&space, &mut components);
        space.build(&components)
    }

    /// True for the models that are defined on top of sRGB.
    fn is_srgb_family(&self) -> bool {
        matches!(
            self,
            Color::Hsl(_)
                | Color::Hsv(_)
                | Color::Hwb(_)
                | Color::Cmyk(_)
                | Color::Ansi16(_)
                | Color::Ansi256(_)
        )
    }

    pub fn to_srgb(&self) -> Rgb {
        match self {
            Color::Rgb(c) => c.to_srgb(),
            Color::Hsl(c) => c.to_srgb(),
            Color::Hsv(c) => c.to_srgb(),
            Color::Hwb(c) => c.to_srgb(),
            Color::Cmyk(c) => c.to_srgb(),
            Color::Ansi16(c) => c.to_srgb(),
            Color::Ansi256(c) => c.to_srgb(),
            Color::Xyz(c) => c.to_srgb(),
            Color::Oklab(c) => c.to_srgb(),
            Color::Oklch(c) => c.to_oklab().to_srgb(),
            Color::JzAzBz(c) => c.to_srgb(),
            Color::JzCzHz(c) => c.to_jzazbz().to_srgb(),
            Color::ICtCp(c) => c.to_srgb(),
            Color::Lab(_) | Color::LchAb(_) | Color::Luv(_) | Color::LchUv(_) => {
                self.to_xyz().to_srgb()
            }
        }
    }

    /// Encode in `space`.
    pub fn to_rgb(&self, space: &RgbColorSpace) -> Rgb {
        match self {
            Color::Rgb(c) => c.convert_to(space),
            Color::ICtCp(c) if *space == *spaces::BT2020 => c.to_bt2020(),
            Color::Oklab(_) | Color::Oklch(_) if *space == *spaces::SRGB => self.to_srgb(),
            _ if self.is_srgb_family() => self.to_srgb().convert_to(space),
            _ => self.to_xyz().to_rgb(space),
        }
    }

    /// XYZ relative to this color's own reference white.
    pub fn to_xyz(&self) -> Xyz {
        match self {
            Color::Rgb(c) => c.to_xyz(),
            Color::Xyz(c) => *c,
            Color::Lab(c) => c.to_xyz(),
            Color::LchAb(c) => c.to_lab().to_xyz(),
            Color::Luv(c) => c.to_xyz(),
            Color::LchUv(c) => c.to_luv().to_xyz(),
            Color::Oklab(c) => c.to_xyz(),
            Color::Oklch(c) => c.to_oklab().to_xyz(),
            Color::JzAzBz(c) => c.to_xyz(),
            Color::JzCzHz(c) => c.to_jzazbz().to_xyz(),
            Color::ICtCp(c) => c.to_xyz(),
            Color::Hsl(_)
            | Color::Hsv(_)
            | Color::Hwb(_)
            | Color::Cmyk(_)
            | Color::Ansi16(_)
            | Color::Ansi256(_) => self.to_srgb().to_xyz(),
        }
    }

    /// XYZ relative to `white_point`.
    #[inline]
    pub fn to_xyz_in(&self, white_point: WhitePoint) -> Xyz {
        self.to_xyz().adapt_to(white_point)
    }

    pub fn to_lab(&self, white_point: WhitePoint) -> Lab {
        match self {
            Color::Lab(c) if c.white_point == white_point => *c,
            Color::LchAb(c) if c.white_point == white_point => c.to_lab(),
            _ => self.to_xyz_in(white_point).to_lab(),
        }
    }

    pub fn to_lchab(&self, white_point: WhitePoint) -> LchAb {
        match self {
            Color::LchAb(c) if c.white_point == white_point => *c,
            _ => self.to_lab(white_point).to_lchab(),
        }
    }

    pub fn to_luv(&self, white_point: WhitePoint) -> Luv {
        match self {
            Color::Luv(c) if c.white_point == white_point => *c,
            Color::LchUv(c) if c.white_point == white_point => c.to_luv(),
            _ => self.to_xyz_in(white_point).to_luv(),
        }
    }

    pub fn to_lchuv(&self, white_point: WhitePoint) -> LchUv {
        match self {
            Color::LchUv(c) if c.white_point == white_point => *c,
            _ => self.to_luv(white_point).to_lchuv(),
        }
    }

    pub fn to_oklab(&self) -> Oklab {
        match self {
            Color::Oklab(c) => *c,
            Color::Oklch(c) => c.to_oklab(),
            Color::Rgb(c) => c.to_oklab(),
            _ if self.is_srgb_family() => self.to_srgb().to_oklab(),
            _ => self.to_xyz().to_oklab(),
        }
    }

    pub fn to_oklch(&self) -> Oklch {
        match self {
            Color::Oklch(c) => *c,
            _ => self.to_oklab().to_oklch(),
        }
    }

    pub fn to_jzazbz(&self) -> JzAzBz {
        match self {
            Color::JzAzBz(c) => *c,
            Color::JzCzHz(c) => c.to_jzazbz(),
            _ => self.to_xyz().to_jzazbz(),
        }
    }

    pub fn to_jzczhz(&self) -> JzCzHz {
        match self {
            Color::JzCzHz(c) => *c,
            _ => self.to_jzazbz().to_jzczhz(),
        }
    }

    /// BT.2020 colors take the direct BT.2100 route; everything else goes
    /// through XYZ.
    pub fn to_ictcp(&self) -> ICtCp {
        match self {
            Color::ICtCp(c) => *c,
            Color::Rgb(c) if c.space == *spaces::BT2020 => ICtCp::from_bt2020(c),
            _ => self.to_xyz().to_ictcp(),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Hsl(c) => *c,
            Color::Hsv(c) => c.to_hsl(),
            _ => self.to_srgb().to_hsl(),
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        match self {
            Color::Hsv(c) => *c,
            Color::Hsl(c) => c.to_hsv(),
            Color::Hwb(c) => c.to_hsv(),
            _ => self.to_srgb().to_hsv(),
        }
    }

    pub fn to_hwb(&self) -> Hwb {
        match self {
            Color::Hwb(c) => *c,
            Color::Hsv(c) => c.to_hwb(),
            _ => self.to_srgb().to_hwb(),
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            Color::Cmyk(c) => *c,
            _ => self.to_srgb().to_cmyk(),
        }
    }

    pub fn to_ansi16(&self) -> Ansi16 {
        match self {
            Color::Ansi16(c) => *c,
            Color::Ansi256(c) => c.to_ansi16(),
            _ => self.to_srgb().to_ansi16(),
        }
    }

    pub fn to_ansi256(&self) -> Ansi256 {
        match self {
            Color::Ansi256(c) => *c,
            Color::Ansi16(c) => c.to_ansi256(),
            _ => self.to_srgb().to_ansi256(),
        }
    }
}
