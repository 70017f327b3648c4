//! Color spaces as data.
//!
//! [`ColorSpace`] names one member of the closed set of supported models,
//! carrying the white point or RGB space where the model is parameterized.
//! It describes the component layout of its colors ([`ComponentInfo`]) and
//! builds colors from component arrays ([`ColorSpace::create`]) or from any
//! other color ([`ColorSpace::convert`]).

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::model::{
    Ansi16, Ansi256, Cmyk, Color, Hsl, Hsv, Hwb, ICtCp, JzAzBz, JzCzHz, Lab, LchAb, LchUv, Luv,
    Oklab, Oklch, Rgb, Xyz,
};
use crate::rgb::{spaces, RgbColorSpace};
use crate::white_point::{illuminant, WhitePoint};

/// Metadata for one entry of a color's component array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentInfo {
    pub name: &'static str,
    /// Angular component in degrees, interpolated modulo 360
    pub is_polar: bool,
    /// Nominal lower bound. Values outside the range are still valid.
    pub min: f32,
    /// Nominal upper bound
    pub max: f32,
}

impl ComponentInfo {
    const fn new(name: &'static str, min: f32, max: f32) -> Self {
        Self {
            name,
            is_polar: false,
            min,
            max,
        }
    }

    const fn hue(name: &'static str) -> Self {
        Self {
            name,
            is_polar: true,
            min: 0.0,
            max: 360.0,
        }
    }
}

const ALPHA: ComponentInfo = ComponentInfo::new("alpha", 0.0, 1.0);

const RGB_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("r", 0.0, 1.0),
    ComponentInfo::new("g", 0.0, 1.0),
    ComponentInfo::new("b", 0.0, 1.0),
    ALPHA,
];
const HSL_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::hue("h"),
    ComponentInfo::new("s", 0.0, 1.0),
    ComponentInfo::new("l", 0.0, 1.0),
    ALPHA,
];
const HSV_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::hue("h"),
    ComponentInfo::new("s", 0.0, 1.0),
    ComponentInfo::new("v", 0.0, 1.0),
    ALPHA,
];
const HWB_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::hue("h"),
    ComponentInfo::new("w", 0.0, 1.0),
    ComponentInfo::new("b", 0.0, 1.0),
    ALPHA,
];
const CMYK_COMPONENTS: [ComponentInfo; 5] = [
    ComponentInfo::new("c", 0.0, 1.0),
    ComponentInfo::new("m", 0.0, 1.0),
    ComponentInfo::new("y", 0.0, 1.0),
    ComponentInfo::new("k", 0.0, 1.0),
    ALPHA,
];
const ANSI16_COMPONENTS: [ComponentInfo; 2] = [ComponentInfo::new("code", 30.0, 107.0), ALPHA];
const ANSI256_COMPONENTS: [ComponentInfo; 2] = [ComponentInfo::new("code", 0.0, 255.0), ALPHA];
const XYZ_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("x", 0.0, 1.0),
    ComponentInfo::new("y", 0.0, 1.0),
    ComponentInfo::new("z", 0.0, 1.0),
    ALPHA,
];
const LAB_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 100.0),
    ComponentInfo::new("a", -128.0, 128.0),
    ComponentInfo::new("b", -128.0, 128.0),
    ALPHA,
];
const LCHAB_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 100.0),
    ComponentInfo::new("c", 0.0, 150.0),
    ComponentInfo::hue("h"),
    ALPHA,
];
const LUV_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 100.0),
    ComponentInfo::new("u", -100.0, 100.0),
    ComponentInfo::new("v", -100.0, 100.0),
    ALPHA,
];
const LCHUV_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 100.0),
    ComponentInfo::new("c", 0.0, 150.0),
    ComponentInfo::hue("h"),
    ALPHA,
];
const OKLAB_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 1.0),
    ComponentInfo::new("a", -0.4, 0.4),
    ComponentInfo::new("b", -0.4, 0.4),
    ALPHA,
];
const OKLCH_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("l", 0.0, 1.0),
    ComponentInfo::new("c", 0.0, 0.4),
    ComponentInfo::hue("h"),
    ALPHA,
];
const JZAZBZ_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("j", 0.0, 1.0),
    ComponentInfo::new("a", -0.5, 0.5),
    ComponentInfo::new("b", -0.5, 0.5),
    ALPHA,
];
const JZCZHZ_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("j", 0.0, 1.0),
    ComponentInfo::new("c", 0.0, 0.5),
    ComponentInfo::hue("h"),
    ALPHA,
];
const ICTCP_COMPONENTS: [ComponentInfo; 4] = [
    ComponentInfo::new("i", 0.0, 1.0),
    ComponentInfo::new("ct", -0.5, 0.5),
    ComponentInfo::new("cp", -0.5, 0.5),
    ALPHA,
];

/// One supported color space.
///
/// White-point-relative models carry their white point; two spaces compare
/// equal when their family and parameters are equal.
///
/// # Example
/// ```
/// use huebox_color::{Color, ColorSpace, Rgb};
///
/// let red = Color::from(Rgb::new(1.0, 0.0, 0.0));
/// let lab = ColorSpace::LAB_D50.convert(&red);
/// assert_eq!(lab.space(), ColorSpace::LAB_D50);
///
/// let rebuilt = ColorSpace::LAB_D50.create(&lab.to_array()).unwrap();
/// assert_eq!(rebuilt, lab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb(RgbColorSpace),
    Hsl,
    Hsv,
    Hwb,
    Cmyk,
    Ansi16,
    Ansi256,
    Xyz(WhitePoint),
    Lab(WhitePoint),
    LchAb(WhitePoint),
    Luv(WhitePoint),
    LchUv(WhitePoint),
    Oklab,
    Oklch,
    JzAzBz,
    JzCzHz,
    ICtCp,
}

impl ColorSpace {
    pub const XYZ_D65: ColorSpace = ColorSpace::Xyz(illuminant::D65);
    pub const XYZ_D50: ColorSpace = ColorSpace::Xyz(illuminant::D50);
    pub const LAB_D65: ColorSpace = ColorSpace::Lab(illuminant::D65);
    pub const LAB_D50: ColorSpace = ColorSpace::Lab(illuminant::D50);
    pub const LCHAB_D65: ColorSpace = ColorSpace::LchAb(illuminant::D65);
    pub const LCHAB_D50: ColorSpace = ColorSpace::LchAb(illuminant::D50);
    pub const LUV_D65: ColorSpace = ColorSpace::Luv(illuminant::D65);
    pub const LUV_D50: ColorSpace = ColorSpace::Luv(illuminant::D50);
    pub const LCHUV_D65: ColorSpace = ColorSpace::LchUv(illuminant::D65);
    pub const LCHUV_D50: ColorSpace = ColorSpace::LchUv(illuminant::D50);

    /// The sRGB space.
    #[inline]
    pub fn srgb() -> ColorSpace {
        ColorSpace::Rgb(*spaces::SRGB)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb(space) => space.name(),
            ColorSpace::Hsl => "HSL",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Hwb => "HWB",
            ColorSpace::Cmyk => "CMYK",
            ColorSpace::Ansi16 => "ANSI16",
            ColorSpace::Ansi256 => "ANSI256",
            ColorSpace::Xyz(_) => "XYZ",
            ColorSpace::Lab(_) => "LAB",
            ColorSpace::LchAb(_) => "LCHab",
            ColorSpace::Luv(_) => "LUV",
            ColorSpace::LchUv(_) => "LCHuv",
            ColorSpace::Oklab => "Oklab",
            ColorSpace::Oklch => "Oklch",
            ColorSpace::JzAzBz => "JzAzBz",
            ColorSpace::JzCzHz => "JzCzHz",
            ColorSpace::ICtCp => "ICtCp",
        }
    }

    /// The reference white of white-point-relative spaces.
    pub fn white_point(&self) -> Option<WhitePoint> {
        match self {
            ColorSpace::Rgb(space) => Some(space.white_point()),
            ColorSpace::Xyz(wp)
            | ColorSpace::Lab(wp)
            | ColorSpace::LchAb(wp)
            | ColorSpace::Luv(wp)
            | ColorSpace::LchUv(wp) => Some(*wp),
            ColorSpace::Oklab
            | ColorSpace::Oklch
            | ColorSpace::JzAzBz
            | ColorSpace::JzCzHz
            | ColorSpace::ICtCp => Some(illuminant::D65),
            ColorSpace::Hsl
            | ColorSpace::Hsv
            | ColorSpace::Hwb
            | ColorSpace::Cmyk
            | ColorSpace::Ansi16
            | ColorSpace::Ansi256 => None,
        }
    }

    /// Component layout of this space's colors, alpha last.
    pub fn components(&self) -> &'static [ComponentInfo] {
        match self {
            ColorSpace::Rgb(_) => &RGB_COMPONENTS,
            ColorSpace::Hsl => &HSL_COMPONENTS,
            ColorSpace::Hsv => &HSV_COMPONENTS,
            ColorSpace::Hwb => &HWB_COMPONENTS,
            ColorSpace::Cmyk => &CMYK_COMPONENTS,
            ColorSpace::Ansi16 => &ANSI16_COMPONENTS,
            ColorSpace::Ansi256 => &ANSI256_COMPONENTS,
            ColorSpace::Xyz(_) => &XYZ_COMPONENTS,
            ColorSpace::Lab(_) => &LAB_COMPONENTS,
            ColorSpace::LchAb(_) => &LCHAB_COMPONENTS,
            ColorSpace::Luv(_) => &LUV_COMPONENTS,
            ColorSpace::LchUv(_) => &LCHUV_COMPONENTS,
            ColorSpace::Oklab => &OKLAB_COMPONENTS,
            ColorSpace::Oklch => &OKLCH_COMPONENTS,
            ColorSpace::JzAzBz => &JZAZBZ_COMPONENTS,
            ColorSpace::JzCzHz => &JZCZHZ_COMPONENTS,
            ColorSpace::ICtCp => &ICTCP_COMPONENTS,
        }
    }

    /// True when any component is an angle.
    pub fn has_polar_component(&self) -> bool {
        self.components().iter().any(|c| c.is_polar)
    }

    /// Convert any color into this space.
    ///
    /// A color already in this space is returned as-is, so repeated
    /// self-conversion never drifts.
    pub fn convert(&self, color: &Color) -> Color {
        if color.space() == *self {
            return *color;
        }
        match self {
            ColorSpace::Rgb(space) => color.to_rgb(space).into(),
            ColorSpace::Hsl => color.to_hsl().into(),
            ColorSpace::Hsv => color.to_hsv().into(),
            ColorSpace::Hwb => color.to_hwb().into(),
            ColorSpace::Cmyk => color.to_cmyk().into(),
            ColorSpace::Ansi16 => color.to_ansi16().into(),
            ColorSpace::Ansi256 => color.to_ansi256().into(),
            ColorSpace::Xyz(wp) => color.to_xyz_in(*wp).into(),
            ColorSpace::Lab(wp) => color.to_lab(*wp).into(),
            ColorSpace::LchAb(wp) => color.to_lchab(*wp).into(),
            ColorSpace::Luv(wp) => color.to_luv(*wp).into(),
            ColorSpace::LchUv(wp) => color.to_lchuv(*wp).into(),
            ColorSpace::Oklab => color.to_oklab().into(),
            ColorSpace::Oklch => color.to_oklch().into(),
            ColorSpace::JzAzBz => color.to_jzazbz().into(),
            ColorSpace::JzCzHz => color.to_jzczhz().into(),
            ColorSpace::ICtCp => color.to_ictcp().into(),
        }
    }

    /// Build a color from its component array.
    ///
    /// The array holds every component in [`components`](Self::components)
    /// order. Alpha may be omitted, in which case the color is opaque.
    pub fn create(&self, components: &[f32]) -> Result<Color, ColorError> {
        let expected = self.components().len();
        if components.len() != expected && components.len() + 1 != expected {
            return Err(ColorError::InvalidComponentCount {
                len: components.len(),
                expected,
            });
        }
        Ok(self.build(components))
    }

    /// Build from an array whose length is already known to be valid.
    pub(crate) fn build(&self, c: &[f32]) -> Color {
        let at = |i: usize| c.get(i).copied().unwrap_or(1.0);
        let code = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        match *self {
            ColorSpace::Rgb(space) => Rgb::in_space(at(0), at(1), at(2), at(3), space).into(),
            ColorSpace::Hsl => Hsl::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::Hsv => Hsv::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::Hwb => Hwb::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::Cmyk => Cmyk::new(at(0), at(1), at(2), at(3))
                .with_alpha(at(4))
                .into(),
            ColorSpace::Ansi16 => Ansi16::new(code(at(0))).into(),
            ColorSpace::Ansi256 => Ansi256::new(code(at(0))).into(),
            ColorSpace::Xyz(wp) => Xyz::in_white_point(at(0), at(1), at(2), at(3), wp).into(),
            ColorSpace::Lab(wp) => Lab::in_white_point(at(0), at(1), at(2), at(3), wp).into(),
            ColorSpace::LchAb(wp) => LchAb::in_white_point(at(0), at(1), at(2), at(3), wp).into(),
            ColorSpace::Luv(wp) => Luv::in_white_point(at(0), at(1), at(2), at(3), wp).into(),
            ColorSpace::LchUv(wp) => LchUv::in_white_point(at(0), at(1), at(2), at(3), wp).into(),
            ColorSpace::Oklab => Oklab::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::Oklch => Oklch::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::JzAzBz => JzAzBz::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::JzCzHz => JzCzHz::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
            ColorSpace::ICtCp => ICtCp::new(at(0), at(1), at(2)).with_alpha(at(3)).into(),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Xyz(wp)
            | ColorSpace::Lab(wp)
            | ColorSpace::LchAb(wp)
            | ColorSpace::Luv(wp)
            | ColorSpace::LchUv(wp)
                if *wp != illuminant::D65 =>
            {
                write!(f, "{} ({})", self.name(), wp)
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    /// Look a space up by name.
    ///
    /// Matching ignores case and punctuation. White-point-relative families
    /// default to D65 and accept a suffix naming the illuminant, either as
    /// `lab50`/`lab-d50` or as `lab@a`. Anything else is tried as a named
    /// RGB space.
    ///
    /// ```
    /// use huebox_color::ColorSpace;
    ///
    /// assert_eq!("Lab D50".parse(), Ok(ColorSpace::LAB_D50));
    /// assert_eq!("oklch".parse(), Ok(ColorSpace::Oklch));
    /// assert_eq!("display-p3".parse::<ColorSpace>().unwrap().name(), "Display P3");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ColorError::UnknownColorSpace(s.to_string());
        let (family, explicit_wp) = match s.split_once('@') {
            Some((family, wp)) => (family, Some(illuminant::by_name(wp.trim()).ok_or_else(unknown)?)),
            None => (s, None),
        };
        let key: String = family
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let simple = match key.as_str() {
            "hsl" => Some(ColorSpace::Hsl),
            "hsv" | "hsb" => Some(ColorSpace::Hsv),
            "hwb" => Some(ColorSpace::Hwb),
            "cmyk" => Some(ColorSpace::Cmyk),
            "ansi16" => Some(ColorSpace::Ansi16),
            "ansi256" => Some(ColorSpace::Ansi256),
            "oklab" => Some(ColorSpace::Oklab),
            "oklch" => Some(ColorSpace::Oklch),
            "jzazbz" => Some(ColorSpace::JzAzBz),
            "jzczhz" => Some(ColorSpace::JzCzHz),
            "ictcp" => Some(ColorSpace::ICtCp),
            _ => None,
        };
        if let Some(space) = simple {
            return if explicit_wp.is_some() {
                Err(unknown())
            } else {
                Ok(space)
            };
        }

        let (stem, suffix_wp) = split_white_point_suffix(&key);
        let relative: Option<fn(WhitePoint) -> ColorSpace> = match stem {
            "xyz" => Some(ColorSpace::Xyz),
            "lab" => Some(ColorSpace::Lab),
            "lch" | "lchab" => Some(ColorSpace::LchAb),
            "luv" => Some(ColorSpace::Luv),
            "lchuv" => Some(ColorSpace::LchUv),
            _ => None,
        };
        if let Some(make) = relative {
            let wp = match (explicit_wp, suffix_wp) {
                (Some(_), Some(_)) => return Err(unknown()),
                (Some(wp), None) | (None, Some(wp)) => wp,
                (None, None) => illuminant::D65,
            };
            return Ok(make(wp));
        }

        if explicit_wp.is_some() {
            return Err(unknown());
        }
        spaces::by_name(family)
            .map(ColorSpace::Rgb)
            .ok_or_else(unknown)
    }
}

/// Split `lab50`, `labd50`, `lab65` or `labd65` into the family and white
/// point.
fn split_white_point_suffix(key: &str) -> (&str, Option<WhitePoint>) {
    for (suffix, wp) in [
        ("d50", illuminant::D50),
        ("d65", illuminant::D65),
        ("50", illuminant::D50),
        ("65", illuminant::D65),
    ] {
        if let Some(stem) = key.strip_suffix(suffix) {
            return (stem, Some(wp));
        }
    }
    (key, None)
}
