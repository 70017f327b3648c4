//! RGB color type
//!
//! An [`Rgb`] value carries the [`RgbColorSpace`] it is encoded in. Channel
//! values are nonlinear (transfer-encoded) and nominally in `0.0..=1.0`; HDR
//! and out-of-gamut values are kept as-is.

use std::str::FromStr;

use super::{Ansi16, Ansi256, Cmyk, Hsl, Hsv, Hwb, Oklab, Xyz};
use crate::error::ColorError;
use crate::math::nan_to_one;
use crate::rgb::{rgb_to_rgb_matrix, spaces, RgbColorSpace};

/// A color in an RGB color space.
///
/// # Example
/// ```
/// use huebox_color::Rgb;
///
/// let teal: Rgb = "#008080".parse().unwrap();
/// assert_eq!(teal.to_u8(), [0, 128, 128]);
/// assert_eq!(teal.to_hex(), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (encoded)
    pub r: f32,
    /// Green channel (encoded)
    pub g: f32,
    /// Blue channel (encoded)
    pub b: f32,
    /// Opacity, `0.0..=1.0`. `NaN` means unspecified and is treated as opaque.
    pub alpha: f32,
    /// The space the channels are encoded in
    pub space: RgbColorSpace,
}

impl Rgb {
    /// An opaque sRGB color.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::in_space(r, g, b, 1.0, *spaces::SRGB)
    }

    #[inline]
    pub fn in_space(r: f32, g: f32, b: f32, alpha: f32, space: RgbColorSpace) -> Self {
        Self {
            r,
            g,
            b,
            alpha,
            space,
        }
    }

    /// An opaque sRGB color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use huebox_color::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Channels scaled to `0..=255`, rounded and clamped.
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Alpha scaled to `0..=255`. An unspecified alpha is opaque.
    #[inline]
    pub fn alpha_u8(&self) -> u8 {
        to_byte(nan_to_one(self.alpha))
    }

    /// Render as `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    ///
    /// The color is encoded in sRGB first.
    pub fn to_hex(&self) -> String {
        let srgb = self.to_srgb();
        let [r, g, b] = srgb.to_u8();
        let a = srgb.alpha_u8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Convert to another RGB space, through linear light and XYZ.
    pub fn convert_to(&self, space: &RgbColorSpace) -> Rgb {
        if self.space == *space {
            return *self;
        }
        let fs = self.space.transfer_functions();
        let fd = space.transfer_functions();
        let [r, g, b] = rgb_to_rgb_matrix(&self.space, space).dot_vector(
            fs.eotf(self.r),
            fs.eotf(self.g),
            fs.eotf(self.b),
        );
        space.color_with_alpha(fd.oetf(r), fd.oetf(g), fd.oetf(b), self.alpha)
    }

    #[inline]
    pub fn to_srgb(&self) -> Rgb {
        self.convert_to(&spaces::SRGB)
    }

    /// Linear-light channel values in this color's own space.
    #[inline]
    pub fn to_linear(&self) -> [f32; 3] {
        let f = self.space.transfer_functions();
        [f.eotf(self.r), f.eotf(self.g), f.eotf(self.b)]
    }

    /// XYZ relative to this color's space white point.
    pub fn to_xyz(&self) -> Xyz {
        let [r, g, b] = self.to_linear();
        let [x, y, z] = self.space.matrix_to_xyz().dot_vector(r, g, b);
        Xyz::in_white_point(x, y, z, self.alpha, self.space.white_point())
    }

    /// CSS Color 4 RGB → HSL.
    pub fn to_hsl(&self) -> Hsl {
        let (h, min, max, delta) = self.to_srgb().hue_min_max_delta();
        let l = (min + max) / 2.0;
        let s = if max == min {
            0.0
        } else if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        Hsl {
            h: h as f32,
            s: s as f32,
            l: l as f32,
            alpha: self.alpha,
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        let (h, _, max, delta) = self.to_srgb().hue_min_max_delta();
        let s = if max == 0.0 { 0.0 } else { delta / max };
        Hsv {
            h: h as f32,
            s: s as f32,
            v: max as f32,
            alpha: self.alpha,
        }
    }

    /// <https://www.w3.org/TR/css-color-4/#rgb-to-hwb>
    pub fn to_hwb(&self) -> Hwb {
        let (h, min, max, _) = self.to_srgb().hue_min_max_delta();
        Hwb {
            h: h as f32,
            w: min as f32,
            b: (1.0 - max) as f32,
            alpha: self.alpha,
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let Rgb { r, g, b, alpha, .. } = self.to_srgb();
        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0).with_alpha(alpha);
        }
        Cmyk::new(
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
            k,
        )
        .with_alpha(alpha)
    }

    /// Oklab; sRGB colors take the direct linear-sRGB route.
    pub fn to_oklab(&self) -> Oklab {
        if self.space != *spaces::SRGB && self.space != *spaces::LINEAR_SRGB {
            return self.to_xyz().to_oklab();
        }
        let [r, g, b] = self.to_linear();
        Oklab::from_linear_srgb(r, g, b, self.alpha)
    }

    /// Nearest ANSI-16 code by brightness and per-channel rounding.
    pub fn to_ansi16(&self) -> Ansi16 {
        let srgb = self.to_srgb();
        let value = (srgb.to_hsv().v * 100.0).round() / 50.0;
        let brightness = value.round() as i32;
        if brightness <= 0 {
            return Ansi16::new(30);
        }
        let bit = |c: f32| c.clamp(0.0, 1.0).round() as u8;
        let code = 30 + ((bit(srgb.b) << 2) | (bit(srgb.g) << 1) | bit(srgb.r));
        Ansi16::new(if brightness >= 2 { code + 60 } else { code })
    }

    /// Nearest ANSI-256 code in the 6×6×6 cube or the gray ramp.
    pub fn to_ansi256(&self) -> Ansi256 {
        let srgb = self.to_srgb();
        let [ri, gi, bi] = srgb.to_u8();
        let code = if ri == gi && gi == bi {
            if ri < 8 {
                16
            } else if ri > 248 {
                231
            } else {
                ((ri as f64 - 8.0) / 247.0 * 24.0).round() as u8 + 232
            }
        } else {
            let level = |c: f32| (c.clamp(0.0, 1.0) * 5.0).round() as u8;
            16 + 36 * level(srgb.r) + 6 * level(srgb.g) + level(srgb.b)
        };
        Ansi256::new(code)
    }

    /// Hue in degrees (`NaN` when achromatic), min, max and max - min of the
    /// channels. Assumes `self` is already sRGB.
    fn hue_min_max_delta(&self) -> (f64, f64, f64, f64) {
        let r = self.r as f64;
        let g = self.g as f64;
        let b = self.b as f64;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        if max == min {
            return (f64::NAN, min, max, delta);
        }
        let h = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let mut h = (h * 60.0).min(360.0);
        if h < 0.0 {
            h += 360.0;
        }
        if h == 360.0 {
            h = 0.0;
        }
        (h, min, max, delta)
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`, with or without the
    /// leading `#`. Parsing is case-insensitive and trims whitespace.
    ///
    /// ```
    /// use huebox_color::Rgb;
    ///
    /// let c: Rgb = "#f008".parse().unwrap();
    /// assert_eq!(c.to_u8(), [255, 0, 0]);
    /// assert_eq!(c.alpha_u8(), 0x88);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digits: Vec<u8> = match hex.len() {
            // Shorthand: each digit is repeated (0xF -> 0xFF)
            3 | 4 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8 * 17))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        let rgb = Rgb::from_u8(digits[0], digits[1], digits[2]);
        Ok(match digits.get(3) {
            Some(&a) => rgb.with_alpha(a as f32 / 255.0),
            None => rgb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, epsilon: f32) {
        assert!(
            (actual - expected).abs() <= epsilon || (actual.is_nan() && expected.is_nan()),
            "got {actual}, expected {expected}"
        );
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!("#ffffff".parse::<Rgb>().unwrap(), Rgb::new(1.0, 1.0, 1.0));
        assert_eq!("000".parse::<Rgb>().unwrap(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(
            "#ABC".parse::<Rgb>().unwrap(),
            Rgb::from_u8(0xaa, 0xbb, 0xcc)
        );
        assert_eq!(
            "  #AbCdEf  ".parse::<Rgb>().unwrap(),
            Rgb::from_u8(0xab, 0xcd, 0xef)
        );
        let translucent: Rgb = "#11223380".parse().unwrap();
        assert_eq!(translucent.alpha_u8(), 0x80);
    }

    #[test]
    fn test_hex_parsing_errors() {
        for input in ["", "#", "#12", "#12345", "#ggg", "#1234567", "#ff00ff00ff"] {
            assert_eq!(
                input.parse::<Rgb>(),
                Err(ColorError::InvalidHex(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(Rgb::from_u8(0x12, 0xab, 0xff).to_hex(), "#12abff");
        assert_eq!(
            Rgb::from_u8(0, 0, 0).with_alpha(0.5).to_hex(),
            "#00000080"
        );
        assert_eq!(Rgb::new(1.2, -0.1, 0.5).to_hex(), "#ff0080");
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).with_alpha(f32::NAN).to_hex(), "#000000");
    }

    #[test]
    fn test_to_hsl() {
        let hsl = Rgb::from_u8(255, 0, 0).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));

        let hsl = Rgb::from_u8(0x80, 0xff, 0x80).to_hsl();
        assert_close(hsl.h, 120.0, 1e-4);
        assert_close(hsl.s, 1.0, 1e-4);
        assert_close(hsl.l, 0.75098, 1e-4);

        let gray = Rgb::new(0.5, 0.5, 0.5).to_hsl();
        assert!(gray.h.is_nan());
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_to_hsv_and_hwb() {
        let hsv = Rgb::new(0.0, 0.5, 1.0).to_hsv();
        assert_close(hsv.h, 210.0, 1e-4);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);

        let hwb = Rgb::new(0.2, 0.4, 0.6).to_hwb();
        assert_close(hwb.h, 210.0, 1e-4);
        assert_close(hwb.w, 0.2, 1e-6);
        assert_close(hwb.b, 0.4, 1e-6);
    }

    #[test]
    fn test_to_cmyk() {
        let cmyk = Rgb::from_u8(255, 0, 0).to_cmyk();
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 1.0, 1.0, 0.0));
        let black = Rgb::new(0.0, 0.0, 0.0).to_cmyk();
        assert_eq!((black.c, black.m, black.y, black.k), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_to_xyz_of_white() {
        let xyz = Rgb::new(1.0, 1.0, 1.0).to_xyz();
        assert_close(xyz.x, 0.95047, 1e-4);
        assert_close(xyz.y, 1.0, 1e-5);
        assert_close(xyz.z, 1.08883, 1e-3);
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_ansi16().code, 30);
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_ansi16().code, 91);
        assert_eq!(Rgb::new(0.5, 0.0, 0.0).to_ansi16().code, 31);
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_ansi16().code, 97);

        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_ansi256().code, 16);
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_ansi256().code, 231);
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_ansi256().code, 196);
        assert_eq!(Rgb::from_u8(128, 128, 128).to_ansi256().code, 244);
    }

    #[test]
    fn test_linear_srgb_shortcut() {
        let c = Rgb::new(0.5, 0.5, 0.5);
        let linear = c.convert_to(&spaces::LINEAR_SRGB);
        assert_close(linear.r, 0.214041, 1e-5);
        let back = linear.to_srgb();
        assert_close(back.r, 0.5, 1e-5);
    }
}
