//! HSL, HSV and HWB: cylindrical transforms of sRGB.
//!
//! All three share the sRGB gamut and convert to RGB with the CSS Color 4
//! formulas. The hue is `NaN` for achromatic colors and treated as 0 when
//! converting back.

use super::Rgb;

#[inline]
fn hue_or_zero(h: f32) -> f64 {
    if h.is_nan() {
        0.0
    } else {
        h as f64
    }
}

/// Hue, saturation, lightness.
///
/// ```
/// use huebox_color::Hsl;
/// let green = Hsl::new(120.0, 1.0, 0.75).to_srgb();
/// assert_eq!(green.to_u8(), [128, 255, 128]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub alpha: f32,
}

impl Hsl {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h,
            s,
            l,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// <https://www.w3.org/TR/css-color-4/#hsl-to-rgb>
    pub fn to_srgb(&self) -> Rgb {
        let h = hue_or_zero(self.h);
        let s = self.s as f64;
        let l = self.l as f64;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            (l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)) as f32
        };
        Rgb::new(f(0.0), f(8.0), f(4.0)).with_alpha(self.alpha)
    }

    pub fn to_hsv(&self) -> Hsv {
        let l = self.l as f64;
        let s = self.s as f64;
        let v = l + s * l.min(1.0 - l);
        let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
        Hsv {
            h: self.h,
            s: sv as f32,
            v: v as f32,
            alpha: self.alpha,
        }
    }
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `0.0..360.0`
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub alpha: f32,
}

impl Hsv {
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h,
            s,
            v,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn to_srgb(&self) -> Rgb {
        let h = hue_or_zero(self.h);
        let s = self.s as f64;
        let v = self.v as f64;
        let f = |n: f64| {
            let k = (n + h / 60.0) % 6.0;
            (v - v * s * k.min(4.0 - k).min(1.0).max(0.0)) as f32
        };
        Rgb::new(f(5.0), f(3.0), f(1.0)).with_alpha(self.alpha)
    }

    pub fn to_hsl(&self) -> Hsl {
        let v = self.v as f64;
        let s = self.s as f64;
        let l = v * (1.0 - s / 2.0);
        let sl = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        Hsl {
            h: self.h,
            s: sl as f32,
            l: l as f32,
            alpha: self.alpha,
        }
    }

    pub fn to_hwb(&self) -> Hwb {
        Hwb {
            h: self.h,
            w: (1.0 - self.s) * self.v,
            b: 1.0 - self.v,
            alpha: self.alpha,
        }
    }
}

/// Hue, whiteness, blackness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    /// Hue in degrees, `0.0..360.0`
    pub h: f32,
    pub w: f32,
    pub b: f32,
    pub alpha: f32,
}

impl Hwb {
    #[inline]
    pub fn new(h: f32, w: f32, b: f32) -> Self {
        Self {
            h,
            w,
            b,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// <https://www.w3.org/TR/css-color-4/#hwb-to-rgb>
    pub fn to_srgb(&self) -> Rgb {
        let w = self.w;
        let b = self.b;
        if w + b >= 1.0 {
            let gray = w / (w + b);
            return Rgb::new(gray, gray, gray).with_alpha(self.alpha);
        }
        let pure = Hsl::new(self.h, 1.0, 0.5).to_srgb();
        let scale = |c: f32| c * (1.0 - w - b) + w;
        Rgb::new(scale(pure.r), scale(pure.g), scale(pure.b)).with_alpha(self.alpha)
    }

    pub fn to_hsv(&self) -> Hsv {
        let v = 1.0 - self.b;
        let s = if v == 0.0 { 0.0 } else { 1.0 - self.w / v };
        Hsv {
            h: self.h,
            s,
            v,
            alpha: self.alpha,
        }
    }
}
