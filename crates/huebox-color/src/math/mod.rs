//! Linear algebra and scalar helpers shared by the conversion code.

mod matrix;

pub use matrix::Matrix;

/// Shift an angle in degrees into `[0, 360)`. `NaN` stays `NaN`.
///
/// Formula from <https://www.w3.org/TR/css-color-4/#hue-interpolation>.
#[inline]
pub fn normalize_deg(deg: f32) -> f32 {
    ((deg % 360.0) + 360.0) % 360.0
}

#[inline]
pub(crate) fn normalize_deg_f64(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Sign-preserving power: `sign(x) * |x|^p`.
#[inline]
pub(crate) fn spow(x: f64, p: f64) -> f64 {
    x.abs().powf(p).copysign(x)
}

#[inline]
pub(crate) fn nan_to_one(x: f32) -> f32 {
    if x.is_nan() {
        1.0
    } else {
        x
    }
}

/// Sign that maps zero to zero and keeps `NaN`.
#[inline]
pub(crate) fn sign(x: f32) -> f32 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

/// Minimum of three values that propagates `NaN` from any argument.
#[inline]
pub(crate) fn min3_nan(a: f32, b: f32, c: f32) -> f32 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        f32::NAN
    } else {
        a.min(b).min(c)
    }
}

/// Map `t` from `[l1, r1]` onto `[l2, r2]`.
#[inline]
pub(crate) fn scale_range(l1: f64, r1: f64, l2: f64, r2: f64, t: f64) -> f64 {
    if r1 == l1 {
        t
    } else {
        (r2 - l2) * (t - l1) / (r1 - l1) + l2
    }
}

/// Linear interpolation where a `NaN` endpoint defers to the other one.
#[inline]
pub(crate) fn lerp(l: f32, r: f32, t: f32) -> f32 {
    if l.is_nan() {
        r
    } else if r.is_nan() {
        l
    } else {
        l + t * (r - l)
    }
}

/// Rectangular `(a, b)` to polar `(chroma, hue°)`.
///
/// A chroma below `1e-7` has no meaningful hue, reported as `NaN`.
#[inline]
pub(crate) fn to_polar(a: f32, b: f32) -> (f32, f32) {
    let c = (a * a + b * b).sqrt();
    let h = if c < 1e-7 {
        f32::NAN
    } else {
        (b as f64).atan2(a as f64).to_degrees() as f32
    };
    (c, normalize_deg(h))
}

/// Polar `(chroma, hue°)` to rectangular `(a, b)`; a `NaN` hue counts as 0.
#[inline]
pub(crate) fn from_polar(c: f32, h: f32) -> (f32, f32) {
    let rad = if h.is_nan() {
        0.0
    } else {
        (h as f64).to_radians()
    };
    ((c as f64 * rad.cos()) as f32, (c as f64 * rad.sin()) as f32)
}

#[inline]
pub(crate) fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

#[inline]
pub(crate) fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deg() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(-60.0), 300.0);
        assert_eq!(normalize_deg(720.0 + 15.0), 15.0);
        assert_eq!(normalize_deg(-620.0), 100.0);
        assert!(normalize_deg(f32::NAN).is_nan());
    }

    #[test]
    fn test_spow_keeps_sign() {
        assert_eq!(spow(-8.0, 1.0 / 3.0), -2.0);
        assert_eq!(spow(4.0, 0.5), 2.0);
        assert_eq!(spow(0.0, 2.4), 0.0);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.0), -1.0);
        assert_eq!(sign(2.0), 1.0);
        assert!(sign(f32::NAN).is_nan());
    }

    #[test]
    fn test_min3_propagates_nan() {
        assert_eq!(min3_nan(3.0, 1.0, 2.0), 1.0);
        assert!(min3_nan(1.0, f32::NAN, 2.0).is_nan());
    }

    #[test]
    fn test_lerp_nan_defers_to_other_side() {
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(f32::NAN, 10.0, 0.25), 10.0);
        assert_eq!(lerp(4.0, f32::NAN, 0.75), 4.0);
    }

    #[test]
    fn test_scale_range() {
        assert_eq!(scale_range(0.0, 0.2, 0.0, 0.5, 0.1), 0.25);
        assert_eq!(scale_range(0.5, 0.5, 0.0, 1.0, 0.7), 0.7);
    }

    #[test]
    fn test_polar_round_trip() {
        let (c, h) = to_polar(3.0, 4.0);
        assert!((c - 5.0).abs() < 1e-6);
        let (a, b) = from_polar(c, h);
        assert!((a - 3.0).abs() < 1e-5);
        assert!((b - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_achromatic_hue_is_nan() {
        let (c, h) = to_polar(0.0, 0.0);
        assert_eq!(c, 0.0);
        assert!(h.is_nan());
        assert_eq!(from_polar(0.5, f32::NAN), (0.5, 0.0));
    }
}
