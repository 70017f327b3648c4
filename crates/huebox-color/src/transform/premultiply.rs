//! Alpha premultiplication.
//!
//! Polar components and alpha itself are never scaled.

use crate::model::Color;
use crate::space::ComponentInfo;

/// Multiply the non-polar components by the trailing alpha. No-op when alpha
/// is `1` or `NaN`.
pub(crate) fn multiply_alpha_in_place(components: &[ComponentInfo], values: &mut [f32]) {
    let Some((&mut alpha, channels)) = values.split_last_mut() else {
        return;
    };
    if alpha.is_nan() || alpha == 1.0 {
        return;
    }
    for (value, info) in channels.iter_mut().zip(components) {
        if !info.is_polar {
            *value *= alpha;
        }
    }
}

/// Inverse of [`multiply_alpha_in_place`]. No-op when alpha is `0`, `1` or
/// `NaN`.
pub(crate) fn divide_alpha_in_place(components: &[ComponentInfo], values: &mut [f32]) {
    let Some((&mut alpha, channels)) = values.split_last_mut() else {
        return;
    };
    if alpha.is_nan() || alpha == 0.0 || alpha == 1.0 {
        return;
    }
    for (value, info) in channels.iter_mut().zip(components) {
        if !info.is_polar {
            *value /= alpha;
        }
    }
}

impl Color {
    /// Scale this color's non-polar components by its alpha.
    ///
    /// ```
    /// use huebox_color::{Color, Rgb};
    ///
    /// let c = Color::from(Rgb::new(1.0, 0.5, 0.0).with_alpha(0.5));
    /// assert_eq!(c.multiply_alpha().to_array(), vec![0.5, 0.25, 0.0, 0.5]);
    /// ```
    pub fn multiply_alpha(&self) -> Color {
        self.map(|space, values| multiply_alpha_in_place(space.components(), values))
    }

    /// Undo [`multiply_alpha`](Self::multiply_alpha).
    pub fn divide_alpha(&self) -> Color {
        self.map(|space, values| divide_alpha_in_place(space.components(), values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hsl, Rgb};

    #[test]
    fn test_round_trip_for_translucent_alpha() {
        for alpha in [0.1, 0.25, 0.5, 0.9] {
            let c = Color::from(Rgb::new(0.8, 0.4, 0.2).with_alpha(alpha));
            let back = c.multiply_alpha().divide_alpha().to_array();
            for (a, b) in back.iter().zip(c.to_array()) {
                assert!((a - b).abs() < 1e-6, "{back:?}");
            }
        }
    }

    #[test]
    fn test_noop_for_opaque_and_unspecified_alpha() {
        for alpha in [1.0, f32::NAN] {
            let c = Color::from(Rgb::new(0.8, 0.4, 0.2).with_alpha(alpha));
            assert_eq!(c.multiply_alpha().to_array()[..3], [0.8, 0.4, 0.2]);
            assert_eq!(c.divide_alpha().to_array()[..3], [0.8, 0.4, 0.2]);
        }
    }

    #[test]
    fn test_divide_skips_zero_alpha() {
        let c = Color::from(Rgb::new(0.8, 0.4, 0.2).with_alpha(0.0));
        assert_eq!(c.divide_alpha().to_array(), vec![0.8, 0.4, 0.2, 0.0]);
    }

    #[test]
    fn test_hue_is_not_scaled() {
        let c = Color::from(Hsl::new(240.0, 0.5, 0.5).with_alpha(0.5));
        assert_eq!(c.multiply_alpha().to_array(), vec![240.0, 0.25, 0.25, 0.5]);
    }
}
