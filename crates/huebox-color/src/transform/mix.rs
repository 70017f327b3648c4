//! Two-color interpolation and CSS `color-mix()`.

use super::hue::HueAdjustment;
use super::premultiply::{divide_alpha_in_place, multiply_alpha_in_place};
use crate::error::ColorError;
use crate::math::{lerp, nan_to_one, normalize_deg};
use crate::model::Color;
use crate::space::ColorSpace;

impl Color {
    /// Interpolate from this color towards `other` in this color's space.
    ///
    /// `amount` of `0` returns this color, `1` returns `other` converted into
    /// this space.
    ///
    /// ```
    /// use huebox_color::transform::HueAdjustment;
    /// use huebox_color::{Color, Rgb};
    ///
    /// let black = Color::from(Rgb::new(0.0, 0.0, 0.0));
    /// let white = Color::from(Rgb::new(1.0, 1.0, 1.0));
    /// let gray = black.interpolate(&white, 0.25, true, HueAdjustment::Shorter);
    /// assert_eq!(gray.to_array(), vec![0.25, 0.25, 0.25, 1.0]);
    /// ```
    pub fn interpolate(
        &self,
        other: &Color,
        amount: f32,
        premultiply_alpha: bool,
        hue_adjustment: HueAdjustment,
    ) -> Color {
        let space = self.space();
        let components = space.components();
        let bake = |color: &Color| {
            let mut values = space.convert(color).to_array();
            if premultiply_alpha {
                multiply_alpha_in_place(components, &mut values);
            }
            values
        };
        let (left, right) = (bake(self), bake(other));

        let mut values: Vec<f32> = left
            .iter()
            .zip(&right)
            .zip(components)
            .map(|((&l, &r), info)| {
                if info.is_polar {
                    let (l, r) = hue_adjustment.adjust_pair(l, r);
                    normalize_deg(lerp(l, r, amount))
                } else {
                    lerp(l, r, amount)
                }
            })
            .collect();
        if premultiply_alpha {
            divide_alpha_in_place(components, &mut values);
        }
        space.build(&values)
    }
}

impl ColorSpace {
    /// Mix `amount1` of `color1` with `amount2` of `color2` in this space,
    /// following CSS `color-mix()`.
    ///
    /// Amounts are normalized to sum to one. When they sum to less than one
    /// the result's alpha is scaled by their sum.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidMixWeights`] when the amounts sum to zero.
    ///
    /// ```
    /// use huebox_color::transform::HueAdjustment;
    /// use huebox_color::{Color, ColorSpace, Rgb};
    ///
    /// let red: Color = Rgb::new(1.0, 0.0, 0.0).into();
    /// let blue: Color = Rgb::new(0.0, 0.0, 1.0).into();
    /// let purple = ColorSpace::srgb()
    ///     .mix(&red, 0.5, &blue, 0.5, HueAdjustment::Shorter)
    ///     .unwrap();
    /// assert_eq!(purple.to_array(), vec![0.5, 0.0, 0.5, 1.0]);
    /// ```
    pub fn mix(
        &self,
        color1: &Color,
        amount1: f32,
        color2: &Color,
        amount2: f32,
        hue_adjustment: HueAdjustment,
    ) -> Result<Color, ColorError> {
        let sum = amount1 + amount2;
        if sum == 0.0 {
            return Err(ColorError::InvalidMixWeights);
        }
        let mixed = self
            .convert(color1)
            .interpolate(color2, amount2 / sum, true, hue_adjustment);
        if sum >= 1.0 {
            return Ok(mixed);
        }
        Ok(mixed.map(|_, values| {
            if let Some(alpha) = values.last_mut() {
                *alpha = nan_to_one(*alpha) * sum;
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hsl, Oklch, Rgb};

    fn red() -> Color {
        Rgb::new(1.0, 0.0, 0.0).into()
    }

    fn blue() -> Color {
        Rgb::new(0.0, 0.0, 1.0).into()
    }

    #[test]
    fn test_interpolate_endpoints() {
        let shorter = HueAdjustment::Shorter;
        assert_eq!(red().interpolate(&blue(), 0.0, true, shorter), red());
        assert_eq!(red().interpolate(&blue(), 1.0, true, shorter), blue());
    }

    #[test]
    fn test_interpolate_stays_in_receiver_space() {
        let hsl = Color::from(Hsl::new(0.0, 1.0, 0.5));
        let mid = hsl.interpolate(&blue(), 0.5, true, HueAdjustment::Shorter);
        assert_eq!(mid.space(), ColorSpace::Hsl);
        // red (0) to blue (240) the short way passes magenta at 300
        assert!((mid.to_array()[0] - 300.0).abs() < 1e-3);

        let longer = hsl.interpolate(&blue(), 0.5, true, HueAdjustment::Longer);
        assert!((longer.to_array()[0] - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_interpolate_premultiplied() {
        let clear = Color::from(Rgb::new(0.0, 0.0, 1.0).with_alpha(0.0));
        let mixed = red().interpolate(&clear, 0.5, true, HueAdjustment::Shorter);
        assert_eq!(mixed.to_array(), vec![1.0, 0.0, 0.0, 0.5]);

        let raw = red().interpolate(&clear, 0.5, false, HueAdjustment::Shorter);
        assert_eq!(raw.to_array(), vec![0.5, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_mix_normalizes_amounts() {
        let srgb = ColorSpace::srgb();
        let mixed = srgb
            .mix(&red(), 3.0, &blue(), 1.0, HueAdjustment::Shorter)
            .unwrap();
        assert_eq!(mixed.to_array(), vec![0.75, 0.0, 0.25, 1.0]);
    }

    #[test]
    fn test_mix_scales_alpha_when_amounts_sum_below_one() {
        let srgb = ColorSpace::srgb();
        let mixed = srgb
            .mix(&red(), 0.25, &blue(), 0.25, HueAdjustment::Shorter)
            .unwrap();
        assert_eq!(mixed.to_array(), vec![0.5, 0.0, 0.5, 0.5]);

        let unspecified = Color::from(Rgb::new(1.0, 0.0, 0.0).with_alpha(f32::NAN));
        let mixed = srgb
            .mix(&unspecified, 0.2, &unspecified, 0.2, HueAdjustment::Shorter)
            .unwrap();
        assert!((mixed.alpha() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_mix_rejects_zero_sum() {
        assert_eq!(
            ColorSpace::srgb().mix(&red(), 0.0, &blue(), 0.0, HueAdjustment::Shorter),
            Err(ColorError::InvalidMixWeights)
        );
        assert_eq!(
            ColorSpace::srgb().mix(&red(), 0.5, &blue(), -0.5, HueAdjustment::Shorter),
            Err(ColorError::InvalidMixWeights)
        );
    }

    #[test]
    fn test_mix_in_polar_space() {
        let a = Color::from(Oklch::new(0.5, 0.1, 350.0));
        let b = Color::from(Oklch::new(0.7, 0.1, 30.0));
        let mixed = ColorSpace::Oklch
            .mix(&a, 0.5, &b, 0.5, HueAdjustment::Shorter)
            .unwrap();
        let values = mixed.to_array();
        assert!((values[0] - 0.6).abs() < 1e-6);
        assert!((values[1] - 0.1).abs() < 1e-6);
        assert!((values[2] - 10.0).abs() < 1e-3);
    }
}
