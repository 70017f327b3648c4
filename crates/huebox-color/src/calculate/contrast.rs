//! WCAG 2.1 relative luminance and contrast.
//!
//! See <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>. The `first_*`
//! and `most_*` helpers follow CSS Color 5 `color-contrast()`.

use crate::model::{Color, Rgb};

/// Relative luminance, `0.0..=1.0` for in-gamut sRGB.
pub fn wcag_luminance(color: &Color) -> f32 {
    let [r, g, b] = color.to_srgb().to_linear().map(f64::from);
    (0.2126 * r + 0.7152 * g + 0.0722 * b) as f32
}

/// Contrast ratio between two colors, `1.0..=21.0` for in-gamut sRGB.
pub fn wcag_contrast_ratio(a: &Color, b: &Color) -> f32 {
    let (l, r) = (wcag_luminance(a) as f64, wcag_luminance(b) as f64);
    ((l.max(r) + 0.05) / (l.min(r) + 0.05)) as f32
}

/// The candidate with the highest contrast against `background`, or `None`
/// when there are no candidates. Ties go to the earliest.
pub fn most_contrasting(background: &Color, candidates: &[Color]) -> Option<Color> {
    candidates
        .iter()
        .map(|c| (wcag_contrast_ratio(background, c), c))
        .fold(None, |best: Option<(f32, &Color)>, (ratio, c)| match best {
            Some((best_ratio, _)) if best_ratio >= ratio => best,
            _ => Some((ratio, c)),
        })
        .map(|(_, c)| *c)
}

/// The first candidate whose contrast against `background` is at least
/// `target`.
pub fn first_with_contrast_or_none(
    background: &Color,
    candidates: &[Color],
    target: f32,
) -> Option<Color> {
    candidates
        .iter()
        .find(|c| wcag_contrast_ratio(background, c) >= target)
        .copied()
}

/// Like [`first_with_contrast_or_none`], falling back to black or white,
/// whichever contrasts more, when no candidate reaches `target`.
///
/// ```
/// use huebox_color::calculate::first_with_contrast;
/// use huebox_color::{Color, Rgb};
///
/// let wheat: Color = Rgb::from_u8(0xf5, 0xde, 0xb3).into();
/// let tan: Color = Rgb::from_u8(0xd2, 0xb4, 0x8c).into();
/// let picked = first_with_contrast(&wheat, &[tan], 7.0);
/// assert_eq!(picked.to_srgb().to_hex(), "#000000");
/// ```
pub fn first_with_contrast(background: &Color, candidates: &[Color], target: f32) -> Color {
    first_with_contrast_or_none(background, candidates, target).unwrap_or_else(|| {
        let black = Color::from(Rgb::new(0.0, 0.0, 0.0));
        let white = Color::from(Rgb::new(1.0, 1.0, 1.0));
        if wcag_contrast_ratio(background, &white) > wcag_contrast_ratio(background, &black) {
            white
        } else {
            black
        }
    })
}
