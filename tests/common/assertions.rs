//! Assertion helpers for tests.

use huebox_color::Color;
use pretty_assertions::assert_eq;

/// sRGB hex codes of a list of colors
pub fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.to_srgb().to_hex()).collect()
}

/// Assert colors encode to the expected hex codes
pub fn assert_hexes(colors: &[Color], expected: &[&str]) {
    assert_eq!(
        hexes(colors),
        expected.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    );
}

/// Assert every color lies inside the sRGB gamut
pub fn assert_in_srgb_gamut(colors: &[Color]) {
    for color in colors {
        assert!(
            huebox_color::calculate::is_in_srgb_gamut(color),
            "Expected {color:?} to be inside the sRGB gamut"
        );
    }
}
