//! Named RGB color spaces.
//!
//! Each space is built lazily on first use and shared for the rest of the
//! process. Dereference the static to get a copyable [`RgbColorSpace`].

use std::sync::LazyLock;

use super::{RgbColorSpace, TransferFunctions};
use crate::white_point::{illuminant, Chromaticity, WhitePoint};

const SRGB_R: Chromaticity = Chromaticity::new(0.6400, 0.3300);
const SRGB_G: Chromaticity = Chromaticity::new(0.3000, 0.6000);
const SRGB_B: Chromaticity = Chromaticity::new(0.1500, 0.0600);

const P3_R: Chromaticity = Chromaticity::new(0.680, 0.320);
const P3_G: Chromaticity = Chromaticity::new(0.265, 0.690);
const P3_B: Chromaticity = Chromaticity::new(0.150, 0.060);

/// Academy TB-2014-004
const ACES_WHITE_POINT: WhitePoint = WhitePoint::new("ACES", Chromaticity::new(0.32168, 0.33767));
const ACES_AP0_R: Chromaticity = Chromaticity::new(0.73470, 0.26530);
const ACES_AP0_G: Chromaticity = Chromaticity::new(0.00000, 1.00000);
const ACES_AP0_B: Chromaticity = Chromaticity::new(0.00010, -0.0770);

/// Academy S-2014-004
const ACES_AP1_R: Chromaticity = Chromaticity::new(0.713, 0.293);
const ACES_AP1_G: Chromaticity = Chromaticity::new(0.165, 0.830);
const ACES_AP1_B: Chromaticity = Chromaticity::new(0.128, 0.044);

/// sRGB (IEC 61966-2-1).
pub static SRGB: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "sRGB",
        illuminant::D65,
        TransferFunctions::Srgb,
        SRGB_R,
        SRGB_G,
        SRGB_B,
    )
});

/// sRGB primaries without the transfer curve.
pub static LINEAR_SRGB: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "Linear sRGB",
        illuminant::D65,
        TransferFunctions::Linear,
        SRGB_R,
        SRGB_G,
        SRGB_B,
    )
});

/// ACES2065-1 (SMPTE ST 2065-1), AP0 primaries.
pub static ACES: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "ACES2065-1",
        ACES_WHITE_POINT,
        TransferFunctions::Linear,
        ACES_AP0_R,
        ACES_AP0_G,
        ACES_AP0_B,
    )
});

/// ACEScc, the logarithmic grading encoding over AP1.
pub static ACESCC: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "ACEScc",
        ACES_WHITE_POINT,
        TransferFunctions::AcesCc,
        ACES_AP1_R,
        ACES_AP1_G,
        ACES_AP1_B,
    )
});

/// ACEScct, ACEScc with a linear toe.
pub static ACESCCT: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "ACEScct",
        ACES_WHITE_POINT,
        TransferFunctions::AcesCct,
        ACES_AP1_R,
        ACES_AP1_G,
        ACES_AP1_B,
    )
});

/// ACEScg, the linear AP1 working space.
pub static ACESCG: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "ACEScg",
        ACES_WHITE_POINT,
        TransferFunctions::Linear,
        ACES_AP1_R,
        ACES_AP1_G,
        ACES_AP1_B,
    )
});

/// Adobe RGB (1998), `a98-rgb` in CSS.
pub static ADOBE_RGB: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "Adobe RGB",
        illuminant::D65,
        TransferFunctions::Gamma(2.19921875),
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.21, 0.71),
        Chromaticity::new(0.15, 0.06),
    )
});

/// ITU-R BT.2020, `rec2020` in CSS.
pub static BT2020: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "BT.2020",
        illuminant::D65,
        TransferFunctions::Bt2020,
        Chromaticity::new(0.708, 0.292),
        Chromaticity::new(0.170, 0.797),
        Chromaticity::new(0.131, 0.046),
    )
});

/// ITU-R BT.709.
pub static BT709: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "BT.709",
        illuminant::D65,
        TransferFunctions::Bt709,
        SRGB_R,
        SRGB_G,
        SRGB_B,
    )
});

/// DCI P3 (SMPTE RP 431-2) with the theatrical white point.
pub static DCI_P3: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "DCI P3",
        WhitePoint::new("DCI P3", Chromaticity::new(0.314, 0.351)),
        TransferFunctions::Gamma(2.6),
        P3_R,
        P3_G,
        P3_B,
    )
});

/// Display P3: P3 primaries, D65 white, sRGB curve.
pub static DISPLAY_P3: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "Display P3",
        illuminant::D65,
        TransferFunctions::Srgb,
        P3_R,
        P3_G,
        P3_B,
    )
});

/// ROMM RGB, also known as ProPhoto RGB.
pub static ROMM_RGB: LazyLock<RgbColorSpace> = LazyLock::new(|| {
    RgbColorSpace::new(
        "ROMM RGB",
        illuminant::D50,
        TransferFunctions::Romm,
        Chromaticity::new(0.7347, 0.2653),
        Chromaticity::new(0.1596, 0.8404),
        Chromaticity::new(0.0366, 0.0001),
    )
});

/// Every named space, in declaration order.
pub fn all() -> [RgbColorSpace; 12] {
    [
        *SRGB,
        *LINEAR_SRGB,
        *ACES,
        *ACESCC,
        *ACESCCT,
        *ACESCG,
        *ADOBE_RGB,
        *BT2020,
        *BT709,
        *DCI_P3,
        *DISPLAY_P3,
        *ROMM_RGB,
    ]
}

/// Look up a named space.
///
/// Accepts the display names above as well as the CSS Color 4 identifiers
/// (`srgb-linear`, `display-p3`, `a98-rgb`, `prophoto-rgb`, `rec2020`).
/// Matching ignores case and punctuation.
pub fn by_name(name: &str) -> Option<RgbColorSpace> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let space = match key.as_str() {
        "srgb" | "rgb" => *SRGB,
        "linearsrgb" | "srgblinear" => *LINEAR_SRGB,
        "aces" | "aces20651" => *ACES,
        "acescc" => *ACESCC,
        "acescct" => *ACESCCT,
        "acescg" => *ACESCG,
        "adobergb" | "a98rgb" => *ADOBE_RGB,
        "bt2020" | "rec2020" => *BT2020,
        "bt709" | "rec709" => *BT709,
        "dcip3" => *DCI_P3,
        "displayp3" => *DISPLAY_P3,
        "rommrgb" | "prophotorgb" => *ROMM_RGB,
        _ => return None,
    };
    Some(space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_css_and_display_names() {
        assert_eq!(by_name("sRGB"), Some(*SRGB));
        assert_eq!(by_name("display-p3"), Some(*DISPLAY_P3));
        assert_eq!(by_name("Display P3"), Some(*DISPLAY_P3));
        assert_eq!(by_name("a98-rgb"), Some(*ADOBE_RGB));
        assert_eq!(by_name("prophoto-rgb"), Some(*ROMM_RGB));
        assert_eq!(by_name("BT.2020"), Some(*BT2020));
        assert_eq!(by_name("srgb-linear"), Some(*LINEAR_SRGB));
        assert_eq!(by_name("cmyk"), None);
    }

    #[test]
    fn test_every_space_round_trips_through_its_name() {
        for space in all() {
            assert_eq!(by_name(space.name()), Some(space), "{space}");
        }
    }
}
