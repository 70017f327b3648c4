//! Chromaticity coordinates and reference white points.

use std::hash::{Hash, Hasher};

/// A CIE xyY chromaticity: relative `x`, `y` plus an absolute luminance `Y`.
///
/// The tristimulus `X` and `Z` are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
    /// Absolute luminance `Y`.
    pub luminance: f32,
}

impl Chromaticity {
    /// Chromaticity with luminance 1.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            luminance: 1.0,
        }
    }

    #[inline]
    pub const fn with_luminance(x: f32, y: f32, luminance: f32) -> Self {
        Self { x, y, luminance }
    }

    /// Relative `z = 1 - x - y`.
    #[inline]
    pub fn z(&self) -> f32 {
        1.0 - self.x - self.y
    }

    /// Tristimulus `X = x * Y / y`.
    #[inline]
    pub fn tristimulus_x(&self) -> f32 {
        self.x * self.luminance / self.y
    }

    #[inline]
    pub fn tristimulus_y(&self) -> f32 {
        self.luminance
    }

    /// Tristimulus `Z = (1 - x - y) * Y / y`.
    #[inline]
    pub fn tristimulus_z(&self) -> f32 {
        (1.0 - self.x - self.y) * self.luminance / self.y
    }

    #[inline]
    pub fn tristimulus(&self) -> [f32; 3] {
        [
            self.tristimulus_x(),
            self.tristimulus_y(),
            self.tristimulus_z(),
        ]
    }
}

impl Eq for Chromaticity {}

impl Hash for Chromaticity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.luminance.to_bits().hash(state);
    }
}

/// A named reference white.
///
/// Equality and hashing cover the name and the chromaticity, so two spaces
/// built on the same illuminant compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    pub chromaticity: Chromaticity,
}

impl WhitePoint {
    #[inline]
    pub const fn new(name: &'static str, chromaticity: Chromaticity) -> Self {
        Self { name, chromaticity }
    }
}

impl Eq for WhitePoint {}

impl Hash for WhitePoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.chromaticity.hash(state);
    }
}

impl std::fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// CIE standard illuminants, 2° observer.
///
/// Values from <https://en.wikipedia.org/wiki/Standard_illuminant#White_points_of_standard_illuminants>.
pub mod illuminant {
    use super::{Chromaticity, WhitePoint};

    /// Incandescent / tungsten
    pub const A: WhitePoint = WhitePoint::new("A", Chromaticity::new(0.44758, 0.40745));
    /// Obsolete direct sunlight at noon
    pub const B: WhitePoint = WhitePoint::new("B", Chromaticity::new(0.34842, 0.35161));
    /// Obsolete average daylight
    pub const C: WhitePoint = WhitePoint::new("C", Chromaticity::new(0.31006, 0.31616));
    /// Horizon light, ICC profile PCS
    pub const D50: WhitePoint = WhitePoint::new("D50", Chromaticity::new(0.34570, 0.35850));
    /// Mid-morning / mid-afternoon daylight
    pub const D55: WhitePoint = WhitePoint::new("D55", Chromaticity::new(0.33243, 0.34744));
    /// Noon daylight, used by sRGB and most display spaces
    pub const D65: WhitePoint = WhitePoint::new("D65", Chromaticity::new(0.31270, 0.32900));
    /// North sky daylight
    pub const D75: WhitePoint = WhitePoint::new("D75", Chromaticity::new(0.29903, 0.31488));
    /// Equal energy
    pub const E: WhitePoint = WhitePoint::new("E", Chromaticity::new(1.0 / 3.0, 1.0 / 3.0));

    /// Look up an illuminant by its (case-insensitive) name.
    pub fn by_name(name: &str) -> Option<WhitePoint> {
        let wp = match name.to_ascii_uppercase().as_str() {
            "A" => A,
            "B" => B,
            "C" => C,
            "D50" => D50,
            "D55" => D55,
            "D65" => D65,
            "D75" => D75,
            "E" => E,
            _ => return None,
        };
        Some(wp)
    }
}
