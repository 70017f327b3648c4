//! ANSI terminal color codes.
//!
//! ANSI codes have no alpha; both types always report an opaque alpha of 1.

use super::Rgb;

/// An ANSI-16 SGR color code.
///
/// | Color  | Foreground | Background | Bright FG | Bright BG |
/// | ------ | ---------- | ---------- | --------- | --------- |
/// | black  | 30         | 40         | 90        | 100       |
/// | red    | 31         | 41         | 91        | 101       |
/// | green  | 32         | 42         | 92        | 102       |
/// | yellow | 33         | 43         | 93        | 103       |
/// | blue   | 34         | 44         | 94        | 104       |
/// | purple | 35         | 45         | 95        | 105       |
/// | cyan   | 36         | 46         | 96        | 106       |
/// | white  | 37         | 47         | 97        | 107       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi16 {
    pub code: u8,
}

impl Ansi16 {
    #[inline]
    pub const fn new(code: u8) -> Self {
        Self { code }
    }

    #[inline]
    fn is_bright(&self) -> bool {
        self.code >= 90
    }

    pub fn to_srgb(&self) -> Rgb {
        let color = self.code % 10;

        if color == 0 || color == 7 {
            let c = if self.is_bright() {
                color as f32 + 3.5
            } else {
                color as f32
            };
            let v = c / 10.5;
            return Rgb::new(v, v, v);
        }

        let mul = if self.is_bright() { 1.0 } else { 0.5 };
        Rgb::new(
            (color % 2) as f32 * mul,
            ((color / 2) % 2) as f32 * mul,
            ((color / 4) % 2) as f32 * mul,
        )
    }

    /// The equivalent code in the first sixteen ANSI-256 entries.
    pub fn to_ansi256(&self) -> Ansi256 {
        let color = self.code % 10;
        Ansi256::new(if self.is_bright() { color + 8 } else { color })
    }
}

/// An ANSI-256 indexed color.
///
/// - `0..=7`: standard colors (ANSI-16 `30..=37`)
/// - `8..=15`: bright colors (ANSI-16 `90..=97`)
/// - `16..=231`: a 6×6×6 color cube
/// - `232..=255`: a 24-step gray ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256 {
    pub code: u8,
}

impl Ansi256 {
    #[inline]
    pub const fn new(code: u8) -> Self {
        Self { code }
    }

    pub fn to_srgb(&self) -> Rgb {
        let code = self.code;
        if code < 16 {
            return self.to_ansi16().to_srgb();
        }

        if code >= 232 {
            let c = (code - 232) * 10 + 8;
            return Rgb::from_u8(c, c, c);
        }

        let c = code - 16;
        let rem = c % 36;
        Rgb::new(
            (c / 36) as f32 / 5.0,
            (rem / 6) as f32 / 5.0,
            (rem % 6) as f32 / 5.0,
        )
    }

    /// Codes below 16 map onto ANSI-16 directly; the rest go through sRGB.
    pub fn to_ansi16(&self) -> Ansi16 {
        match self.code {
            0..=7 => Ansi16::new(self.code + 30),
            8..=15 => Ansi16::new(self.code - 8 + 90),
            _ => self.to_srgb().to_ansi16(),
        }
    }
}
