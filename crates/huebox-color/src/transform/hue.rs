//! Hue adjustment rules for interpolating polar components.
//!
//! Defined in <https://www.w3.org/TR/css-color-4/#hue-interpolation>.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::math::normalize_deg;

/// How the angle between two hues is chosen when interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueAdjustment {
    /// Difference in `[-180, 180]`
    #[default]
    Shorter,
    /// Difference 0 or in `[180, 360)`, keeping its sign
    Longer,
    /// Difference in `[0, 360)`
    Increasing,
    /// Difference in `(-360, 0]`
    Decreasing,
    /// Angles are used as given
    Specified,
}

impl HueAdjustment {
    pub const ALL: [HueAdjustment; 5] = [
        HueAdjustment::Shorter,
        HueAdjustment::Longer,
        HueAdjustment::Increasing,
        HueAdjustment::Decreasing,
        HueAdjustment::Specified,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HueAdjustment::Shorter => "shorter",
            HueAdjustment::Longer => "longer",
            HueAdjustment::Increasing => "increasing",
            HueAdjustment::Decreasing => "decreasing",
            HueAdjustment::Specified => "specified",
        }
    }

    /// Adjust the signed difference between two normalized hues.
    #[inline]
    pub fn adjust_delta(&self, delta: f32) -> f32 {
        match self {
            HueAdjustment::Shorter if delta.abs() > 180.0 => delta - 360f32.copysign(delta),
            HueAdjustment::Longer if delta != 0.0 && delta.abs() < 180.0 => {
                delta - 360f32.copysign(delta)
            }
            HueAdjustment::Increasing if delta < 0.0 => delta + 360.0,
            HueAdjustment::Decreasing if delta > 0.0 => delta - 360.0,
            _ => delta,
        }
    }

    /// Adjust a pair of hues so that `h2 - h1` is the difference this rule
    /// asks for.
    ///
    /// `NaN` on either side leaves the pair as `NaN` and unadjusted.
    ///
    /// ```
    /// use huebox_color::transform::HueAdjustment;
    ///
    /// assert_eq!(HueAdjustment::Shorter.adjust_pair(10.0, 350.0), (10.0, -10.0));
    /// assert_eq!(HueAdjustment::Increasing.adjust_pair(350.0, 10.0), (350.0, 370.0));
    /// ```
    pub fn adjust_pair(&self, h1: f32, h2: f32) -> (f32, f32) {
        let mut hues = [h1, h2];
        self.apply(&mut hues);
        (hues[0], hues[1])
    }

    /// Adjust a run of hues in place, each relative to the adjusted one
    /// before it.
    ///
    /// A `NaN` hue stays `NaN` and breaks the run: the hue after it starts
    /// fresh from its value wrapped into `[0, 360)`, so `370` comes back as `10`.
    pub fn apply(&self, hues: &mut [f32]) {
        if *self == HueAdjustment::Specified {
            return;
        }
        let Some(first) = hues.first_mut() else {
            return;
        };
        *first = normalize_deg(*first);
        for i in 1..hues.len() {
            let prev = hues[i - 1];
            let hue = hues[i];
            if hue.is_nan() {
                continue;
            }
            hues[i] = if prev.is_nan() {
                normalize_deg(hue)
            } else {
                prev + self.adjust_delta(normalize_deg(hue) - normalize_deg(prev))
            };
        }
    }
}

impl fmt::Display for HueAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HueAdjustment {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.name() == name)
            .ok_or_else(|| ColorError::UnknownHueAdjustment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(adjustment: HueAdjustment, h1: f32, h2: f32) -> f32 {
        let (a, b) = adjustment.adjust_pair(h1, h2);
        b - a
    }

    #[test]
    fn test_shorter() {
        assert_eq!(delta(HueAdjustment::Shorter, 10.0, 350.0), -20.0);
        assert_eq!(delta(HueAdjustment::Shorter, 350.0, 10.0), 20.0);
        assert_eq!(delta(HueAdjustment::Shorter, 0.0, 180.0), 180.0);
        assert_eq!(delta(HueAdjustment::Shorter, 40.0, 60.0), 20.0);
    }

    #[test]
    fn test_longer() {
        assert_eq!(delta(HueAdjustment::Longer, 40.0, 60.0), -340.0);
        assert_eq!(delta(HueAdjustment::Longer, 60.0, 40.0), 340.0);
        assert_eq!(delta(HueAdjustment::Longer, 10.0, 350.0), 340.0);
        assert_eq!(delta(HueAdjustment::Longer, 90.0, 90.0), 0.0);
    }

    #[test]
    fn test_increasing_and_decreasing() {
        assert_eq!(delta(HueAdjustment::Increasing, 350.0, 10.0), 20.0);
        assert_eq!(delta(HueAdjustment::Increasing, 10.0, 350.0), 340.0);
        assert_eq!(delta(HueAdjustment::Decreasing, 10.0, 350.0), -20.0);
        assert_eq!(delta(HueAdjustment::Decreasing, 350.0, 10.0), -340.0);
        assert_eq!(delta(HueAdjustment::Decreasing, 20.0, 20.0), 0.0);
    }

    #[test]
    fn test_specified_leaves_angles() {
        assert_eq!(HueAdjustment::Specified.adjust_pair(10.0, 700.0), (10.0, 700.0));
    }

    #[test]
    fn test_nan_is_left_alone() {
        let (a, b) = HueAdjustment::Shorter.adjust_pair(f32::NAN, 350.0);
        assert!(a.is_nan());
        assert_eq!(b, 350.0);

        let mut hues = [10.0, f32::NAN, 350.0, 20.0];
        HueAdjustment::Shorter.apply(&mut hues);
        assert_eq!(hues[0], 10.0);
        assert!(hues[1].is_nan());
        // The run after the NaN starts over instead of continuing from 10.
        assert_eq!(hues[2], 350.0);
        assert_eq!(hues[3], 380.0);
    }

    #[test]
    fn test_hue_after_nan_is_wrapped() {
        let mut hues = [f32::NAN, 370.0, 20.0];
        HueAdjustment::Increasing.apply(&mut hues);
        assert!(hues[0].is_nan());
        assert_eq!(hues[1], 10.0);
        assert_eq!(hues[2], 20.0);
    }

    #[test]
    fn test_run_accumulates() {
        let mut hues = [0.0, 120.0, 240.0, 0.0];
        HueAdjustment::Increasing.apply(&mut hues);
        assert_eq!(hues, [0.0, 120.0, 240.0, 360.0]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Longer".parse(), Ok(HueAdjustment::Longer));
        assert_eq!(
            "sideways".parse::<HueAdjustment>(),
            Err(ColorError::UnknownHueAdjustment("sideways".to_string()))
        );
        for h in HueAdjustment::ALL {
            assert_eq!(h.to_string().parse(), Ok(h));
        }
    }
}
