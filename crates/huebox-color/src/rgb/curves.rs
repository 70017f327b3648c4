//! Encode/decode formulas of the named RGB spaces.
//!
//! Every curve here is a plain [`Curve`] pair. [`TransferFunctions`] only maps
//! its named variants onto these pairs, so the generic RGB code never sees a
//! formula.
//!
//! [`TransferFunctions`]: super::TransferFunctions

use crate::math::spow;

/// An OETF / EOTF function pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Curve {
    pub oetf: fn(f32) -> f32,
    pub eotf: fn(f32) -> f32,
}

pub(crate) const SRGB: Curve = Curve {
    oetf: srgb_oetf,
    eotf: srgb_eotf,
};
pub(crate) const BT709: Curve = Curve {
    oetf: bt709::oetf,
    eotf: bt709::eotf,
};
pub(crate) const BT2020: Curve = Curve {
    oetf: bt2020::oetf,
    eotf: bt2020::eotf,
};
pub(crate) const ROMM: Curve = Curve {
    oetf: romm::oetf,
    eotf: romm::eotf,
};
pub(crate) const ACESCC: Curve = Curve {
    oetf: aces::cc_oetf,
    eotf: aces::cc_eotf,
};
pub(crate) const ACESCCT: Curve = Curve {
    oetf: aces::cct_oetf,
    eotf: aces::cct_eotf,
};

/// sRGB encode.
#[inline]
pub fn srgb_oetf(x: f32) -> f32 {
    let x = x as f64;
    if x <= 0.0031308 {
        (x * 12.92) as f32
    } else {
        (1.055 * spow(x, 1.0 / 2.4) - 0.055) as f32
    }
}

/// sRGB decode.
#[inline]
pub fn srgb_eotf(x: f32) -> f32 {
    let x = x as f64;
    if x <= 0.04045 {
        (x / 12.92) as f32
    } else {
        spow((x + 0.055) / 1.055, 2.4) as f32
    }
}

/// ITU-R BT.709.
mod bt709 {
    use crate::math::spow;

    pub(super) fn oetf(x: f32) -> f32 {
        let x = x as f64;
        if x < 0.018 {
            (4.5 * x) as f32
        } else {
            (1.099 * spow(x, 0.45) - 0.099) as f32
        }
    }

    pub(super) fn eotf(x: f32) -> f32 {
        let cutoff = 1.099 * spow(0.018, 0.45) - 0.099;
        let x64 = x as f64;
        if x64 < cutoff {
            x / 4.5
        } else {
            spow((x64 + 0.099) / 1.099, 1.0 / 0.45) as f32
        }
    }
}

/// ITU-R BT.2020, 12-bit system constants.
mod bt2020 {
    use crate::math::spow;

    const A: f64 = 1.0993;
    const B: f64 = 0.0181;

    pub(super) fn oetf(x: f32) -> f32 {
        let x = x as f64;
        if x < B {
            (4.5 * x) as f32
        } else {
            (A * spow(x, 0.45) - (A - 1.0)) as f32
        }
    }

    pub(super) fn eotf(x: f32) -> f32 {
        let cutoff = A * B.powf(0.45) - (A - 1.0);
        let x64 = x as f64;
        if x64 < cutoff {
            x / 4.5
        } else {
            spow((x64 + (A - 1.0)) / A, 1.0 / 0.45) as f32
        }
    }
}

/// ROMM RGB (ProPhoto).
mod romm {
    use crate::math::spow;

    const C: f64 = 0.001953;

    pub(super) fn oetf(x: f32) -> f32 {
        let x = x as f64;
        if x < C {
            (x * 16.0) as f32
        } else {
            spow(x, 1.0 / 1.8) as f32
        }
    }

    pub(super) fn eotf(x: f32) -> f32 {
        let x = x as f64;
        if x < 16.0 * C {
            (x / 16.0) as f32
        } else {
            spow(x, 1.8) as f32
        }
    }
}

/// Academy S-2014-003 (ACEScc) and S-2016-001 (ACEScct).
mod aces {
    use crate::math::spow;

    const TWO_POW_N15: f64 = 1.0 / 32768.0;
    const TWO_POW_N16: f64 = 1.0 / 65536.0;
    const CCT_A: f64 = 10.5402377416545;
    const CCT_B: f64 = 0.0729055341958355;
    /// Largest half-float value
    const HALF_MAX: f64 = 65504.0;

    #[inline]
    fn eotf_upper() -> f64 {
        (HALF_MAX.log2() + 9.72) / 17.52
    }

    pub(super) fn cc_oetf(x: f32) -> f32 {
        let x = x as f64;
        let v = if x < TWO_POW_N15 {
            ((TWO_POW_N16 + x.max(0.0) / 2.0).log2() + 9.72) / 17.52
        } else {
            (x.log2() + 9.72) / 17.52
        };
        v as f32
    }

    pub(super) fn cc_eotf(x: f32) -> f32 {
        let x = x as f64;
        let v = if x <= (9.72 - 15.0) / 17.52 {
            (spow(2.0, x * 17.52 - 9.72) - TWO_POW_N16) * 2.0
        } else if x < eotf_upper() {
            2f64.powf(x * 17.52 - 9.72)
        } else {
            HALF_MAX
        };
        v as f32
    }

    pub(super) fn cct_oetf(x: f32) -> f32 {
        let x = x as f64;
        let v = if x < 0.0078125 {
            CCT_A * x + CCT_B
        } else {
            (x.log2() + 9.72) / 17.52
        };
        v as f32
    }

    pub(super) fn cct_eotf(x: f32) -> f32 {
        let x = x as f64;
        let v = if x <= 0.155251141552511 {
            (x - CCT_B) / CCT_A
        } else if x < eotf_upper() {
            2f64.powf(x * 17.52 - 9.72)
        } else {
            HALF_MAX
        };
        v as f32
    }
}

/// SMPTE ST 2084 perceptual quantizer, as used by ICtCp.
///
/// Linear values are absolute luminance in cd/m² (peak 10 000).
pub(crate) mod pq {
    use crate::math::spow;

    const M1: f64 = 2610.0 / 16384.0;
    const M2: f64 = 2523.0 / 4096.0 * 128.0;
    const C1: f64 = 3424.0 / 4096.0;
    const C2: f64 = 2413.0 / 4096.0 * 32.0;
    const C3: f64 = 2392.0 / 4096.0 * 32.0;
    const PEAK: f64 = 10000.0;

    pub(crate) fn eotf(x: f32) -> f32 {
        let vp = spow(x as f64, 1.0 / M2);
        let n = (vp - C1).max(0.0);
        let l = spow(n / (C2 - C3 * vp), 1.0 / M1);
        (PEAK * l) as f32
    }

    pub(crate) fn oetf(x: f32) -> f32 {
        let yp = spow(x as f64 / PEAK, M1);
        spow((C1 + C2 * yp) / (1.0 + C3 * yp), M2) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_known_values() {
        assert_eq!(srgb_eotf(0.0), 0.0);
        assert!((srgb_eotf(1.0) - 1.0).abs() < 1e-6);
        // Mid gray #808080 decodes to ~21.6% linear light
        assert!((srgb_eotf(128.0 / 255.0) - 0.2158605).abs() < 1e-5);
        assert!((srgb_oetf(0.2158605) - 128.0 / 255.0).abs() < 1e-5);
    }

    #[test]
    fn test_curves_are_continuous_at_the_toe() {
        for (name, curve, knee) in [
            ("BT.709", BT709, 0.018f32),
            ("BT.2020", BT2020, 0.0181),
            ("ROMM", ROMM, 0.001953),
        ] {
            let below = (curve.oetf)(knee - 1e-6);
            let above = (curve.oetf)(knee + 1e-6);
            assert!((above - below).abs() < 1e-3, "{name}: jump {below} -> {above}");
        }
    }

    #[test]
    fn test_acescc_clamps_to_half_max() {
        assert_eq!((ACESCC.eotf)(2.0), 65504.0);
        assert_eq!((ACESCCT.eotf)(2.0), 65504.0);
    }

    #[test]
    fn test_pq_round_trip() {
        for x in [0.0f32, 1.0, 100.0, 1000.0, 10000.0] {
            let y = pq::eotf(pq::oetf(x));
            assert!((y - x).abs() <= x.max(1.0) * 1e-3, "{x} -> {y}");
        }
    }
}
