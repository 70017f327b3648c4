//! Color difference formulas.
//!
//! The ΔE formulas compare colors in CIELAB relative to D65, following
//! <http://brucelindbloom.com/index.html?ColorDifferenceCalc.html>.

use crate::math::{cos_deg, normalize_deg_f64, sin_deg};
use crate::model::Color;
use crate::white_point::illuminant;

#[inline]
fn lab(color: &Color) -> [f64; 3] {
    let lab = color.to_lab(illuminant::D65);
    [lab.l as f64, lab.a as f64, lab.b as f64]
}

#[inline]
fn hypot3(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}

/// Straight-line distance over the first three components, with `b`
/// converted into `a`'s space.
///
/// Only meaningful in rectangular spaces. Hue angles in polar spaces make the
/// distance arbitrary.
pub fn euclidean_distance(a: &Color, b: &Color) -> f32 {
    let c1 = a.to_array();
    let c2 = a.space().convert(b).to_array();
    let d = |i: usize| (c1[i] - c2[i]) as f64;
    hypot3(d(0), d(1), d(2)) as f32
}

/// CIE76 ΔE*ab, the euclidean distance in CIELAB.
pub fn difference_cie76(a: &Color, b: &Color) -> f32 {
    let [l1, a1, b1] = lab(a);
    let [l2, a2, b2] = lab(b);
    hypot3(l1 - l2, a1 - a2, b1 - b2) as f32
}

/// CIE94 ΔE. Graphic-arts weights by default, textile weights with
/// `textiles`.
pub fn difference_cie94(a: &Color, b: &Color, textiles: bool) -> f32 {
    let [l1, a1, b1] = lab(a);
    let [l2, a2, b2] = lab(b);
    let (kl, k1, k2) = if textiles {
        (2.0, 0.048, 0.014)
    } else {
        (1.0, 0.045, 0.015)
    };

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let (dl, da, db, dc) = (l1 - l2, a1 - a2, b1 - b2, c1 - c2);
    let dh = (da * da + db * db - dc * dc).sqrt();
    let sc = 1.0 + k1 * c1;
    let sh = 1.0 + k2 * c1;
    hypot3(dl / kl, dc / sc, dh / sh) as f32
}

/// CIEDE2000 ΔE.
pub fn difference_cie2000(a: &Color, b: &Color) -> f32 {
    let [l1, a1, b1] = lab(a);
    let [l2, a2, b2] = lab(b);
    let pow7_25 = 25f64.powi(7);

    let lbp = (l1 + l2) / 2.0;
    let cb = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let cb7 = cb.powi(7);
    let g = 1.0 - (cb7 / (cb7 + pow7_25)).sqrt();
    let ap1 = a1 * (1.0 + g);
    let ap2 = a2 * (1.0 + g);
    let cp1 = ap1.hypot(b1);
    let cp2 = ap2.hypot(b2);
    let cbp = (cp1 + cp2) / 2.0;
    let hp1 = normalize_deg_f64(b1.atan2(ap1).to_degrees());
    let hp2 = normalize_deg_f64(b2.atan2(ap2).to_degrees());
    let hp_diff = (hp1 - hp2).abs();
    let hbp = if hp_diff > 180.0 {
        (hp1 + hp2 + 360.0) / 2.0
    } else {
        (hp1 + hp2) / 2.0
    };
    let t = 1.0 - 0.17 * cos_deg(hbp - 30.0)
        + 0.24 * cos_deg(2.0 * hbp)
        + 0.32 * cos_deg(3.0 * hbp + 6.0)
        - 0.20 * cos_deg(4.0 * hbp - 63.0);

    let dhp = if hp_diff <= 180.0 {
        hp2 - hp1
    } else if hp2 <= hp1 {
        hp2 - hp1 + 360.0
    } else {
        hp2 - hp1 - 360.0
    };

    let dlp = l2 - l1;
    let dcp = cp2 - cp1;
    let dhhp = 2.0 * (cp1 * cp2).sqrt() * sin_deg(dhp / 2.0);
    let sl = 1.0 + (0.015 * (lbp - 50.0).powi(2)) / (20.0 + (lbp - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * cbp;
    let sh = 1.0 + 0.015 * cbp * t;
    let d_theta = 30.0 * (-((hbp - 275.0) / 25.0).powi(2)).exp();
    let cbp7 = cbp.powi(7);
    let rc = (cbp7 / (cbp7 + pow7_25)).sqrt();
    let rt = -2.0 * rc * sin_deg(2.0 * d_theta);

    ((dlp / sl).powi(2) + (dcp / sc).powi(2) + (dhhp / sh).powi(2) + rt * (dcp / sc) * (dhhp / sh))
        .sqrt() as f32
}

/// CMC l:c ΔE. The usual weights are `l = 2, c = 1` for acceptability and
/// `l = 1, c = 1` for perceptibility.
///
/// Not symmetric: `a` is the reference color.
pub fn difference_cmc(a: &Color, b: &Color, l: f32, c: f32) -> f32 {
    let [l1, a1, b1] = lab(a);
    let [l2, a2, b2] = lab(b);
    let (l, c) = (l as f64, c as f64);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let (dl, da, db, dc) = (l1 - l2, a1 - a2, b1 - b2, c1 - c2);

    let h1 = normalize_deg_f64(b1.atan2(a1).to_degrees());
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * cos_deg(h1 + 168.0)).abs()
    } else {
        0.36 + (0.4 * cos_deg(h1 + 35.0)).abs()
    };
    let f = (c1.powi(4) / (c1.powi(4) + 1900.0)).sqrt();
    let sl = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
    let sh = sc * (f * t + 1.0 - f);
    // (ΔH)²
    let dh2 = da * da + db * db - dc * dc;

    let v1 = dl / (l * sl);
    let v2 = dc / (c * sc);
    (v1 * v1 + v2 * v2 + dh2 / (sh * sh)).sqrt() as f32
}

/// ΔEz, the distance in JzCzHz. Typically `0.0..=1.0`.
///
/// An undefined hue counts as `0`.
pub fn difference_ez(a: &Color, b: &Color) -> f32 {
    let jch = |color: &Color| {
        let c = color.to_jzczhz();
        let h = if c.h.is_nan() { 0.0 } else { c.h as f64 };
        (c.j as f64, c.c as f64, h)
    };
    let (j1, c1, h1) = jch(a);
    let (j2, c2, h2) = jch(b);
    // (ΔHz)²
    let dh2 = 2.0 * c1 * c2 * (1.0 - cos_deg(h2 - h1));
    ((j2 - j1).powi(2) + (c2 - c1).powi(2) + dh2).sqrt() as f32
}
