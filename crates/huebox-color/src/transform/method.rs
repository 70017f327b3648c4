//! Per-channel interpolation methods.
//!
//! A method turns the `(position, value)` points of one component into a
//! function over position. The interpolator builds one per component.

use crate::math::{lerp, min3_nan, sign};

/// How component values are interpolated between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMethod {
    /// Piecewise linear
    #[default]
    Linear,
    /// Steffen's monotonic cubic spline.
    ///
    /// Passes through every stop and never leaves the bounding box of the two
    /// stops around a segment. With `parabolic_endpoints` the end slopes come
    /// from the parabola through the first (or last) three points, clamped to
    /// avoid overshoot; otherwise they are one-sided differences. Falls back
    /// to linear with fewer than three stops.
    ///
    /// Steffen, M., "A simple method for monotonic interpolation in one
    /// dimension", Astronomy and Astrophysics 239, 443-450 (1990).
    MonotoneSpline { parabolic_endpoints: bool },
}

impl InterpolationMethod {
    pub const MONOTONE_SPLINE: InterpolationMethod = InterpolationMethod::MonotoneSpline {
        parabolic_endpoints: false,
    };

    pub(crate) fn build(&self, points: Vec<Point>) -> ChannelInterpolator {
        match *self {
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints,
            } if points.len() >= 3 => {
                ChannelInterpolator::Spline(MonotoneSpline::new(points, parabolic_endpoints))
            }
            _ => ChannelInterpolator::Linear(points),
        }
    }
}

/// One `(position, value)` sample of a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub(crate) enum ChannelInterpolator {
    Linear(Vec<Point>),
    Spline(MonotoneSpline),
}

impl ChannelInterpolator {
    pub(crate) fn interpolate(&self, t: f32) -> f32 {
        match self {
            ChannelInterpolator::Linear(points) => interpolate_linear(points, t),
            ChannelInterpolator::Spline(spline) => spline.interpolate(t),
        }
    }
}

/// Index of the last point at or before `t`.
#[inline]
fn segment_start(points: &[Point], t: f32) -> Option<usize> {
    points.iter().rposition(|p| p.x <= t)
}

fn interpolate_linear(points: &[Point], t: f32) -> f32 {
    let Some(start) = segment_start(points, t) else {
        return points.first().map_or(f32::NAN, |p| p.y);
    };
    let left = points[start];
    if left.x == t || start == points.len() - 1 {
        return left.y;
    }
    let right = points[start + 1];
    lerp(left.y, right.y, (t - left.x) / (right.x - left.x))
}

#[derive(Debug, Clone)]
pub(crate) struct MonotoneSpline {
    points: Vec<Point>,
    /// Interval widths `x[i+1] - x[i]`
    h: Vec<f32>,
    /// Secant slopes over each interval
    s: Vec<f32>,
    /// First derivatives at each point
    yp: Vec<f32>,
}

impl MonotoneSpline {
    /// Requires at least three points.
    fn new(points: Vec<Point>, parabolic_endpoints: bool) -> Self {
        let n = points.len() - 1;
        let h: Vec<f32> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
        let s: Vec<f32> = points
            .windows(2)
            .zip(&h)
            .map(|(w, h)| (w[1].y - w[0].y) / h)
            .collect();

        // Slope of the parabola through i-1, i, i+1.
        let p: Vec<f32> = (0..=n)
            .map(|i| {
                if i == 0 {
                    s[0] * (1.0 + h[0] / (h[0] + h[1])) - s[1] * (h[0] / (h[0] + h[1]))
                } else if i == n {
                    s[n - 1] * (1.0 + h[n - 1] / (h[n - 1] + h[n - 2]))
                        - s[n - 2] * (h[n - 1] / (h[n - 1] + h[n - 2]))
                } else {
                    (s[i - 1] * h[i] + s[i] * h[i - 1]) / (h[i - 1] + h[i])
                }
            })
            .collect();

        let endpoint = |p: f32, s: f32| {
            if !parabolic_endpoints {
                s
            } else if p * s <= 0.0 {
                0.0
            } else if p.abs() > 2.0 * s.abs() {
                2.0 * s
            } else {
                p
            }
        };
        let yp: Vec<f32> = (0..=n)
            .map(|i| {
                if i == 0 {
                    endpoint(p[0], s[0])
                } else if i == n {
                    endpoint(p[n], s[n - 1])
                } else {
                    (sign(s[i - 1]) + sign(s[i]))
                        * min3_nan(s[i - 1].abs(), s[i].abs(), p[i].abs() / 2.0)
                }
            })
            .collect();

        Self { points, h, s, yp }
    }

    fn interpolate(&self, t: f32) -> f32 {
        let n = self.points.len() - 1;
        let i = segment_start(&self.points, t).unwrap_or(0).min(n - 1);
        let Point { x: xi, y: yi } = self.points[i];
        let dx = t - xi;
        if dx == 0.0 {
            return yi;
        }
        let (h, s) = (self.h[i], self.s[i]);
        let a = (self.yp[i] + self.yp[i + 1] - 2.0 * s) / (h * h);
        let b = (3.0 * s - 2.0 * self.yp[i] - self.yp[i + 1]) / h;
        let f = a * dx.powi(3) + b * dx.powi(2) + self.yp[i] * dx + yi;
        if !f.is_nan() {
            return f;
        }

        // NaN values or coincident stops leave too few points for a cubic.
        if t <= self.points[0].x {
            self.points[0].y
        } else if t >= self.points[n].x {
            self.points[n].y
        } else {
            lerp(yi, self.points[i + 1].y, dx / (self.points[i + 1].x - xi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(xs: &[f32], ys: &[f32]) -> Vec<Point> {
        xs.iter().zip(ys).map(|(&x, &y)| Point { x, y }).collect()
    }

    fn assert_samples(channel: &ChannelInterpolator, expected: &[(f32, f32)]) {
        for &(t, want) in expected {
            let got = channel.interpolate(t);
            assert!((got - want).abs() < 1e-4, "at {t}: got {got}, expected {want}");
        }
    }

    const XS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
    const YS: [f32; 5] = [0.0, 187.0 / 255.0, 68.0 / 255.0, 1.0, 136.0 / 255.0];

    #[test]
    fn test_linear() {
        let channel = InterpolationMethod::Linear.build(points(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]));
        assert_samples(&channel, &[(-1.0, 0.0), (0.25, 0.5), (0.5, 1.0), (0.75, 0.5), (2.0, 0.0)]);
    }

    #[test]
    fn test_linear_nan_defers_to_other_side() {
        let channel =
            InterpolationMethod::Linear.build(points(&[0.0, 1.0], &[f32::NAN, 90.0]));
        assert_eq!(channel.interpolate(0.3), 90.0);
        assert!(channel.interpolate(0.0).is_nan());
    }

    #[test]
    fn test_monotone_spline_equal_spacing() {
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(points(&XS, &YS));
        assert_samples(
            &channel,
            &[
                (0.0, 0.0),
                (0.05, 0.17013),
                (0.1, 0.36373),
                (0.15, 0.5456),
                (0.2, 0.68053),
                (0.4, 0.43093),
                (0.45, 0.3152),
                (0.5, 0.26667),
                (0.55, 0.34293),
                (0.6, 0.5248),
                (0.8, 0.9664),
                (1.0, 0.53333),
            ],
        );
    }

    #[test]
    fn test_monotone_spline_parabolic_endpoints() {
        let method = InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: true,
        };
        let channel = method.build(points(&XS, &YS));
        assert_samples(
            &channel,
            &[
                (0.05, 0.24693),
                (0.1, 0.45013),
                (0.15, 0.6032),
                (0.2, 0.69973),
                (0.45, 0.3152),
                (0.8, 0.98133),
            ],
        );
    }

    #[test]
    fn test_monotone_spline_unequal_spacing() {
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(points(
            &[0.1, 0.2, 0.4, 0.9],
            &[0.0, 68.0 / 255.0, 34.0 / 255.0, 170.0 / 255.0],
        ));
        assert_samples(
            &channel,
            &[
                (0.1, 0.0),
                (0.15, 0.16667),
                (0.2, 0.26667),
                (0.3, 0.2),
                (0.4, 0.13333),
                (0.5, 0.17173),
                (0.9, 0.66667),
            ],
        );
    }

    #[test]
    fn test_monotone_spline_stays_within_neighbors() {
        let pts = points(&XS, &YS);
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(pts.clone());
        for w in pts.windows(2) {
            let (lo, hi) = (w[0].y.min(w[1].y), w[0].y.max(w[1].y));
            for k in 0..=20 {
                let t = w[0].x + (w[1].x - w[0].x) * k as f32 / 20.0;
                let v = channel.interpolate(t);
                assert!(v >= lo - 1e-6 && v <= hi + 1e-6, "{v} outside [{lo}, {hi}] at {t}");
            }
        }
    }

    #[test]
    fn test_three_stops_hit_middle_exactly() {
        let channel =
            InterpolationMethod::MONOTONE_SPLINE.build(points(&[0.0, 0.5, 1.0], &[0.2, 0.9, 0.4]));
        assert_eq!(channel.interpolate(0.5), 0.9);
        assert_eq!(channel.interpolate(0.0), 0.2);
        assert!((channel.interpolate(1.0) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_monotone_spline_falls_back_with_two_points() {
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(points(&[0.0, 1.0], &[0.0, 1.0]));
        assert!(matches!(channel, ChannelInterpolator::Linear(_)));
        assert_eq!(channel.interpolate(0.25), 0.25);
    }

    #[test]
    fn test_monotone_spline_nan_segments_fall_back_to_linear() {
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(points(
            &[0.0, 0.4, 0.5, 0.6, 1.0],
            &[f32::NAN, 80.0, 200.0, 100.0, f32::NAN],
        ));
        assert!(channel.interpolate(0.0).is_nan());
        assert_samples(&channel, &[(0.2, 80.0), (0.45, 140.0), (0.55, 150.0), (0.8, 100.0)]);
    }

    #[test]
    fn test_coincident_stops() {
        let channel = InterpolationMethod::MONOTONE_SPLINE.build(points(
            &[0.0, 0.5, 0.5, 1.0],
            &[0.0, 0.2, 0.8, 1.0],
        ));
        assert_samples(&channel, &[(0.25, 0.075), (0.5, 0.8), (0.75, 0.925)]);
    }
}
