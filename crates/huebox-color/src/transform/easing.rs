//! Easing functions that remap an interpolation position.
//!
//! An easing maps `t` in `[0, 1]` to a new position, returning `0` at `0` and
//! `1` at `1`. The CSS presets follow
//! <https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions>.

use crate::error::ColorError;
use crate::math::scale_range;

/// A position remapping applied before interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    /// Leaves the position unchanged
    #[default]
    Linear,
    /// Piecewise linear, moving the midpoint to the given position
    Midpoint(f32),
    CubicBezier(CubicBezier),
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    pub const EASE: Easing = Easing::CubicBezier(CubicBezier::new_unchecked(0.25, 0.1, 0.25, 1.0));
    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    pub const EASE_IN: Easing = Easing::CubicBezier(CubicBezier::new_unchecked(0.42, 0.0, 1.0, 1.0));
    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    pub const EASE_OUT: Easing =
        Easing::CubicBezier(CubicBezier::new_unchecked(0.0, 0.0, 0.58, 1.0));
    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    pub const EASE_IN_OUT: Easing =
        Easing::CubicBezier(CubicBezier::new_unchecked(0.42, 0.0, 0.58, 1.0));

    /// A cubic Bézier easing with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// Both x coordinates must lie in `[0, 1]`.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Easing, ColorError> {
        CubicBezier::new(x1, y1, x2, y2).map(Easing::CubicBezier)
    }

    /// A linear easing whose midpoint sits at `position`. `0.5` is the same
    /// as [`Easing::Linear`].
    #[inline]
    pub fn midpoint(position: f32) -> Easing {
        Easing::Midpoint(position)
    }

    pub fn ease(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Midpoint(p) => {
                let p = *p as f64;
                if p <= 0.0 {
                    1.0
                } else if p >= 1.0 {
                    0.0
                } else if (t as f64) <= p {
                    scale_range(0.0, p, 0.0, 0.5, t as f64) as f32
                } else {
                    scale_range(p, 1.0, 0.5, 1.0, t as f64) as f32
                }
            }
            Easing::CubicBezier(curve) => curve.ease(t as f64) as f32,
            Easing::Custom(f) => f(t),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Linear, Easing::Linear) => true,
            (Easing::Midpoint(a), Easing::Midpoint(b)) => a == b,
            (Easing::CubicBezier(a), Easing::CubicBezier(b)) => a == b,
            (Easing::Custom(a), Easing::Custom(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}

/// A cubic Bézier timing curve from `(0, 0)` to `(1, 1)`.
///
/// Based on the servo implementation: Newton's method with a bisection
/// fallback solves `x(u) = t`, then the curve's `y(u)` is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    const EPSILON: f64 = 1e-7;
    const NEWTON_ITERATIONS: usize = 4;
    const BISECTION_LIMIT: usize = 64;

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(ColorError::DegenerateBezier { x1, x2 });
        }
        Ok(Self::new_unchecked(x1, y1, x2, y2))
    }

    const fn new_unchecked(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            x1,
            y1,
            x2,
            y2,
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    /// The control points `[x1, y1, x2, y2]`.
    pub fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    #[inline]
    fn sample_x(&self, u: f64) -> f64 {
        ((self.ax * u + self.bx) * u + self.cx) * u
    }

    #[inline]
    fn sample_y(&self, u: f64) -> f64 {
        ((self.ay * u + self.by) * u + self.cy) * u
    }

    #[inline]
    fn sample_dx(&self, u: f64) -> f64 {
        (3.0 * self.ax * u + 2.0 * self.bx) * u + self.cx
    }

    fn solve_u(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..=Self::NEWTON_ITERATIONS {
            let sampled = self.sample_x(u);
            if (sampled - x).abs() < Self::EPSILON {
                return u;
            }
            let dx = self.sample_dx(u);
            if dx.abs() < 1e-6 {
                break;
            }
            u -= (sampled - x) / dx;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        u = x;
        for _ in 0..Self::BISECTION_LIMIT {
            let sampled = self.sample_x(u);
            if (sampled - x).abs() < Self::EPSILON {
                break;
            }
            if x > sampled {
                lo = u;
            } else {
                hi = u;
            }
            u = (hi - lo) / 2.0 + lo;
        }
        u
    }

    /// Evaluate at `x`. Outside `[0, 1]` the curve continues along its end
    /// tangents.
    pub fn ease(&self, x: f64) -> f64 {
        if x < 0.0 {
            if self.x1 > 0.0 {
                tangent(0.0, 0.0, self.x1, self.y1, x)
            } else if self.x2 > 0.0 {
                tangent(0.0, 0.0, self.x2, self.y2, x)
            } else {
                0.0
            }
        } else if x > 1.0 {
            if self.x2 < 1.0 {
                tangent(self.x2, self.y2, 1.0, 1.0, x)
            } else if self.x1 < 1.0 {
                tangent(self.x1, self.y1, 1.0, 1.0, x)
            } else {
                1.0
            }
        } else {
            self.sample_y(self.solve_u(x))
        }
    }
}

#[inline]
fn tangent(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    (y2 - y1) / (x2 - x1) * (x - x1) + y1
}
