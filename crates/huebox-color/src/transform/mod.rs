//! Operations that produce new colors from existing ones: alpha
//! premultiplication, mixing and gradient interpolation.

mod easing;
mod hue;
mod interpolator;
mod method;
mod mix;
mod premultiply;

pub use easing::{CubicBezier, Easing};
pub use hue::HueAdjustment;
pub use interpolator::{Interpolator, InterpolatorBuilder, Stop};
pub use method::InterpolationMethod;
