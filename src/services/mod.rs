pub mod gradient;
pub mod parse;

pub use gradient::{build_interpolator, GradientService};
pub use parse::{parse_color, parse_easing, parse_method};
