//! Measurements on colors: contrast, gamut membership and color difference.

mod contrast;
mod difference;
mod gamut;

pub use contrast::{
    first_with_contrast, first_with_contrast_or_none, most_contrasting, wcag_contrast_ratio,
    wcag_luminance,
};
pub use difference::{
    difference_cie2000, difference_cie76, difference_cie94, difference_cmc, difference_ez,
    euclidean_distance,
};
pub use gamut::is_in_srgb_gamut;
