#![allow(clippy::excessive_precision)]

//! huebox-color: color space conversion and gradient interpolation
//!
//! This library converts colors between RGB working spaces, CIE and
//! perceptual models, and builds multi-stop gradients in any of them.
//!
//! # Quick Start
//!
//! Every model is a small struct that converts into the [`Color`] enum:
//!
//! ```
//! use huebox_color::{Color, ColorSpace, Rgb};
//!
//! let orange = Color::from(Rgb::from_u8(0xff, 0x80, 0x00));
//! let lab = ColorSpace::LAB_D65.convert(&orange);
//! assert_eq!(lab.space(), ColorSpace::LAB_D65);
//!
//! let back = lab.to_srgb();
//! assert_eq!(back.to_hex(), "#ff8000");
//! ```
//!
//! # Gradients
//!
//! An [`InterpolatorBuilder`](transform::InterpolatorBuilder) collects stops
//! and options, then bakes them into a reusable
//! [`Interpolator`](transform::Interpolator):
//!
//! ```
//! use huebox_color::transform::{HueAdjustment, InterpolationMethod};
//! use huebox_color::{ColorSpace, Oklch, Rgb};
//!
//! let gradient = ColorSpace::Oklch
//!     .interpolator()
//!     .hue_adjustment(HueAdjustment::Longer)
//!     .method(InterpolationMethod::MONOTONE_SPLINE)
//!     .stop(Rgb::new(1.0, 0.0, 0.0))
//!     .stop(Oklch::new(0.8, 0.1, 200.0))
//!     .stop(Rgb::new(0.0, 0.0, 1.0))
//!     .build()
//!     .unwrap();
//!
//! let swatches: Vec<String> = gradient
//!     .sequence(5)
//!     .unwrap()
//!     .map(|c| c.to_srgb().to_hex())
//!     .collect();
//! assert_eq!(swatches.len(), 5);
//! assert_eq!(swatches[0], "#ff0000");
//! ```
//!
//! # Color Spaces
//!
//! [`ColorSpace`] names every supported space:
//!
//! - RGB working spaces ([`rgb::spaces`]): sRGB, Display P3, Adobe RGB,
//!   Rec. 2020, ProPhoto and more, each with its own primaries, white point
//!   and transfer functions
//! - sRGB derivatives: HSL, HSV, HWB, CMYK, ANSI 16 and 256
//! - CIE: XYZ, Lab, LCHab, Luv, LCHuv, each relative to a white point
//! - perceptual: Oklab, Oklch, JzAzBz, JzCzHz, ICtCp
//!
//! Conversions between white points use the CAT02 transform ([`adapt`]).
//!
//! # Conventions
//!
//! - Components are `f32`. Intermediate math runs in `f64`.
//! - A `NaN` hue means the color is achromatic. Interpolation takes the other
//!   endpoint's hue.
//! - A `NaN` alpha is treated as opaque.
//! - Converting a color into its own space returns it unchanged.

pub mod adapt;
pub mod calculate;
pub mod error;
pub mod math;
pub mod model;
pub mod rgb;
pub mod space;
pub mod transform;
pub mod white_point;


pub use error::ColorError;
pub use math::Matrix;
pub use model::{
    Ansi16, Ansi256, Cmyk, Color, Hsl, Hsv, Hwb, ICtCp, JzAzBz, JzCzHz, Lab, LchAb, LchUv, Luv,
    Oklab, Oklch, Rgb, Xyz,
};
pub use rgb::RgbColorSpace;
pub use space::{ColorSpace, ComponentInfo};
pub use white_point::{illuminant, Chromaticity, WhitePoint};
