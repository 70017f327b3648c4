pub mod swatch;

pub use swatch::{describe, render, OutputFormat, Swatch};
