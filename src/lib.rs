//! Huebox
//!
//! Samples color gradients defined in YAML and converts colors from the
//! command line. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
