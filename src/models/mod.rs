pub mod config;

pub use config::{AppConfig, GradientConfig, StopConfig, CONFIG_ENV};
