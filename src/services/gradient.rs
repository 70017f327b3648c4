use crate::error::AppError;
use crate::models::{AppConfig, GradientConfig, StopConfig};
use crate::services::parse::{parse_color, parse_easing, parse_method};
use huebox_color::transform::{Interpolator, InterpolatorBuilder, Stop};
use huebox_color::{Color, ColorSpace};
use std::sync::Arc;

/// Builds and samples the gradients defined in the configuration
pub struct GradientService {
    config: Arc<AppConfig>,
}

impl GradientService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the named gradient, or the default one when `name` is `None`
    pub fn interpolator(&self, name: Option<&str>) -> Result<Interpolator, AppError> {
        let (name, gradient) = self.config.gradient(name)?;
        let interpolator = build_interpolator(gradient)?;
        tracing::debug!(gradient = name, stops = gradient.stops.len(), "Built gradient");
        Ok(interpolator)
    }

    /// `steps` evenly spaced samples of a gradient. Uses the configured
    /// default when `steps` is `None`.
    pub fn sample(&self, name: Option<&str>, steps: Option<usize>) -> Result<Vec<Color>, AppError> {
        let steps = steps.unwrap_or(self.config.default_steps);
        let interpolator = self.interpolator(name)?;
        let colors = interpolator.sequence(steps)?.collect();
        Ok(colors)
    }
}

/// Turn a gradient definition into an interpolator
pub fn build_interpolator(gradient: &GradientConfig) -> Result<Interpolator, AppError> {
    let space: ColorSpace = gradient.space.parse()?;
    let mut builder = space
        .interpolator()
        .premultiply_alpha(gradient.premultiply_alpha)
        .hue_adjustment(gradient.hue_adjustment.parse()?)
        .method(parse_method(&gradient.method)?);
    if let Some(easing) = &gradient.easing {
        builder = builder.easing(parse_easing(easing)?);
    }
    for stop in &gradient.stops {
        builder = add_stop(builder, stop)?;
    }
    Ok(builder.build()?)
}

fn add_stop(builder: InterpolatorBuilder, stop: &StopConfig) -> Result<InterpolatorBuilder, AppError> {
    let builder = match stop {
        StopConfig::Color(hex) => builder.stop(parse_color(hex)?),
        StopConfig::Hint { hint } => builder.hint(*hint),
        StopConfig::Detailed {
            color,
            position,
            position2,
            easing,
        } => {
            let mut stop = Stop::new(parse_color(color)?);
            stop = match (position, position2) {
                (Some(start), Some(end)) => stop.span(*start, *end),
                (Some(at), None) | (None, Some(at)) => stop.at(*at),
                (None, None) => stop,
            };
            if let Some(easing) = easing {
                stop = stop.easing(parse_easing(easing)?);
            }
            builder.stop_with(stop)
        }
    };
    Ok(builder)
}
