//! End-to-end gradient tests: config file to rendered output.

mod common;

use common::{assert_hexes, assert_in_srgb_gamut, fixtures, hexes, ConfigFile};
use huebox::error::AppError;
use huebox::models::AppConfig;
use huebox::rendering::{render, OutputFormat};
use huebox::services::GradientService;
use huebox_color::{ColorError, ColorSpace};
use std::sync::Arc;

fn service(content: &str) -> GradientService {
    let file = ConfigFile::new(content);
    let config = AppConfig::load_from_path(file.path()).unwrap();
    GradientService::new(Arc::new(config))
}

#[test]
fn test_default_gradient_uses_configured_steps() {
    let service = service(fixtures::FULL_CONFIG);
    let colors = service.sample(None, None).unwrap();
    assert_eq!(colors.len(), 5);
    assert!(colors.iter().all(|c| c.space() == ColorSpace::Oklch));

    // Endpoints are the first and last stop
    let hex = hexes(&colors);
    assert_eq!(hex[0], "#ff0000");
    assert_eq!(hex[4], "#ffffff");
}

#[test]
fn test_srgb_fade() {
    let service = service(fixtures::FULL_CONFIG);
    let colors = service.sample(Some("fade"), Some(3)).unwrap();
    assert_hexes(&colors, &["#000000", "#444444", "#888888"]);
}

#[test]
fn test_hue_wheel_goes_all_the_way_round() {
    let service = service(fixtures::FULL_CONFIG);
    let colors = service.sample(Some("wheel"), Some(7)).unwrap();
    assert_in_srgb_gamut(&colors);
    assert_hexes(
        &colors,
        &["#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff", "#ff0000"],
    );
}

#[test]
fn test_span_holds_its_color() {
    let service = service(fixtures::FULL_CONFIG);
    let interpolator = service.interpolator(Some("dusk")).unwrap();
    let positions = interpolator.positions();
    assert_eq!(positions.first(), Some(&0.0));
    assert_eq!(positions.last(), Some(&1.0));
    assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    // red, green, hint, blue (twice for its span), white
    assert_eq!(positions.len(), 6);
}

#[test]
fn test_rejected_gradient_surfaces_library_error() {
    let service = service(fixtures::BROKEN_GRADIENT_CONFIG);
    let err = service.sample(None, None).unwrap_err();
    assert!(
        matches!(err, AppError::Color(ColorError::InvalidStopConfiguration(_))),
        "got {err:?}"
    );
}

#[test]
fn test_render_formats() {
    let service = service(fixtures::FULL_CONFIG);
    let colors = service.sample(Some("fade"), Some(2)).unwrap();

    assert_eq!(render(&colors, OutputFormat::Hex).unwrap(), "#000000\n#888888");

    let ansi = render(&colors, OutputFormat::Ansi).unwrap();
    assert_eq!(ansi.lines().count(), 2);
    assert!(ansi.lines().nth(1).unwrap().ends_with("#888888"));

    let json: serde_json::Value =
        serde_json::from_str(&render(&colors, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[1]["hex"], "#888888");
}
