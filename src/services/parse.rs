//! Text forms of the gradient options used in config files and on the
//! command line.

use crate::error::AppError;
use huebox_color::transform::{Easing, InterpolationMethod};
use huebox_color::{Color, Rgb};

/// Parse a hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
pub fn parse_color(s: &str) -> Result<Color, AppError> {
    Ok(s.parse::<Rgb>()?.into())
}

/// Parse an easing name: `linear`, `ease`, `ease-in`, `ease-out`,
/// `ease-in-out`, `midpoint(p)` or `cubic-bezier(x1, y1, x2, y2)`.
pub fn parse_easing(s: &str) -> Result<Easing, AppError> {
    let invalid = || AppError::InvalidEasing(s.to_string());
    let text = s.trim().to_ascii_lowercase();

    match text.as_str() {
        "linear" => return Ok(Easing::Linear),
        "ease" => return Ok(Easing::EASE),
        "ease-in" => return Ok(Easing::EASE_IN),
        "ease-out" => return Ok(Easing::EASE_OUT),
        "ease-in-out" => return Ok(Easing::EASE_IN_OUT),
        _ => {}
    }

    let (function, args) = text
        .strip_suffix(')')
        .and_then(|t| t.split_once('('))
        .ok_or_else(invalid)?;
    let args: Vec<f64> = args
        .split(',')
        .map(|a| a.trim().parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;

    match (function.trim(), args.as_slice()) {
        ("midpoint", &[p]) => Ok(Easing::midpoint(p as f32)),
        ("cubic-bezier", &[x1, y1, x2, y2]) => Ok(Easing::cubic_bezier(x1, y1, x2, y2)?),
        _ => Err(invalid()),
    }
}

/// Parse an interpolation method name.
pub fn parse_method(s: &str) -> Result<InterpolationMethod, AppError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "linear" => Ok(InterpolationMethod::Linear),
        "monotone-spline" => Ok(InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: false,
        }),
        "monotone-spline-parabolic" => Ok(InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: true,
        }),
        _ => Err(AppError::InvalidMethod(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebox_color::ColorError;

    #[test]
    fn test_parse_color() {
        let red = parse_color("#f00").unwrap();
        assert_eq!(red.to_srgb().to_u8(), [255, 0, 0]);

        let err = parse_color("#ggg").unwrap_err();
        assert!(matches!(err, AppError::Color(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_easing_presets() {
        assert_eq!(parse_easing("linear").unwrap(), Easing::Linear);
        assert_eq!(parse_easing("ease").unwrap(), Easing::EASE);
        assert_eq!(parse_easing("Ease-In").unwrap(), Easing::EASE_IN);
        assert_eq!(parse_easing("ease-out").unwrap(), Easing::EASE_OUT);
        assert_eq!(parse_easing(" ease-in-out ").unwrap(), Easing::EASE_IN_OUT);
    }

    #[test]
    fn test_parse_easing_functions() {
        assert_eq!(parse_easing("midpoint(0.3)").unwrap(), Easing::midpoint(0.3));
        assert_eq!(
            parse_easing("cubic-bezier(0.42, 0, 0.58, 1)").unwrap(),
            Easing::EASE_IN_OUT
        );
    }

    #[test]
    fn test_parse_easing_rejects_bad_input() {
        for text in ["bounce", "midpoint()", "midpoint(0.1, 0.2)", "cubic-bezier(1,2)", "midpoint(0.3"] {
            assert!(
                matches!(parse_easing(text), Err(AppError::InvalidEasing(_))),
                "{text} should be rejected"
            );
        }
        assert!(matches!(
            parse_easing("cubic-bezier(1.5, 0, 0.5, 1)"),
            Err(AppError::Color(ColorError::DegenerateBezier { .. }))
        ));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("linear").unwrap(), InterpolationMethod::Linear);
        assert_eq!(
            parse_method("monotone-spline").unwrap(),
            InterpolationMethod::MONOTONE_SPLINE
        );
        assert_eq!(
            parse_method("monotone-spline-parabolic").unwrap(),
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints: true
            }
        );
        assert_eq!(
            parse_method("cubic").unwrap_err().to_string(),
            "Invalid interpolation method: cubic"
        );
    }
}
