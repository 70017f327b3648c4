//! Text output for sampled colors.

use huebox_color::Color;
use serde::Serialize;

/// How sampled colors are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `#rrggbb` per line
    #[default]
    Hex,
    /// A 24-bit terminal color block followed by the hex code
    Ansi,
    /// A JSON array
    Json,
}

/// One sampled color with its sRGB encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub hex: String,
    pub rgb: [u8; 3],
    pub alpha: f32,
    /// Components in the gradient's own space
    pub components: Vec<f32>,
}

impl Swatch {
    pub fn new(color: &Color) -> Self {
        let srgb = color.to_srgb();
        Self {
            hex: srgb.to_hex(),
            rgb: srgb.to_u8(),
            alpha: srgb.alpha_u8() as f32 / 255.0,
            components: color.to_array(),
        }
    }
}

/// Render sampled colors in the requested format
pub fn render(colors: &[Color], format: OutputFormat) -> Result<String, serde_json::Error> {
    let swatches: Vec<Swatch> = colors.iter().map(Swatch::new).collect();
    let out = match format {
        OutputFormat::Hex => swatches
            .iter()
            .map(|s| s.hex.clone())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Ansi => swatches
            .iter()
            .map(|s| {
                let [r, g, b] = s.rgb;
                format!("\x1b[48;2;{r};{g};{b}m      \x1b[0m {}", s.hex)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&swatches)?,
    };
    Ok(out)
}

/// Component names and values of a color, one per line
pub fn describe(color: &Color) -> String {
    let space = color.space();
    let mut lines = vec![format!("{space}")];
    for (info, value) in space.components().iter().zip(color.to_array()) {
        if value.is_nan() {
            lines.push(format!("  {:<5} = none", info.name));
        } else {
            lines.push(format!("  {:<5} = {value:.4}", info.name));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebox_color::{Hsl, Rgb};
    use pretty_assertions::assert_eq;

    fn colors() -> Vec<Color> {
        vec![
            Rgb::from_u8(255, 0, 0).into(),
            Rgb::from_u8(0, 0x80, 0xff).with_alpha(0.5).into(),
        ]
    }

    #[test]
    fn test_render_hex() {
        let out = render(&colors(), OutputFormat::Hex).unwrap();
        assert_eq!(out, "#ff0000\n#0080ff80");
    }

    #[test]
    fn test_render_ansi() {
        let out = render(&colors()[..1], OutputFormat::Ansi).unwrap();
        assert_eq!(out, "\x1b[48;2;255;0;0m      \x1b[0m #ff0000");
    }

    #[test]
    fn test_render_json() {
        let out = render(&colors()[..1], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["hex"], "#ff0000");
        assert_eq!(parsed[0]["rgb"], serde_json::json!([255, 0, 0]));
        assert_eq!(parsed[0]["alpha"], 1.0);
        assert_eq!(parsed[0]["components"], serde_json::json!([1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_describe() {
        let out = describe(&Hsl::new(120.0, 0.5, 0.25).into());
        assert_eq!(
            out,
            "HSL\n  h     = 120.0000\n  s     = 0.5000\n  l     = 0.2500\n  alpha = 1.0000"
        );
    }

    #[test]
    fn test_describe_missing_hue() {
        let out = describe(&Hsl::new(f32::NAN, 0.0, 1.0).into());
        assert!(out.contains("  h     = none"));
    }
}
