use crate::error::AppError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is not given
pub const CONFIG_ENV: &str = "HUEBOX_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Gradient used when no name is given
    #[serde(default = "default_gradient")]
    pub default_gradient: Option<String>,

    /// Number of samples when `--steps` is not given
    #[serde(default = "default_steps")]
    pub default_steps: usize,

    /// Gradient definitions by name
    #[serde(default)]
    pub gradients: BTreeMap<String, GradientConfig>,
}

fn default_gradient() -> Option<String> {
    Some("sunset".to_string())
}

fn default_steps() -> usize {
    9
}

/// One named gradient
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GradientConfig {
    /// Interpolation space, any name `ColorSpace` parses
    #[serde(default = "default_space")]
    pub space: String,

    /// `linear`, `monotone-spline` or `monotone-spline-parabolic`
    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default = "default_hue_adjustment")]
    pub hue_adjustment: String,

    #[serde(default = "default_premultiply")]
    pub premultiply_alpha: bool,

    /// Easing applied to the whole gradient
    #[serde(default)]
    pub easing: Option<String>,

    pub stops: Vec<StopConfig>,
}

fn default_space() -> String {
    "oklch".to_string()
}

fn default_method() -> String {
    "linear".to_string()
}

fn default_hue_adjustment() -> String {
    "shorter".to_string()
}

fn default_premultiply() -> bool {
    true
}

/// A gradient entry: a bare hex color, a hint, or a color with options
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StopConfig {
    Color(String),
    Hint {
        hint: f32,
    },
    Detailed {
        color: String,
        #[serde(default)]
        position: Option<f32>,
        #[serde(default)]
        position2: Option<f32>,
        #[serde(default)]
        easing: Option<String>,
    },
}

impl GradientConfig {
    fn from_hex(space: &str, method: &str, hue_adjustment: &str, stops: &[&str]) -> Self {
        Self {
            space: space.to_string(),
            method: method.to_string(),
            hue_adjustment: hue_adjustment.to_string(),
            premultiply_alpha: true,
            easing: None,
            stops: stops
                .iter()
                .map(|s| StopConfig::Color(s.to_string()))
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load_from_path(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            gradients = config.gradients.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to the built-in gradients when the
    /// file is missing or invalid
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using built-in gradients");
            return Self::default();
        };
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// The config file to read: the explicit flag, else `HUEBOX_CONFIG`
    pub fn resolve_path(flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Look a gradient up by name, or the default gradient when `name` is
    /// `None`
    pub fn gradient(&self, name: Option<&str>) -> Result<(&str, &GradientConfig), AppError> {
        let name = name
            .or(self.default_gradient.as_deref())
            .ok_or_else(|| AppError::UnknownGradient("(no default)".to_string()))?;
        self.gradients
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| AppError::UnknownGradient(name.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut gradients = BTreeMap::new();
        gradients.insert(
            "sunset".to_string(),
            GradientConfig::from_hex(
                "oklch",
                "monotone-spline",
                "shorter",
                &["#2c1a4d", "#b33f62", "#f9564f", "#f3c677"],
            ),
        );
        gradients.insert(
            "rainbow".to_string(),
            GradientConfig::from_hex(
                "hsl",
                "linear",
                "increasing",
                &["#ff0000", "#00ff00", "#0000ff", "#ff0000"],
            ),
        );
        gradients.insert(
            "grayscale".to_string(),
            GradientConfig::from_hex("srgb", "linear", "shorter", &["#000000", "#ffffff"]),
        );

        Self {
            default_gradient: default_gradient(),
            default_steps: default_steps(),
            gradients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.default_gradient, Some("sunset".to_string()));
        assert_eq!(config.default_steps, 9);
        assert_eq!(
            config.gradients.keys().collect::<Vec<_>>(),
            vec!["grayscale", "rainbow", "sunset"]
        );

        let sunset = &config.gradients["sunset"];
        assert_eq!(sunset.space, "oklch");
        assert_eq!(sunset.method, "monotone-spline");
        assert_eq!(sunset.stops.len(), 4);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r##"
default_gradient: dusk
default_steps: 5
gradients:
  dusk:
    space: lab
    method: monotone-spline-parabolic
    hue_adjustment: longer
    premultiply_alpha: false
    easing: ease-in-out
    stops:
      - "#ff0000"
      - { color: "#00ff00", position: 0.4, easing: "midpoint(0.3)" }
      - { hint: 0.6 }
      - { color: "#0000ff", position: 0.7, position2: 0.9 }
      - "#ffffff"
"##;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_gradient, Some("dusk".to_string()));
        assert_eq!(config.default_steps, 5);

        let dusk = &config.gradients["dusk"];
        assert_eq!(dusk.space, "lab");
        assert_eq!(dusk.method, "monotone-spline-parabolic");
        assert_eq!(dusk.hue_adjustment, "longer");
        assert!(!dusk.premultiply_alpha);
        assert_eq!(dusk.easing, Some("ease-in-out".to_string()));
        assert_eq!(
            dusk.stops,
            vec![
                StopConfig::Color("#ff0000".to_string()),
                StopConfig::Detailed {
                    color: "#00ff00".to_string(),
                    position: Some(0.4),
                    position2: None,
                    easing: Some("midpoint(0.3)".to_string()),
                },
                StopConfig::Hint { hint: 0.6 },
                StopConfig::Detailed {
                    color: "#0000ff".to_string(),
                    position: Some(0.7),
                    position2: Some(0.9),
                    easing: None,
                },
                StopConfig::Color("#ffffff".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_minimal_yaml_uses_defaults() {
        let yaml = r##"
gradients:
  plain:
    stops: ["#000", "#fff"]
"##;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_gradient, Some("sunset".to_string()));
        assert_eq!(config.default_steps, 9);

        let plain = &config.gradients["plain"];
        assert_eq!(plain.space, "oklch");
        assert_eq!(plain.method, "linear");
        assert_eq!(plain.hue_adjustment, "shorter");
        assert!(plain.premultiply_alpha);
        assert_eq!(plain.easing, None);
    }

    #[test]
    fn test_gradient_lookup() {
        let config = AppConfig::default();

        let (name, _) = config.gradient(None).unwrap();
        assert_eq!(name, "sunset");

        let (name, gradient) = config.gradient(Some("rainbow")).unwrap();
        assert_eq!(name, "rainbow");
        assert_eq!(gradient.hue_adjustment, "increasing");

        let err = config.gradient(Some("dusk")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown gradient: dusk");
    }

    #[test]
    fn test_gradient_lookup_without_default() {
        let mut config = AppConfig::default();
        config.default_gradient = None;
        assert!(matches!(
            config.gradient(None),
            Err(AppError::UnknownGradient(_))
        ));
    }

    #[test]
    fn test_resolve_path_prefers_flag() {
        let flag = PathBuf::from("/tmp/explicit.yaml");
        assert_eq!(AppConfig::resolve_path(Some(flag.clone())), Some(flag));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None);
        assert_eq!(config.gradients.len(), 3);
    }
}
