use huebox_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Unknown gradient: {0}")]
    UnknownGradient(String),

    #[error("Invalid easing: {0}")]
    InvalidEasing(String),

    #[error("Invalid interpolation method: {0}")]
    InvalidMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_unknown_gradient() {
        let error = AppError::UnknownGradient("dusk".to_string());
        assert_eq!(error.to_string(), "Unknown gradient: dusk");
    }

    #[test]
    fn test_app_error_invalid_easing() {
        let error = AppError::InvalidEasing("bounce".to_string());
        assert_eq!(error.to_string(), "Invalid easing: bounce");
    }

    #[test]
    fn test_app_error_invalid_method() {
        let error = AppError::InvalidMethod("cubic".to_string());
        assert_eq!(error.to_string(), "Invalid interpolation method: cubic");
    }

    #[test]
    fn test_app_error_from_color_error() {
        let app_error: AppError = ColorError::InvalidMixWeights.into();
        match app_error {
            AppError::Color(ColorError::InvalidMixWeights) => {}
            _ => panic!("Expected Color variant"),
        }
        assert_eq!(
            AppError::Color(ColorError::InvalidSequenceLength(1)).to_string(),
            "Color error: Sequence length must be at least 2, got 1"
        );
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let error: AppError = io.into();
        assert_eq!(error.to_string(), "IO error: missing.yaml");
    }

    #[test]
    fn test_app_error_from_yaml_error() {
        let yaml = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let error: AppError = yaml.into();
        assert!(error.to_string().starts_with("Config parse error: "));
    }
}
