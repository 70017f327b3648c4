//! Error type shared by every fallible operation in the crate.
//!
//! All variants describe rejected input. They are raised at construction or
//! build time, never lazily while sampling a built interpolator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("Invalid component array length: {len}, expected {} or {expected}", .expected - 1)]
    InvalidComponentCount { len: usize, expected: usize },

    #[error("Invalid stop configuration: {0}")]
    InvalidStopConfiguration(&'static str),

    #[error("mix amounts cannot sum to 0")]
    InvalidMixWeights,

    #[error("Bezier x coordinates must be in the range [0, 1], got x1={x1} x2={x2}")]
    DegenerateBezier { x1: f64, x2: f64 },

    #[error("Sequence length must be at least 2, got {0}")]
    InvalidSequenceLength(usize),

    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    #[error("Unknown hue adjustment: {0}")]
    UnknownHueAdjustment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_component_count_display() {
        let err = ColorError::InvalidComponentCount {
            len: 2,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid component array length: 2, expected 3 or 4"
        );
    }

    #[test]
    fn test_invalid_stop_configuration_display() {
        let err = ColorError::InvalidStopConfiguration("at least two stops are required");
        assert_eq!(
            err.to_string(),
            "Invalid stop configuration: at least two stops are required"
        );
    }

    #[test]
    fn test_invalid_mix_weights_display() {
        assert_eq!(
            ColorError::InvalidMixWeights.to_string(),
            "mix amounts cannot sum to 0"
        );
    }

    #[test]
    fn test_degenerate_bezier_display() {
        let err = ColorError::DegenerateBezier { x1: 1.5, x2: 0.5 };
        assert_eq!(
            err.to_string(),
            "Bezier x coordinates must be in the range [0, 1], got x1=1.5 x2=0.5"
        );
    }

    #[test]
    fn test_invalid_sequence_length_display() {
        assert_eq!(
            ColorError::InvalidSequenceLength(1).to_string(),
            "Sequence length must be at least 2, got 1"
        );
    }

    #[test]
    fn test_invalid_hex_display() {
        assert_eq!(
            ColorError::InvalidHex("#12".into()).to_string(),
            "Invalid hex color: \"#12\""
        );
    }

    #[test]
    fn test_unknown_name_display() {
        assert_eq!(
            ColorError::UnknownColorSpace("foo".into()).to_string(),
            "Unknown color space: foo"
        );
        assert_eq!(
            ColorError::UnknownHueAdjustment("sideways".into()).to_string(),
            "Unknown hue adjustment: sideways"
        );
    }
}
