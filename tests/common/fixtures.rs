//! Test fixtures and constants.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Config with one gradient of every stop shape
pub const FULL_CONFIG: &str = r##"
default_gradient: dusk
default_steps: 5
gradients:
  dusk:
    space: oklch
    method: monotone-spline
    hue_adjustment: shorter
    premultiply_alpha: true
    easing: ease-in-out
    stops:
      - "#ff0000"
      - { color: "#00ff00", position: 0.4, easing: "midpoint(0.3)" }
      - { hint: 0.6 }
      - { color: "#0000ff", position: 0.7, position2: 0.9 }
      - "#ffffff"
  fade:
    space: srgb
    stops:
      - "#000000"
      - "#888888"
  wheel:
    space: hsl
    hue_adjustment: increasing
    stops: ["#ff0000", "#00ff00", "#0000ff", "#ff0000"]
"##;

/// Config that loads but defines a gradient the library rejects
pub const BROKEN_GRADIENT_CONFIG: &str = r##"
default_gradient: lonely
gradients:
  lonely:
    stops: ["#ff0000"]
"##;

/// A YAML config written to a temporary file
pub struct ConfigFile {
    file: NamedTempFile,
}

impl ConfigFile {
    pub fn new(content: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp config");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp config");
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
