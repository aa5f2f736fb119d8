//! Configuration for a drawing session.
//!
//! Loaded from YAML; every field is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{Color, DEFAULT_SIMILARITY_THRESHOLD};
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Session settings: canvas size, color choices, marker and picking radii,
/// and the initial hull input points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Euclidean RGB radius used when matching near-black border pixels.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Point marker diameter in pixels.
    #[serde(default = "default_marker_thickness")]
    pub marker_thickness: u32,

    /// How far from a recorded point a pick may land and still select it.
    #[serde(default = "default_pick_radius")]
    pub pick_radius: u32,

    /// Color for line segments.
    #[serde(default = "default_line_color")]
    pub line_color: Color,

    /// Color for point markers.
    #[serde(default = "default_point_color")]
    pub point_color: Color,

    /// Color for the hull outline.
    #[serde(default = "default_hull_color")]
    pub hull_color: Color,

    /// Hull input points.
    #[serde(default)]
    pub points: Vec<Point>,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    650
}
fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}
fn default_marker_thickness() -> u32 {
    1
}
fn default_pick_radius() -> u32 {
    25
}
fn default_line_color() -> Color {
    Color::BLACK
}
fn default_point_color() -> Color {
    Color::BLUE
}
fn default_hull_color() -> Color {
    Color::RED
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            similarity_threshold: default_similarity_threshold(),
            marker_thickness: default_marker_thickness(),
            pick_radius: default_pick_radius(),
            line_color: default_line_color(),
            point_color: default_point_color(),
            hull_color: default_hull_color(),
            points: Vec::new(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes the configuration back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid("width", "must be greater than zero"));
        }
        if self.height == 0 {
            return Err(invalid("height", "must be greater than zero"));
        }
        if !self.similarity_threshold.is_finite() || self.similarity_threshold < 0.0 {
            return Err(invalid(
                "similarity_threshold",
                "must be a finite, non-negative number",
            ));
        }
        if self.marker_thickness == 0 {
            return Err(invalid("marker_thickness", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = RasterConfig::new();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 650);
        assert_eq!(config.similarity_threshold, 50.0);
        assert_eq!(config.marker_thickness, 1);
        assert_eq!(config.pick_radius, 25);
        assert_eq!(config.hull_color, Color::RED);
        assert!(config.points.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = RasterConfig::parse("width: 320").unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 650);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
width: 640
height: 480
similarity_threshold: 30.5
marker_thickness: 6
pick_radius: 10
line_color: { blue: 0, green: 128, red: 0 }
point_color: { blue: 255, green: 0, red: 0, alpha: 200 }
points:
  - { x: 10, y: 20 }
  - { x: 300, y: 40 }
"#;

        let config = RasterConfig::parse(yaml).unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.similarity_threshold, 30.5);
        assert_eq!(config.marker_thickness, 6);
        assert_eq!(config.pick_radius, 10);
        assert_eq!(config.line_color, Color::bgr(0.0, 128.0, 0.0));
        assert_eq!(config.point_color.alpha, 200.0);
        assert_eq!(config.points, vec![Point::new(10, 20), Point::new(300, 40)]);
        assert_eq!(config.hull_color, Color::RED);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
width: 640
height: 480
marker_thickness: not_a_number
"#;

        let result = RasterConfig::parse(yaml);
        assert!(result.is_err());

        let err = result.unwrap_err();
        let display = err.to_string();
        assert!(display.contains("4"), "Error should include line number");
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let mut config = RasterConfig::new();
        config.points = vec![Point::new(1, 2), Point::new(3, 4)];
        let yaml = config.to_yaml().unwrap();
        assert_eq!(RasterConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_config_validate() {
        let cases = [
            ("width: 0", "width"),
            ("height: 0", "height"),
            ("similarity_threshold: -1.0", "similarity_threshold"),
            ("similarity_threshold: .nan", "similarity_threshold"),
            ("marker_thickness: 0", "marker_thickness"),
        ];
        for (yaml, expected) in cases {
            let config = RasterConfig::parse(yaml).unwrap();
            match config.validate() {
                Err(Error::ConfigInvalid { key, .. }) => assert_eq!(key, expected),
                other => panic!("{yaml}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_config_load_missing() {
        let result = RasterConfig::load("/nonexistent/path/raster.yaml");
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = RasterConfig::load_or_default("/nonexistent/path/raster.yaml");
        assert_eq!(config, RasterConfig::default());
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height: 100\npick_radius: 5").unwrap();

        let config = RasterConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 100);
        assert_eq!(config.pick_radius, 5);
        assert_eq!(config.width, 800);
    }
}
