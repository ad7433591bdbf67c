//! Configuration for scheme generation and color analysis.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chroma_schemes::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("chroma.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), chroma_schemes::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SchemeConfig`]: default color counts for the variable-length schemes
//! - [`AnalysisConfig`]: light/dark threshold and suggested text colors

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgb;
use crate::constants::{defaults, perceived};
use crate::{ColorError, Result};

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scheme generation defaults
    #[serde(default)]
    pub schemes: SchemeConfig,

    /// Light/dark analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Default color counts used when a caller does not ask for one.
///
/// Complementary, triadic and tetradic schemes always have 2, 3 and 4
/// colors and ignore these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    pub analogous_count: usize,
    pub monochromatic_count: usize,
    pub harmonic_count: usize,
}

/// Light/dark classification parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Perceived brightness (0-255) above which a color counts as light
    pub light_threshold: f64,

    /// Text color suggested over light backgrounds
    pub dark_text: String,

    /// Text color suggested over dark backgrounds
    pub light_text: String,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            analogous_count: defaults::ANALOGOUS_COUNT,
            monochromatic_count: defaults::MONOCHROMATIC_COUNT,
            harmonic_count: defaults::HARMONIC_COUNT,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            light_threshold: perceived::LIGHT_THRESHOLD,
            dark_text: defaults::DARK_TEXT.to_string(),
            light_text: defaults::LIGHT_TEXT.to_string(),
        }
    }
}

impl SchemeConfig {
    pub fn validate(&self) -> Result<()> {
        for (parameter, count) in [
            ("analogous_count", self.analogous_count),
            ("monochromatic_count", self.monochromatic_count),
            ("harmonic_count", self.harmonic_count),
        ] {
            if count == 0 {
                return Err(ColorError::invalid_argument(parameter, count));
            }
        }
        Ok(())
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=255.0).contains(&self.light_threshold) {
            return Err(ColorError::invalid_argument(
                "light_threshold",
                self.light_threshold,
            ));
        }
        hex_to_rgb(&self.dark_text)?;
        hex_to_rgb(&self.light_text)?;
        Ok(())
    }
}

impl EngineConfig {
    /// Check every section, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        self.schemes.validate()?;
        self.analysis.validate()
    }

    /// Load and validate configuration from a JSON file
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::io(format!("reading {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ColorError::serialization(format!("parsing {}", path.display()), e))?;
        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::serialization("encoding configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::io(format!("writing {}", path.display()), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.schemes.analogous_count, 3);
        assert_eq!(config.schemes.monochromatic_count, 4);
        assert_eq!(config.schemes.harmonic_count, 3);
        assert_eq!(config.analysis.light_threshold, 127.5);
        assert_eq!(config.analysis.dark_text, "#000000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "schemes": { "harmonic_count": 5 } }"#).unwrap();
        assert_eq!(config.schemes.harmonic_count, 5);
        assert_eq!(config.schemes.monochromatic_count, 4);
        assert_eq!(config.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let mut config = EngineConfig::default();
        config.schemes.monochromatic_count = 0;
        match config.validate() {
            Err(ColorError::InvalidArgument { parameter, value }) => {
                assert_eq!(parameter, "monochromatic_count");
                assert_eq!(value, "0");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_threshold_and_text() {
        let mut config = EngineConfig::default();
        config.analysis.light_threshold = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ColorError::InvalidArgument { .. })
        ));

        let mut config = EngineConfig::default();
        config.analysis.light_text = "#FFF".to_string();
        assert!(matches!(
            config.validate(),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chroma.json");

        let mut config = EngineConfig::default();
        config.schemes.analogous_count = 5;
        config.analysis.light_threshold = 140.0;
        config.to_json_file(&path).unwrap();

        let loaded = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ColorError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = EngineConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ColorError::Serialization { .. }));
    }
}
