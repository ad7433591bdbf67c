//! # Chroma Schemes
//!
//! Color scheme generation and contrast analysis for the ChromaBags
//! bag catalog.
//!
//! This library provides:
//! - Lossless hex <-> RGB conversion and RGB <-> HSV/HLS conversion
//! - Six scheme generators working on the hue circle
//! - WCAG relative luminance and contrast ratio
//! - Light/dark classification with a suggested text color
//!
//! Every operation is a pure function of its inputs and safe to call
//! from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use chroma_schemes::{contrast_ratio, generate_scheme, suggested_text_color};
//!
//! let colors = generate_scheme("triadic", "#3498DB", None)?;
//! assert_eq!(colors.len(), 3);
//! assert_eq!(colors[0], "#3498DB");
//!
//! let ratio = contrast_ratio("#000000", "#FFFFFF")?;
//! assert!((ratio - 21.0).abs() < 1e-6);
//! assert_eq!(suggested_text_color("#2C3E50")?, "#FFFFFF");
//! # Ok::<(), chroma_schemes::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod scheme;

pub use error::{ColorError, Result};
pub use config::{AnalysisConfig, EngineConfig, SchemeConfig};
pub use color::{
    contrast_ratio, hex_to_rgb, hls_to_rgb, hsv_to_rgb, is_light, normalize_hex,
    relative_luminance, rgb_to_hex, rgb_to_hls, rgb_to_hsv, suggested_text_color, ColorAnalyzer,
    Hls, Hsv, Rgb,
};
pub use scheme::{
    generate_analogous, generate_complementary, generate_harmonic, generate_monochromatic,
    generate_scheme, generate_tetradic, generate_triadic, SavedScheme, SchemeFilter,
    SchemeGenerator, SchemeId, SchemeKind, SchemeLibrary, SchemeUpdate,
};

/// A generated scheme together with the request that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeResult {
    /// Scheme rule used
    pub kind: SchemeKind,
    /// Base color in canonical `#RRGGBB` form
    pub base: String,
    /// Generated colors, in scheme order
    pub colors: Vec<String>,
}

impl SchemeResult {
    /// Pair every color with a readable text color for it
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` if a stored color is malformed,
    /// which can only happen for results built by hand
    pub fn text_colors(&self, analyzer: &ColorAnalyzer) -> Result<Vec<(String, String)>> {
        self.colors
            .iter()
            .map(|color| {
                let text = analyzer.suggested_text_color(color)?;
                Ok((color.clone(), text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_result_serialization() {
        let result = SchemeResult {
            kind: SchemeKind::Complementary,
            base: "#3498DB".to_string(),
            colors: vec!["#3498DB".to_string(), "#DB7734".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"COMPLEMENTARY\""));
        let deserialized: SchemeResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_text_colors() {
        let result = SchemeResult {
            kind: SchemeKind::Monochromatic,
            base: "#3498DB".to_string(),
            colors: vec!["#0F3A56".to_string(), "#D3E9F7".to_string()],
        };
        let pairs = result.text_colors(&ColorAnalyzer::default()).unwrap();
        assert_eq!(pairs[0], ("#0F3A56".to_string(), "#FFFFFF".to_string()));
        assert_eq!(pairs[1], ("#D3E9F7".to_string(), "#000000".to_string()));
    }

    #[test]
    fn test_text_colors_rejects_bad_color() {
        let result = SchemeResult {
            kind: SchemeKind::Triadic,
            base: "#3498DB".to_string(),
            colors: vec!["oops".to_string()],
        };
        assert!(result.text_colors(&ColorAnalyzer::default()).is_err());
    }
}
