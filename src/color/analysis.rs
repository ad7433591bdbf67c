//! Luminance and contrast analysis
//!
//! Two distinct brightness measures are used on purpose:
//! - WCAG relative luminance (gamma-expanded, 0.2126/0.7152/0.0722 weights)
//!   feeds the contrast ratio
//! - Perceived brightness (BT.601 luma on raw 0-255 channels) drives the
//!   light/dark classification and the suggested text color

use crate::color::conversion::{hex_to_rgb, Rgb};
use crate::config::AnalysisConfig;
use crate::constants::{perceived, wcag};
use crate::Result;

/// Expand one normalized sRGB channel to linear light
fn linearize(channel: f64) -> f64 {
    if channel <= wcag::LINEAR_THRESHOLD {
        channel / wcag::LINEAR_DIVISOR
    } else {
        ((channel + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

/// WCAG relative luminance in [0.0, 1.0]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let srgb = rgb.normalized();
    let [wr, wg, wb] = wcag::LUMINANCE_WEIGHTS;
    wr * linearize(srgb.red) + wg * linearize(srgb.green) + wb * linearize(srgb.blue)
}

/// Contrast ratio between two already-parsed colors, in [1.0, 21.0]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::CONTRAST_OFFSET) / (darker + wcag::CONTRAST_OFFSET)
}

/// WCAG contrast ratio between two hex colors
///
/// Symmetric in its arguments; identical colors give exactly 1.0.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if either color is malformed
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(hex_to_rgb(hex_a)?, hex_to_rgb(hex_b)?))
}

/// Perceived brightness on the 0-255 scale
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    let [wr, wg, wb] = perceived::LUMA_WEIGHTS;
    let [r, g, b] = rgb.channels();
    wr * r + wg * g + wb * b
}

/// Whether a color reads as light (brightness strictly above 127.5)
pub fn is_light(hex: &str) -> Result<bool> {
    ColorAnalyzer::default().is_light(hex)
}

/// Black text for light backgrounds, white text for dark ones
pub fn suggested_text_color(background_hex: &str) -> Result<String> {
    ColorAnalyzer::default().suggested_text_color(background_hex)
}

/// Light/dark classifier with configurable threshold and text colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalyzer {
    light_threshold: f64,
    dark_text: Rgb,
    light_text: Rgb,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAnalyzer {
    /// Create an analyzer with the 127.5 midpoint and black/white text
    pub fn new() -> Self {
        Self {
            light_threshold: perceived::LIGHT_THRESHOLD,
            dark_text: Rgb::BLACK,
            light_text: Rgb::WHITE,
        }
    }

    /// Create an analyzer from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` if a text color is malformed or
    /// `ColorError::InvalidArgument` if the threshold is out of range
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            light_threshold: config.light_threshold,
            dark_text: hex_to_rgb(&config.dark_text)?,
            light_text: hex_to_rgb(&config.light_text)?,
        })
    }

    pub fn light_threshold(&self) -> f64 {
        self.light_threshold
    }

    pub fn is_light_rgb(&self, rgb: Rgb) -> bool {
        perceived_brightness(rgb) > self.light_threshold
    }

    /// Classify a hex color as light or dark
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidFormat` if the color is malformed
    pub fn is_light(&self, hex: &str) -> Result<bool> {
        Ok(self.is_light_rgb(hex_to_rgb(hex)?))
    }

    pub fn text_color_for(&self, background: Rgb) -> Rgb {
        if self.is_light_rgb(background) {
            self.dark_text
        } else {
            self.light_text
        }
    }

    /// Suggest a readable text color for the given background
    pub fn suggested_text_color(&self, background_hex: &str) -> Result<String> {
        let background = hex_to_rgb(background_hex)?;
        let text = self.text_color_for(background);
        log::debug!("text color for {background}: {text}");
        Ok(text.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;

    #[test]
    fn test_relative_luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_luminance_linear_segment() {
        // 10/255 = 0.0392 falls inside the linear segment
        let dark = relative_luminance(Rgb::new(10, 10, 10));
        assert!((dark - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_relative_luminance_weights_green_highest() {
        let r = relative_luminance(Rgb::new(255, 0, 0));
        let g = relative_luminance(Rgb::new(0, 255, 0));
        let b = relative_luminance(Rgb::new(0, 0, 255));
        assert!((r - 0.2126).abs() < 1e-9);
        assert!((g - 0.7152).abs() < 1e-9);
        assert!((b - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio("#000000", "#FFFFFF").unwrap();
        assert!((ratio - 21.0).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_symmetric_and_identity() {
        let pairs = [("#3498DB", "#E74C3C"), ("#FFFFFF", "#777777"), ("#123456", "#FEDCBA")];
        for (a, b) in pairs {
            let ab = contrast_ratio(a, b).unwrap();
            let ba = contrast_ratio(b, a).unwrap();
            assert_eq!(ab, ba);
            assert!((1.0..=21.0).contains(&ab));
        }
        assert_eq!(contrast_ratio("#3498DB", "3498db").unwrap(), 1.0);
    }

    #[test]
    fn test_contrast_invalid_input() {
        assert!(matches!(
            contrast_ratio("#000000", "#GG0000"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_is_light() {
        assert!(is_light("#FFFFFF").unwrap());
        assert!(!is_light("#000000").unwrap());
        // yellow is bright despite strong saturation
        assert!(is_light("#FFFF00").unwrap());
        assert!(!is_light("#0000FF").unwrap());
    }

    #[test]
    fn test_is_light_threshold_is_strict() {
        let blue = Rgb::new(0, 0, 255);
        let analyzer = ColorAnalyzer {
            light_threshold: perceived_brightness(blue),
            ..ColorAnalyzer::new()
        };
        assert!(!analyzer.is_light_rgb(blue));
        assert!(analyzer.is_light_rgb(Rgb::new(0, 1, 255)));
    }

    #[test]
    fn test_suggested_text_color() {
        assert_eq!(suggested_text_color("#FFFFFF").unwrap(), "#000000");
        assert_eq!(suggested_text_color("#000000").unwrap(), "#FFFFFF");
        assert_eq!(suggested_text_color("#2C3E50").unwrap(), "#FFFFFF");
    }

    #[test]
    fn test_analyzer_from_config() {
        let config = AnalysisConfig {
            light_threshold: 200.0,
            dark_text: "#111111".to_string(),
            light_text: "#eeeeee".to_string(),
        };
        let analyzer = ColorAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.light_threshold(), 200.0);
        // mid gray is dark under a high threshold
        assert_eq!(analyzer.suggested_text_color("#999999").unwrap(), "#EEEEEE");
        assert_eq!(analyzer.suggested_text_color("#FAFAFA").unwrap(), "#111111");
    }

    #[test]
    fn test_analyzer_from_invalid_config() {
        let config = AnalysisConfig {
            dark_text: "black".to_string(),
            ..AnalysisConfig::default()
        };
        assert!(ColorAnalyzer::from_config(&config).is_err());
    }
}
