//! Color representation, conversion and analysis
//!
//! This module handles hex/RGB/HSV/HLS conversions and the luminance
//! and contrast measurements built on top of them.

pub mod conversion;
pub mod analysis;

pub use conversion::{
    hex_to_rgb, hls_to_rgb, hsv_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hls, rgb_to_hsv,
    wrap_hue, Hls, Hsv, Rgb,
};
pub use analysis::{
    contrast_ratio, contrast_ratio_rgb, is_light, perceived_brightness, relative_luminance,
    suggested_text_color, ColorAnalyzer,
};
