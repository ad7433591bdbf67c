//! Color scheme generators
//!
//! Each generator decomposes the base color once and derives the other
//! colors by moving around the hue circle (or, for monochromatic schemes,
//! along the lightness axis). Hue arithmetic wraps modulo one turn.
//!
//! The first color of every scheme except monochromatic is the base
//! string exactly as the caller passed it, once validated. It never goes
//! through HSV, so it carries no rounding drift.

use crate::color::{hex_to_rgb, normalize_hex, wrap_hue, Hls, Hsv, Rgb};
use crate::config::SchemeConfig;
use crate::constants::{harmonic, monochromatic, wheel};
use crate::scheme::SchemeKind;
use crate::{Result, SchemeResult};

/// Counts below one are treated as one
fn effective_count(kind: SchemeKind, count: usize) -> usize {
    if count == 0 {
        log::warn!("{kind} scheme requested with 0 colors, generating 1 instead");
        1
    } else {
        count
    }
}

/// Validate the base once: the verbatim input for slot 0 and its HSV decomposition
fn decompose(base_hex: &str) -> Result<(String, Hsv)> {
    let hsv = hex_to_rgb(base_hex)?.to_hsv();
    Ok((base_hex.to_string(), hsv))
}

fn hsv_hex(hsv: Hsv) -> String {
    Rgb::from_hsv(hsv).to_hex()
}

/// Base color and its opposite on the color wheel
///
/// Always returns exactly two colors.
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if the base color is malformed
pub fn generate_complementary(base_hex: &str) -> Result<Vec<String>> {
    let (base, hsv) = decompose(base_hex)?;
    Ok(vec![base, hsv_hex(hsv.rotated(wheel::COMPLEMENT))])
}

/// Base color followed by neighbours alternating right and left of it
///
/// Color `i` sits at `+30° * ceil(i / 2)` for odd `i` and `-30° * i / 2`
/// for even `i`, so three colors give base, +30°, -30°.
pub fn generate_analogous(base_hex: &str, count: usize) -> Result<Vec<String>> {
    let count = effective_count(SchemeKind::Analogous, count);
    let (base, hsv) = decompose(base_hex)?;

    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let offset = if i % 2 == 1 {
            wheel::ANALOGOUS_STEP * ((i + 1) / 2) as f64
        } else {
            -wheel::ANALOGOUS_STEP * (i / 2) as f64
        };
        colors.push(hsv_hex(hsv.rotated(offset)));
    }
    Ok(colors)
}

/// Base color plus the two colors 120° and 240° away
pub fn generate_triadic(base_hex: &str) -> Result<Vec<String>> {
    let (base, hsv) = decompose(base_hex)?;
    let mut colors = vec![base];
    colors.extend((1..=2).map(|i| hsv_hex(hsv.rotated(wheel::TRIADIC_STEP * i as f64))));
    Ok(colors)
}

/// Base color plus the three colors 90°, 180° and 270° away
pub fn generate_tetradic(base_hex: &str) -> Result<Vec<String>> {
    let (base, hsv) = decompose(base_hex)?;
    let mut colors = vec![base];
    colors.extend((1..=3).map(|i| hsv_hex(hsv.rotated(wheel::TETRADIC_STEP * i as f64))));
    Ok(colors)
}

/// Lightness ramp of the base hue, ordered darkest to lightest
///
/// Lightness runs evenly from 0.2 to 0.9 keeping hue and saturation.
/// A single-color scheme keeps the base lightness instead.
pub fn generate_monochromatic(base_hex: &str, count: usize) -> Result<Vec<String>> {
    let count = effective_count(SchemeKind::Monochromatic, count);
    let hls = hex_to_rgb(base_hex)?.to_hls();

    let colors = (0..count)
        .map(|i| {
            let lightness = if count > 1 {
                monochromatic::MIN_LIGHTNESS
                    + monochromatic::LIGHTNESS_SPAN * i as f64 / (count - 1) as f64
            } else {
                hls.lightness
            };
            Rgb::from_hls(Hls::new(hls.hue, lightness, hls.saturation)).to_hex()
        })
        .collect();
    Ok(colors)
}

/// Base color followed by gently drifting variations
///
/// Step `i` moves the hue by `15° * i`, lowers saturation by `0.1 * i`
/// (not below 0.3) and raises value by `0.05 * i` (not below 0.4), both
/// capped at 1.0.
pub fn generate_harmonic(base_hex: &str, count: usize) -> Result<Vec<String>> {
    let count = effective_count(SchemeKind::Harmonic, count);
    let (base, hsv) = decompose(base_hex)?;

    let mut colors = Vec::with_capacity(count);
    colors.push(base);
    for i in 1..count {
        let step = i as f64;
        let shifted = Hsv::new(
            wrap_hue(hsv.hue + step * wheel::HARMONIC_STEP_DEGREES / wheel::DEGREES_PER_TURN),
            (hsv.saturation - harmonic::SATURATION_STEP * step)
                .clamp(harmonic::MIN_SATURATION, harmonic::MAX_CHANNEL),
            (hsv.value + harmonic::VALUE_STEP * step)
                .clamp(harmonic::MIN_VALUE, harmonic::MAX_CHANNEL),
        );
        colors.push(hsv_hex(shifted));
    }
    Ok(colors)
}

/// Generate a scheme by name
///
/// `scheme_name` is matched case-insensitively (see [`SchemeKind`]).
/// `count` only applies to analogous, monochromatic and harmonic schemes
/// and defaults to 3, 4 and 3 respectively.
///
/// # Errors
///
/// Returns `ColorError::UnknownScheme` for an unrecognized name and
/// `ColorError::InvalidFormat` for a malformed base color
pub fn generate_scheme(
    scheme_name: &str,
    base_hex: &str,
    count: Option<usize>,
) -> Result<Vec<String>> {
    let kind: SchemeKind = scheme_name.parse()?;
    SchemeGenerator::default().generate(kind, base_hex, count)
}

/// Scheme dispatcher carrying the default counts
#[derive(Debug, Clone, Default)]
pub struct SchemeGenerator {
    config: SchemeConfig,
}

impl SchemeGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: SchemeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Count used when the caller does not provide one
    pub fn default_count(&self, kind: SchemeKind) -> usize {
        match kind {
            SchemeKind::Analogous => self.config.analogous_count,
            SchemeKind::Monochromatic => self.config.monochromatic_count,
            SchemeKind::Harmonic => self.config.harmonic_count,
            fixed => fixed.fixed_len().unwrap_or(1),
        }
    }

    /// Generate the colors of one scheme
    ///
    /// # Arguments
    ///
    /// * `kind` - Scheme to build
    /// * `base_hex` - Base color, six hex digits with optional `#`
    /// * `count` - Number of colors for variable-length schemes; ignored
    ///   by complementary, triadic and tetradic schemes
    ///
    /// # Returns
    ///
    /// Ordered `#RRGGBB` colors
    pub fn generate(
        &self,
        kind: SchemeKind,
        base_hex: &str,
        count: Option<usize>,
    ) -> Result<Vec<String>> {
        let count = count.unwrap_or_else(|| self.default_count(kind));
        log::debug!("generating {kind} scheme from {base_hex} (count {count})");

        match kind {
            SchemeKind::Complementary => generate_complementary(base_hex),
            SchemeKind::Analogous => generate_analogous(base_hex, count),
            SchemeKind::Triadic => generate_triadic(base_hex),
            SchemeKind::Tetradic => generate_tetradic(base_hex),
            SchemeKind::Monochromatic => generate_monochromatic(base_hex, count),
            SchemeKind::Harmonic => generate_harmonic(base_hex, count),
        }
    }

    /// Generate a scheme and keep the request alongside the colors
    pub fn generate_result(
        &self,
        kind: SchemeKind,
        base_hex: &str,
        count: Option<usize>,
    ) -> Result<SchemeResult> {
        let colors = self.generate(kind, base_hex, count)?;
        Ok(SchemeResult {
            kind,
            base: normalize_hex(base_hex)?,
            colors,
        })
    }
}
