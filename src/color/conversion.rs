//! Color representations and conversions
//!
//! Provides lossless hex <-> RGB conversion and the cylindrical
//! representations used by the scheme generators:
//! - Hex string (`#RRGGBB`) to/from 8-bit RGB
//! - RGB to/from HSV (hue, saturation, value)
//! - RGB to/from HLS (hue, lightness, saturation)
//!
//! All cylindrical components live in [0.0, 1.0] and hue wraps at 1.0.
//! Going back to RGB truncates each channel (`floor(c * 255)`), so an
//! RGB -> HSV -> RGB round trip may drift by one unit per channel.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/value, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Hue/lightness/saturation, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, clamping each channel to [0, 255]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |c: i64| c.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parse a hex color, see [`hex_to_rgb`]
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex)
    }

    /// Canonical `#RRGGBB` representation
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }

    pub fn to_hls(self) -> Hls {
        rgb_to_hls(self)
    }

    pub fn from_hls(hls: Hls) -> Self {
        hls_to_rgb(hls)
    }

    /// Channels normalized to [0.0, 1.0] as exactly `c / 255`
    pub fn normalized(self) -> Srgb<f64> {
        let [r, g, b] = self.channels();
        Srgb::new(r / 255.0, g / 255.0, b / 255.0)
    }

    /// Channels as `[r, g, b]` in 0-255 float space
    pub fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Same saturation/value with the hue moved by `turns` around the wheel
    pub fn rotated(self, turns: f64) -> Self {
        Self {
            hue: wrap_hue(self.hue + turns),
            ..self
        }
    }
}

impl Hls {
    pub fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }
}

/// Reduce a hue to [0.0, 1.0), wrapping negative offsets from the top
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Parse a hexadecimal color string to RGB
///
/// # Arguments
///
/// * `hex` - Six hex digits with an optional leading `#` ("#3498db" or "3498DB")
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if the remaining string is not
/// exactly six hexadecimal digits
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ColorError::invalid_format(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_format(
            hex,
            format!("'{bad}' is not a hex digit"),
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::invalid_format(hex, e.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Canonical form of a hex color: uppercase with a leading `#`
///
/// # Errors
///
/// Same as [`hex_to_rgb`]
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Hue in turns from normalized channels and their extremes
///
/// Caller guarantees `max > min`.
fn hue_of(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let range = max - min;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    wrap_hue(sector / 6.0)
}

/// Convert RGB to HSV
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let srgb = rgb.normalized();
    let (r, g, b) = (srgb.red, srgb.green, srgb.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return Hsv::new(0.0, 0.0, max);
    }

    Hsv::new(hue_of(r, g, b, max, min), (max - min) / max, max)
}

/// Convert HSV to RGB, truncating each channel
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv {
        hue: h,
        saturation: s,
        value: v,
    } = hsv;

    if s == 0.0 {
        return denormalize(v, v, v);
    }

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => denormalize(v, t, p),
        1 => denormalize(q, v, p),
        2 => denormalize(p, v, t),
        3 => denormalize(p, q, v),
        4 => denormalize(t, p, v),
        _ => denormalize(v, p, q),
    }
}

/// Convert RGB to HLS
pub fn rgb_to_hls(rgb: Rgb) -> Hls {
    let srgb = rgb.normalized();
    let (r, g, b) = (srgb.red, srgb.green, srgb.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hls::new(0.0, lightness, 0.0);
    }

    let range = max - min;
    // 2 - max - min, not 2 - (max + min): the two round differently
    let saturation = if lightness <= 0.5 {
        range / (max + min)
    } else {
        range / (2.0 - max - min)
    };

    Hls::new(hue_of(r, g, b, max, min), lightness, saturation)
}

/// Convert HLS to RGB, truncating each channel
pub fn hls_to_rgb(hls: Hls) -> Rgb {
    let Hls {
        hue: h,
        lightness: l,
        saturation: s,
    } = hls;

    if s == 0.0 {
        return denormalize(l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    denormalize(
        hls_channel(m1, m2, h + 1.0 / 3.0),
        hls_channel(m1, m2, h),
        hls_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Scale normalized channels to 0-255, truncating toward zero
fn denormalize(r: f64, g: f64, b: f64) -> Rgb {
    let scale = |c: f64| (c * 255.0).trunc() as i64;
    let rgb = Rgb::clamped(scale(r), scale(g), scale(b));
    log::trace!("denormalized ({r:.4}, {g:.4}, {b:.4}) -> {rgb}");
    rgb
}
