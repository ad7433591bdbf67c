//! Color wheel geometry and analysis constants
//!
//! Hue offsets are expressed in turns (1.0 = 360°) because every
//! conversion in this crate works on the unit hue circle.

/// Hue rotations used by the scheme generators
pub mod wheel {
    /// Opposite side of the color wheel (180°)
    pub const COMPLEMENT: f64 = 0.5;

    /// Step between analogous neighbours (30°)
    pub const ANALOGOUS_STEP: f64 = 30.0 / 360.0;

    /// Spacing of triadic colors (120°)
    pub const TRIADIC_STEP: f64 = 120.0 / 360.0;

    /// Spacing of tetradic colors (90°)
    pub const TETRADIC_STEP: f64 = 90.0 / 360.0;

    /// Hue drift per harmonic step, in degrees
    ///
    /// The offset for step `i` is evaluated as `i * 15 / 360`.
    pub const HARMONIC_STEP_DEGREES: f64 = 15.0;

    pub const DEGREES_PER_TURN: f64 = 360.0;
}

/// Saturation/value drift applied by the harmonic generator
pub mod harmonic {
    /// Saturation removed per step
    pub const SATURATION_STEP: f64 = 0.1;
    pub const MIN_SATURATION: f64 = 0.3;

    /// Value added per step
    pub const VALUE_STEP: f64 = 0.05;
    pub const MIN_VALUE: f64 = 0.4;

    pub const MAX_CHANNEL: f64 = 1.0;
}

/// Lightness ramp of the monochromatic generator
pub mod monochromatic {
    /// Lightness of the darkest color
    pub const MIN_LIGHTNESS: f64 = 0.2;

    /// Lightness span from darkest to lightest (0.2 -> 0.9)
    pub const LIGHTNESS_SPAN: f64 = 0.7;
}

/// WCAG 2.0 relative luminance and contrast ratio
///
/// Source: WCAG 2.0, definitions of "relative luminance" and "contrast ratio"
pub mod wcag {
    /// Upper bound of the linear segment of the sRGB transfer curve
    pub const LINEAR_THRESHOLD: f64 = 0.03928;
    pub const LINEAR_DIVISOR: f64 = 12.92;

    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Channel weights (R, G, B)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Flare term added to both luminances
    pub const CONTRAST_OFFSET: f64 = 0.05;

    /// Black on white
    pub const MAX_CONTRAST: f64 = 21.0;
    pub const MIN_CONTRAST: f64 = 1.0;
}

/// Perceived brightness used for light/dark classification
pub mod perceived {
    /// ITU-R BT.601 luma weights (R, G, B)
    pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

    /// Midpoint of the 0-255 channel range
    pub const LIGHT_THRESHOLD: f64 = 127.5;
}

/// Defaults shared by generators, configuration and the text-color helper
pub mod defaults {
    pub const ANALOGOUS_COUNT: usize = 3;
    pub const MONOCHROMATIC_COUNT: usize = 4;
    pub const HARMONIC_COUNT: usize = 3;

    /// Text color over light backgrounds
    pub const DARK_TEXT: &str = "#000000";

    /// Text color over dark backgrounds
    pub const LIGHT_TEXT: &str = "#FFFFFF";
}
