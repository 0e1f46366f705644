//! Numeric and naming constants shared across the adjustments.

/// Mix weight used when no amount is given, in percent of the first color.
pub const DEFAULT_MIX_WEIGHT: f64 = 50.0;

/// Hue rotation performed by `complement`, in degrees.
pub const COMPLEMENT_DEGREES: f64 = 180.0;

/// Full hue circle
pub const HUE_CIRCLE: f64 = 360.0;

/// Largest 8-bit channel value
pub const CHANNEL_MAX: f64 = 255.0;

/// Unitless amounts strictly between these bounds read as percentages.
pub const PERCENT_WINDOW: (f64, f64) = (1.0, 100.0);

/// Host named in deprecation warnings unless configured otherwise.
pub const DEFAULT_HOST_NAME: &str = "Sass";

/// Swatch edge length in the preview strip
#[cfg(feature = "floem")]
pub const SWATCH_SIZE: f32 = 40.0;

/// Gap between swatches
#[cfg(feature = "floem")]
pub const SWATCH_GAP: f32 = 8.0;

/// Swatch caption font size
#[cfg(feature = "floem")]
pub const SWATCH_LABEL_FONT: f32 = 10.0;
