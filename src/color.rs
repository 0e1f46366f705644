//! Color value types: opaque 8-bit RGB and its HSL intermediate.
//!
//! `HslColor::from_rgb` and `HslColor::to_color` are the two directions of the
//! color-space conversion every adjustment is built on.

use std::fmt;

use crate::error::{ColorError, Result};
use crate::math;

/// Fully opaque RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    /// Create from 0–255 RGB values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from wide integers, rejecting any channel outside 0–255.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        fn channel(name: char, value: i64) -> Result<u8> {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
            })
        }
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }

    /// Channels as an array, in r, g, b order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> HslColor {
        HslColor::from_rgb(*self)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(c: RgbColor) -> Self {
        c.channels()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// HSL intermediate: hue in degrees, saturation and lightness nominally 0.0–1.0.
///
/// Fields are left unclamped and unwrapped while adjustments run; only
/// [`HslColor::to_color`] brings them back into range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Standard RGB → HSL. Hue lands in [0, 360).
    pub fn from_rgb(color: RgbColor) -> Self {
        let [r, g, b] = color.channels().map(|c| c as f64 / 255.0);
        let (h, s, l) = math::rgb_to_hsl(r, g, b);
        Self { h, s, l }
    }

    /// HSL → RGB. Wraps hue, clamps s and l, rounds each channel half up.
    pub fn to_color(&self) -> RgbColor {
        let (r, g, b) = math::hsl_to_rgb(self.h, self.s, self.l);
        RgbColor::new(math::to_channel(r), math::to_channel(g), math::to_channel(b))
    }

    /// Like [`HslColor::to_color`] but rejects NaN or infinite fields, which
    /// would otherwise saturate to an arbitrary channel value.
    pub fn try_to_color(&self) -> Result<RgbColor> {
        if self.h.is_finite() && self.s.is_finite() && self.l.is_finite() {
            Ok(self.to_color())
        } else {
            Err(ColorError::NonFiniteHsl)
        }
    }
}

impl From<RgbColor> for HslColor {
    fn from(color: RgbColor) -> Self {
        Self::from_rgb(color)
    }
}

impl From<HslColor> for RgbColor {
    fn from(hsl: HslColor) -> Self {
        hsl.to_color()
    }
}
