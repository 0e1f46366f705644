//! Color adjustments expressed over the HSL model.
//!
//! Every function converts its input to HSL, moves one field, and converts
//! back. Intermediate values may leave their nominal range; `HslColor::to_color`
//! clamps once at the end. `mix` is the exception and works on raw RGB.

use tracing::debug;

use crate::amount::Amount;
use crate::color::{HslColor, RgbColor};
use crate::constants::{COMPLEMENT_DEGREES, DEFAULT_MIX_WEIGHT};
use crate::error::Result;
use crate::math;

/// Which way a percentage amount moves an HSL field.
#[derive(Clone, Copy)]
enum Direction {
    /// Percentage closes that fraction of the headroom up to 1.
    Up,
    /// Percentage removes that fraction of the current value.
    Down,
}

fn shift(value: f64, amount: Amount, direction: Direction) -> f64 {
    let v = amount.value();
    let percentage = amount.is_percentage();
    debug!(?amount, percentage, "interpreting adjustment amount");
    match (direction, percentage) {
        (Direction::Up, true) => value + (1.0 - value) * (v / 100.0),
        (Direction::Up, false) => value + v,
        (Direction::Down, true) => value * (1.0 - v / 100.0),
        (Direction::Down, false) => value - v,
    }
}

fn adjust_lightness(color: RgbColor, amount: Amount, direction: Direction) -> Result<RgbColor> {
    let amount = amount.validated()?;
    let mut hsl = HslColor::from_rgb(color);
    hsl.l = shift(hsl.l, amount, direction);
    Ok(hsl.to_color())
}

fn adjust_saturation(color: RgbColor, amount: Amount, direction: Direction) -> Result<RgbColor> {
    let amount = amount.validated()?;
    let mut hsl = HslColor::from_rgb(color);
    hsl.s = shift(hsl.s, amount, direction);
    Ok(hsl.to_color())
}

/// Lighten toward white.
///
/// A percentage closes that share of the remaining distance to full
/// lightness; an absolute amount is added on the 0.0–1.0 lightness scale.
pub fn lighten(color: RgbColor, amount: Amount) -> Result<RgbColor> {
    adjust_lightness(color, amount, Direction::Up)
}

/// Darken toward black.
///
/// A percentage scales lightness down proportionally (not by headroom, so it
/// is not the inverse of [`lighten`]); an absolute amount is subtracted.
pub fn darken(color: RgbColor, amount: Amount) -> Result<RgbColor> {
    adjust_lightness(color, amount, Direction::Down)
}

/// Make a color richer. Mirrors [`lighten`] on saturation.
pub fn saturate(color: RgbColor, amount: Amount) -> Result<RgbColor> {
    adjust_saturation(color, amount, Direction::Up)
}

/// Make a color grayer. Mirrors [`darken`] on saturation.
pub fn desaturate(color: RgbColor, amount: Amount) -> Result<RgbColor> {
    adjust_saturation(color, amount, Direction::Down)
}

/// Hue in whole degrees, 0–360.
pub fn hue(color: RgbColor) -> u16 {
    math::round_half_up(HslColor::from_rgb(color).h) as u16
}

/// Saturation in whole percent, 0–100.
pub fn saturation(color: RgbColor) -> u8 {
    math::round_half_up(HslColor::from_rgb(color).s * 100.0) as u8
}

/// Lightness in whole percent, 0–100.
pub fn luminosity(color: RgbColor) -> u8 {
    math::round_half_up(HslColor::from_rgb(color).l * 100.0) as u8
}

/// Rotate the hue by `degrees`. Wrapping into [0, 360) happens on conversion.
pub fn adjust_hue(color: RgbColor, degrees: f64) -> Result<RgbColor> {
    let degrees = Amount::Degrees(degrees).validated()?.value();
    Ok(rotate(color, degrees))
}

fn rotate(color: RgbColor, degrees: f64) -> RgbColor {
    let mut hsl = HslColor::from_rgb(color);
    hsl.h += degrees;
    hsl.to_color()
}

/// Opposite hue, same saturation and lightness.
pub fn complement(color: RgbColor) -> RgbColor {
    rotate(color, COMPLEMENT_DEGREES)
}

/// Gray of equal HSL lightness. Hue never enters into it.
pub fn grayscale(color: RgbColor) -> RgbColor {
    let g = math::to_channel(HslColor::from_rgb(color).l);
    RgbColor::new(g, g, g)
}

/// Weighted average of two colors in RGB.
///
/// `weight` is the percentage of `color1` in the result, 50 when absent. It is
/// always read as a percentage, whatever its unit, and rounded to a whole
/// percent first.
pub fn mix(color1: RgbColor, color2: RgbColor, weight: Option<Amount>) -> Result<RgbColor> {
    let weight = match weight {
        Some(amount) => amount.validated()?.value(),
        None => DEFAULT_MIX_WEIGHT,
    };
    let p = math::round_half_up(weight) / 100.0;
    let [r, g, b] = [0, 1, 2].map(|i| {
        let c1 = color1.channels()[i] as f64;
        let c2 = color2.channels()[i] as f64;
        math::channel_from_scaled(c1 * p + c2 * (1.0 - p))
    });
    Ok(RgbColor::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RgbColor = RgbColor::new(255, 0, 0);

    #[test]
    fn lighten_red_into_pink() {
        assert_eq!(lighten(RED, Amount::Percent(50.0)), Ok(RgbColor::new(255, 128, 128)));
        // unitless 50 falls inside the percentage window
        assert_eq!(lighten(RED, Amount::Plain(50.0)), Ok(RgbColor::new(255, 128, 128)));
    }

    #[test]
    fn darken_red_into_maroon() {
        assert_eq!(darken(RED, Amount::Plain(50.0)), Ok(RgbColor::new(128, 0, 0)));
    }

    #[test]
    fn absolute_amounts_add_on_unit_scale() {
        // l = 0.5 → 0.75
        assert_eq!(lighten(RED, Amount::Plain(0.25)), Ok(RgbColor::new(255, 128, 128)));
        // l = 0.5 → 0.25
        assert_eq!(darken(RED, Amount::Plain(0.25)), Ok(RgbColor::new(128, 0, 0)));
    }

    #[test]
    fn overshoot_clamps_at_conversion() {
        assert_eq!(lighten(RED, Amount::Plain(1.0)), Ok(RgbColor::WHITE));
        assert_eq!(darken(RED, Amount::Plain(100.0)), Ok(RgbColor::BLACK));
    }

    #[test]
    fn unitless_one_is_absolute_but_one_percent_is_not() {
        let absolute = lighten(RED, Amount::Plain(1.0)).unwrap();
        let percent = lighten(RED, Amount::Percent(1.0)).unwrap();
        assert_eq!(absolute, RgbColor::WHITE);
        assert_ne!(absolute, percent);
    }

    #[test]
    fn desaturate_fully_gives_gray() {
        let c = RgbColor::new(200, 40, 90);
        let gray = desaturate(c, Amount::Percent(100.0)).unwrap();
        assert_eq!(gray, grayscale(c));
    }

    #[test]
    fn saturate_gray_absolute() {
        // l ≈ 0.502, s 0 → 1, hue 0
        let c = saturate(RgbColor::new(128, 128, 128), Amount::Plain(1.0)).unwrap();
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), c.b());
    }

    #[test]
    fn accessors() {
        assert_eq!(hue(RgbColor::new(0, 0, 255)), 240);
        assert_eq!(saturation(RED), 100);
        assert_eq!(luminosity(RED), 50);
        assert_eq!(luminosity(RgbColor::WHITE), 100);
        assert_eq!(saturation(RgbColor::new(90, 90, 90)), 0);
    }

    #[test]
    fn adjust_hue_red_to_green() {
        assert_eq!(adjust_hue(RgbColor::new(127, 0, 0), 120.0), Ok(RgbColor::new(0, 127, 0)));
        assert_eq!(adjust_hue(RgbColor::new(127, 0, 0), -120.0), Ok(RgbColor::new(0, 0, 127)));
    }

    #[test]
    fn adjust_hue_rejects_nan() {
        assert!(adjust_hue(RED, f64::NAN).is_err());
    }

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(complement(RED), RgbColor::new(0, 255, 255));
    }

    #[test]
    fn grayscale_uses_lightness() {
        assert_eq!(grayscale(RED), RgbColor::new(128, 128, 128));
        assert_eq!(grayscale(RgbColor::new(10, 20, 30)), RgbColor::new(20, 20, 20));
    }

    #[test]
    fn mix_defaults_to_even_blend() {
        let a = RgbColor::new(255, 0, 0);
        let b = RgbColor::new(0, 0, 255);
        assert_eq!(mix(a, b, None), Ok(RgbColor::new(128, 0, 128)));
    }

    #[test]
    fn mix_weight_ignores_unit_and_rounds() {
        let a = RgbColor::new(200, 100, 0);
        let b = RgbColor::new(0, 100, 200);
        assert_eq!(mix(a, b, Some(Amount::Plain(100.0))), Ok(a));
        assert_eq!(mix(a, b, Some(Amount::Percent(0.0))), Ok(b));
        assert_eq!(mix(a, b, Some(Amount::Plain(24.6))), mix(a, b, Some(Amount::Percent(25.0))));
        assert_eq!(mix(a, b, Some(Amount::Percent(25.0))), Ok(RgbColor::new(50, 100, 150)));
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        assert!(lighten(RED, Amount::Plain(f64::NAN)).is_err());
        assert!(saturate(RED, Amount::Percent(f64::INFINITY)).is_err());
        assert!(mix(RED, RED, Some(Amount::Plain(f64::NEG_INFINITY))).is_err());
    }
}
