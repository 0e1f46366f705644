//! Color math: direct conversions without external dependencies.
//! RGB components are normalized f64 in 0.0–1.0, hue is in degrees.

use crate::constants::{CHANNEL_MAX, HUE_CIRCLE};

/// RGB → HSL. Takes 0.0–1.0 channels, returns (degrees in [0, 360), s, l).
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h6 = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ((h6 * 60.0).rem_euclid(HUE_CIRCLE), s, l)
}

/// HSL → RGB. Hue may be any finite number of degrees; s and l are clamped
/// to 0.0–1.0 here and nowhere earlier. Returns 0.0–1.0 channels.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return (l, l, l);
    }
    let s = s.clamp(0.0, 1.0);

    let h = h.rem_euclid(HUE_CIRCLE) / HUE_CIRCLE;
    let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t2 = 2.0 * l - t1;

    (
        hue_to_rgb(t2, t1, h + 1.0 / 3.0),
        hue_to_rgb(t2, t1, h),
        hue_to_rgb(t2, t1, h - 1.0 / 3.0),
    )
}

/// One channel of the HSL → RGB piecewise ramp. `h` is a hue fraction,
/// possibly one step outside 0.0–1.0.
pub(crate) fn hue_to_rgb(t2: f64, t1: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if h * 6.0 < 1.0 {
        t2 + (t1 - t2) * h * 6.0
    } else if h * 2.0 < 1.0 {
        t1
    } else if h * 3.0 < 2.0 {
        t2 + (t1 - t2) * (2.0 / 3.0 - h) * 6.0
    } else {
        t2
    }
}

/// Round half away from zero.
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    v.round()
}

/// 0.0–1.0 channel → 0–255, rounded then clamped.
#[inline]
pub(crate) fn to_channel(v: f64) -> u8 {
    round_half_up(v * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX) as u8
}

/// 0–255 channel value (possibly fractional) → 0–255, rounded then clamped.
#[inline]
pub(crate) fn channel_from_scaled(v: f64) -> u8 {
    round_half_up(v).clamp(0.0, CHANNEL_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primaries_have_expected_hue() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
        assert!(close(h, 0.0) && close(s, 1.0) && close(l, 0.5));
        let (h, _, _) = rgb_to_hsl(0.0, 1.0, 0.0);
        assert!(close(h, 120.0));
        let (h, _, _) = rgb_to_hsl(0.0, 0.0, 1.0);
        assert!(close(h, 240.0));
    }

    #[test]
    fn red_dominant_with_more_blue_wraps_below_360() {
        // magenta-ish red: max is r, g < b
        let (h, _, _) = rgb_to_hsl(1.0, 0.0, 0.5);
        assert!(close(h, 330.0));
    }

    #[test]
    fn achromatic_input_has_zero_hue_and_saturation() {
        let (h, s, l) = rgb_to_hsl(0.25, 0.25, 0.25);
        assert_eq!((h, s), (0.0, 0.0));
        assert!(close(l, 0.25));
    }

    #[test]
    fn saturation_uses_upper_formula_above_half_lightness() {
        let (_, s, l) = rgb_to_hsl(1.0, 0.5, 0.5);
        assert!(close(l, 0.75));
        assert!(close(s, 1.0));
    }

    #[test]
    fn hsl_to_rgb_clamps_overshoot() {
        let (r, g, b) = hsl_to_rgb(0.0, 1.7, 1.4);
        assert_eq!((to_channel(r), to_channel(g), to_channel(b)), (255, 255, 255));
        let (r, g, b) = hsl_to_rgb(0.0, -0.3, 0.5);
        assert!(close(r, 0.5) && close(g, 0.5) && close(b, 0.5));
    }

    #[test]
    fn negative_hue_wraps() {
        let a = hsl_to_rgb(-120.0, 1.0, 0.5);
        let b = hsl_to_rgb(240.0, 1.0, 0.5);
        assert!(close(a.0, b.0) && close(a.1, b.1) && close(a.2, b.2));
    }

    #[test]
    fn channel_rounding_is_half_up() {
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(channel_from_scaled(63.5), 64);
        assert_eq!(channel_from_scaled(-3.0), 0);
        assert_eq!(channel_from_scaled(300.0), 255);
    }
}
