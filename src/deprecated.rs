//! Legacy `*-percent` entry points, kept for hosts that still expose them.
//!
//! Each one warns through the given sink, forces a percent reading of its
//! amount, and delegates to [`scale_channel`].

use crate::amount::Amount;
use crate::color::{HslColor, RgbColor};
use crate::diagnostics::DiagnosticsSink;
use crate::error::Result;

/// HSL field a percentage scale applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Saturation,
    Lightness,
}

/// Scale one HSL field by a signed percentage.
///
/// Positive `percent` closes that share of the headroom toward 1; negative
/// `percent` takes that share of the current value away.
pub fn scale_channel(color: RgbColor, channel: Channel, percent: f64) -> Result<RgbColor> {
    let p = Amount::Percent(percent).validated()?.value() / 100.0;
    let mut hsl = HslColor::from_rgb(color);
    let field = match channel {
        Channel::Saturation => &mut hsl.s,
        Channel::Lightness => &mut hsl.l,
    };
    if p > 0.0 {
        *field += (1.0 - *field) * p;
    } else {
        *field *= 1.0 + p;
    }
    Ok(hsl.to_color())
}

fn percent_of(name: &str, amount: Amount, host_name: &str, sink: &dyn DiagnosticsSink) -> f64 {
    sink.warn(&format!(
        "{name}() is deprecated. Please use the scale-color() function provided by {host_name}."
    ));
    if !matches!(amount, Amount::Percent(_)) {
        sink.warn(&format!(
            "{host_name}'s scale-color() function requires a percent instead of a unitless number for the amount."
        ));
    }
    amount.into_percent().value()
}

#[deprecated(note = "use `scale_channel(color, Channel::Lightness, percent)`")]
pub fn lighten_percent(
    color: RgbColor,
    amount: Amount,
    host_name: &str,
    sink: &dyn DiagnosticsSink,
) -> Result<RgbColor> {
    let p = percent_of("lighten-percent", amount, host_name, sink);
    scale_channel(color, Channel::Lightness, p)
}

#[deprecated(note = "use `scale_channel(color, Channel::Lightness, -percent)`")]
pub fn darken_percent(
    color: RgbColor,
    amount: Amount,
    host_name: &str,
    sink: &dyn DiagnosticsSink,
) -> Result<RgbColor> {
    let p = percent_of("darken-percent", amount, host_name, sink);
    scale_channel(color, Channel::Lightness, -p)
}

#[deprecated(note = "use `scale_channel(color, Channel::Saturation, percent)`")]
pub fn saturate_percent(
    color: RgbColor,
    amount: Amount,
    host_name: &str,
    sink: &dyn DiagnosticsSink,
) -> Result<RgbColor> {
    let p = percent_of("saturate-percent", amount, host_name, sink);
    scale_channel(color, Channel::Saturation, p)
}

#[deprecated(note = "use `scale_channel(color, Channel::Saturation, -percent)`")]
pub fn desaturate_percent(
    color: RgbColor,
    amount: Amount,
    host_name: &str,
    sink: &dyn DiagnosticsSink,
) -> Result<RgbColor> {
    let p = percent_of("desaturate-percent", amount, host_name, sink);
    scale_channel(color, Channel::Saturation, -p)
}
