//! Floem views that preview each adjustment as a row of color swatches.

use floem::peniko::Color;
use floem::prelude::*;

use crate::adjust;
use crate::amount::Amount;
use crate::color::RgbColor;
use crate::constants;

impl From<RgbColor> for Color {
    fn from(c: RgbColor) -> Self {
        Color::rgb8(c.r(), c.g(), c.b())
    }
}

/// A single labelled swatch.
pub fn swatch(name: &'static str, color: RgbColor) -> impl IntoView {
    v_stack((
        empty().style(move |s| {
            s.width(constants::SWATCH_SIZE)
                .height(constants::SWATCH_SIZE)
                .border_radius(4.0)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::from(color))
        }),
        label(move || name.to_string()).style(|s| {
            s.font_size(constants::SWATCH_LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// `base` next to every adjustment of it, each by `amount`.
pub fn adjustment_strip(base: RgbColor, amount: Amount) -> impl IntoView {
    let or_base = |r: crate::Result<RgbColor>| r.unwrap_or(base);
    h_stack((
        swatch("base", base),
        swatch("lighten", or_base(adjust::lighten(base, amount))),
        swatch("darken", or_base(adjust::darken(base, amount))),
        swatch("saturate", or_base(adjust::saturate(base, amount))),
        swatch("desaturate", or_base(adjust::desaturate(base, amount))),
        swatch("complement", adjust::complement(base)),
        swatch("grayscale", adjust::grayscale(base)),
    ))
    .style(|s| s.gap(constants::SWATCH_GAP).padding(constants::SWATCH_GAP))
}
