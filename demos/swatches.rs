//! Standalone demo: opens a window with adjustment swatches for a few colors.

use floem::prelude::*;
use floem::window::WindowConfig;
use hsl_tint::swatch::adjustment_strip;
use hsl_tint::{Amount, RgbColor};

fn main() {
    let amount = Amount::Percent(30.0);

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    adjustment_strip(RgbColor::new(255, 0, 0), amount),
                    adjustment_strip(RgbColor::new(77, 163, 120), amount),
                    adjustment_strip(RgbColor::new(59, 130, 246), amount),
                ))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 240.0))
                    .title("hsl-tint swatches"),
            ),
        )
        .run();
}
