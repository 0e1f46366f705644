//! # hsl-tint
//!
//! RGB ↔ HSL conversion and the classic stylesheet color adjustments built on
//! it: lighten, darken, saturate, desaturate, hue rotation, complement,
//! grayscale and RGB mixing.
//!
//! Amounts are [`Amount`]s. Whether one scales headroom as a percentage or is
//! added as an absolute delta follows [`Amount::is_percentage`].
//!
//! ## Usage
//!
//! ```rust
//! use hsl_tint::{adjust, Amount, RgbColor};
//!
//! let red = RgbColor::new(255, 0, 0);
//! let pink = adjust::lighten(red, Amount::Percent(50.0)).unwrap();
//! assert_eq!(pink.to_hex(), "#ff8080");
//! ```
//!
//! Hosts that evaluate stylesheet-like languages register the whole set once
//! through [`ColorFunctionProvider::install_into`].

pub mod adjust;
mod amount;
mod color;
mod config;
mod constants;
#[cfg(feature = "deprecated")]
pub mod deprecated;
mod diagnostics;
mod error;
mod math;
mod provider;
#[cfg(feature = "floem")]
pub mod swatch;

pub use amount::Amount;
pub use color::{HslColor, RgbColor};
pub use config::ProviderConfig;
pub use diagnostics::{CollectingSink, DiagnosticsSink, TracingSink};
pub use error::{ColorError, Result};
pub use provider::{ColorFunction, ColorFunctionProvider, FunctionRegistry, Value};
