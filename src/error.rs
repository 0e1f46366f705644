//! Error type shared by every fallible entry point.

use thiserror::Error;

/// Boundary-input failures. Arithmetic itself is total once clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// An RGB channel outside 0–255.
    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    ChannelOutOfRange { channel: char, value: i64 },

    /// NaN or infinite adjustment amount.
    #[error("amount must be a finite number, got {value}")]
    NonFiniteAmount { value: f64 },

    #[error("HSL color has a non-finite component")]
    NonFiniteHsl,

    #[error("unknown color function: {0}")]
    UnknownFunction(String),

    #[error("{name}() takes {expected} arguments, got {got}")]
    Arity {
        name: String,
        expected: String,
        got: usize,
    },

    #[error("{name}() argument {index} must be a {expected}")]
    ArgumentType {
        name: String,
        index: usize,
        expected: &'static str,
    },

    /// Invalid provider configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
