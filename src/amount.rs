//! Adjustment magnitudes and the percentage-vs-absolute policy.

use crate::constants::PERCENT_WINDOW;
use crate::error::{ColorError, Result};

/// A caller-supplied adjustment magnitude, tagged with the unit it was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Unitless number.
    Plain(f64),
    /// Number carrying a `%` unit.
    Percent(f64),
    /// Number carrying a degree unit.
    Degrees(f64),
}

impl Amount {
    /// Numeric value, unit dropped.
    pub fn value(&self) -> f64 {
        match *self {
            Amount::Plain(v) | Amount::Percent(v) | Amount::Degrees(v) => v,
        }
    }

    /// Whether the amount scales headroom as a percentage rather than adding
    /// an absolute delta.
    ///
    /// Percent-tagged amounts always are. Unitless amounts are only when
    /// strictly between 1 and 100, so `1`, `0`, `100` and anything negative
    /// stay absolute. Any other unit counts as not percent-tagged.
    pub fn is_percentage(&self) -> bool {
        let (low, high) = PERCENT_WINDOW;
        match *self {
            Amount::Percent(_) => true,
            Amount::Plain(v) => v > low && v < high,
            Amount::Degrees(_) => false,
        }
    }

    /// Return the amount unchanged if its value is finite.
    pub fn validated(self) -> Result<Self> {
        let value = self.value();
        if value.is_finite() {
            Ok(self)
        } else {
            Err(ColorError::NonFiniteAmount { value })
        }
    }

    /// Same value, percent unit.
    pub fn into_percent(self) -> Self {
        Amount::Percent(self.value())
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Plain(v)
    }
}
