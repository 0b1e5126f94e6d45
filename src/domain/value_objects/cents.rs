use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Money in minor currency units, as `cost_per_night` is stored.
///
/// Callers deal in major units (dollars); the store holds cents.
/// [`Cents::from_major`] applies the x100 on the way in and
/// [`Cents::to_major`] undoes it on the way out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i32);

impl Cents {
    pub const fn new(minor_units: i32) -> Self {
        Self(minor_units)
    }

    /// Convert a major-unit amount, rounding to the nearest cent
    pub fn from_major(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::InvalidAmount(amount.to_string()));
        }

        let minor = (amount * 100.0).round();
        if minor < f64::from(i32::MIN) || minor > f64::from(i32::MAX) {
            return Err(DomainError::AmountOutOfRange(amount.to_string()));
        }

        Ok(Self(minor as i32))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    pub fn to_major(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<i32> for Cents {
    fn from(minor_units: i32) -> Self {
        Self(minor_units)
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_major())
    }
}
