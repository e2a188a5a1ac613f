//! Non-negative physical length.

use crate::error::UnitsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A known physical length.
///
/// Always finite and non-negative. A length that has not been measured yet
/// is not a `Distance`; records represent it as an absent (`null`) field.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Validate a raw number as a distance.
    pub fn new(value: f64) -> Result<Self, UnitsError> {
        if !value.is_finite() {
            return Err(UnitsError::NotFinite { value });
        }
        if value < 0.0 {
            return Err(UnitsError::NegativeDistance { value });
        }
        Ok(Self(value))
    }

    /// The underlying length.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Distance {
    type Error = UnitsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> f64 {
        distance.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
