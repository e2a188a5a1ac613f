//! Bounded angular offset.

use crate::error::UnitsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An angular offset in degrees, measured from straight in the current
/// travel direction.
///
/// Always finite and within `(-180, 180]`: a half-turn either way covers
/// every physically meaningful reading.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Angle(f64);

impl Angle {
    /// Validate a raw number as an angle.
    pub fn new(degrees: f64) -> Result<Self, UnitsError> {
        if !degrees.is_finite() {
            return Err(UnitsError::NotFinite { value: degrees });
        }
        if degrees <= -180.0 || degrees > 180.0 {
            return Err(UnitsError::AngleOutOfRange { value: degrees });
        }
        Ok(Self(degrees))
    }

    /// The offset in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Angle {
    type Error = UnitsError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> f64 {
        angle.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Angle::new(0.0).unwrap().degrees(), 0.0);
        assert_eq!(Angle::new(180.0).unwrap().degrees(), 180.0);
        assert_eq!(Angle::new(-179.9).unwrap().degrees(), -179.9);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Angle::new(-180.0),
            Err(UnitsError::AngleOutOfRange { value: -180.0 })
        );
        assert_eq!(
            Angle::new(180.5),
            Err(UnitsError::AngleOutOfRange { value: 180.5 })
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Angle::new(f64::NAN),
            Err(UnitsError::NotFinite { .. })
        ));
        assert!(matches!(
            Angle::new(f64::NEG_INFINITY),
            Err(UnitsError::NotFinite { .. })
        ));
    }

    #[test]
    fn serde_enforces_the_same_rule() {
        let parsed: Angle = serde_json::from_value(serde_json::json!(15.5)).unwrap();
        assert_eq!(parsed.degrees(), 15.5);
        assert!(serde_json::from_value::<Angle>(serde_json::json!(200.0)).is_err());
    }
}
