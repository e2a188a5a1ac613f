//! Side-aware composite validation.
//!
//! A full measurement is a variant record plus a `Direction`, and the set
//! of admissible directions depends on which side of the opening the
//! record describes. The validator is built per side and closes over that
//! side's legal set. The shape axis and the direction axis are checked
//! independently: both run, and every issue from either axis is reported.

use crate::direction::{Direction, Side};
use crate::issue::{
    DIRECTION_ILLEGAL_FOR_SIDE, DIRECTION_TOKEN_UNKNOWN, MEASURE_SHAPE_MISMATCH,
    MeasureValidationIssue,
};
use crate::measure::{DIRECTION_FIELD, ISSUE_PATH_ROOT, Measure, validate_measure_fields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DIRECTION_PATH: &str = "measurement.Direction";

/// A validated measurement: one variant record plus its travel direction.
///
/// Constructed once from validated input and immutable thereafter; a new
/// value replaces an old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "Direction")]
    pub direction: Direction,
    #[serde(flatten)]
    pub measure: Measure,
}

/// Validator for measurements taken from one particular side.
///
/// Construction fixes the admissible direction set; the variant-shape
/// logic is shared across all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementValidator {
    side: Side,
}

impl MeasurementValidator {
    /// Build the validator for `side`.
    pub fn for_side(side: Side) -> Self {
        Self { side }
    }

    /// The side this validator admits directions for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Validate an untyped value as a `Measurement` for this side.
    ///
    /// The value must both validate as some measurement variant and carry
    /// a `Direction` legal for the side. Neither check defaults the other:
    /// a missing `Direction` is rejected even when the side admits only a
    /// single direction.
    pub fn validate(&self, value: &Value) -> Result<Measurement, Vec<MeasureValidationIssue>> {
        let Some(obj) = value.as_object() else {
            return Err(vec![MeasureValidationIssue::new(
                MEASURE_SHAPE_MISMATCH,
                ISSUE_PATH_ROOT,
                "must be an object",
            )]);
        };

        let mut issues: Vec<MeasureValidationIssue> = Vec::new();

        let measure = match validate_measure_fields(value, true) {
            Ok(measure) => Some(measure),
            Err(mut shape_issues) => {
                issues.append(&mut shape_issues);
                None
            }
        };

        let direction = self.check_direction(obj, &mut issues);

        match (measure, direction) {
            (Some(measure), Some(direction)) => Ok(Measurement { direction, measure }),
            _ => Err(issues),
        }
    }

    fn check_direction(
        &self,
        obj: &Map<String, Value>,
        issues: &mut Vec<MeasureValidationIssue>,
    ) -> Option<Direction> {
        let Some(field) = obj.get(DIRECTION_FIELD) else {
            issues.push(MeasureValidationIssue::new(
                MEASURE_SHAPE_MISMATCH,
                DIRECTION_PATH,
                "missing required field",
            ));
            return None;
        };
        let Some(token) = field.as_str() else {
            issues.push(MeasureValidationIssue::new(
                DIRECTION_TOKEN_UNKNOWN,
                DIRECTION_PATH,
                "must be a direction string",
            ));
            return None;
        };
        let Some(direction) = Direction::from_token(token) else {
            issues.push(MeasureValidationIssue::new(
                DIRECTION_TOKEN_UNKNOWN,
                DIRECTION_PATH,
                format!("unrecognized direction {token:?}"),
            ));
            return None;
        };
        if !self.side.admits(direction) {
            let admitted = self
                .side
                .legal_directions()
                .iter()
                .map(|direction| direction.token())
                .collect::<Vec<_>>()
                .join(", ");
            issues.push(MeasureValidationIssue::new(
                DIRECTION_ILLEGAL_FOR_SIDE,
                DIRECTION_PATH,
                format!(
                    "direction {token:?} is not admitted on side {}; admitted: {admitted}",
                    self.side
                ),
            ));
            return None;
        }
        Some(direction)
    }
}

/// Validate `value` as a measurement taken from `side`.
pub fn validate_measurement(
    side: Side,
    value: &Value,
) -> Result<Measurement, Vec<MeasureValidationIssue>> {
    MeasurementValidator::for_side(side).validate(value)
}
