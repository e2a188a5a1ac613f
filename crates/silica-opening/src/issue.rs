//! Structured validation rejections.
//!
//! Every failed validation surfaces as a list of issues, each locating the
//! offending field by a dotted path rooted at `measurement` and classifying
//! the failure with one of the constants below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `Type` is missing, non-string, or not one of the five recognized tags.
pub const MEASURE_TYPE_UNKNOWN: &str = "measure_type_unknown";
/// A required field is missing, has the wrong kind, or an undeclared field
/// is present (including the input not being an object at all).
pub const MEASURE_SHAPE_MISMATCH: &str = "measure_shape_mismatch";
/// A `Distance` or `Angle` field is numeric but fails its own rule.
pub const MEASURE_VALUE_INVALID: &str = "measure_value_invalid";
/// `Direction` is present but not a known direction token.
pub const DIRECTION_TOKEN_UNKNOWN: &str = "direction_token_unknown";
/// `Direction` is a known token outside the side's legal set.
pub const DIRECTION_ILLEGAL_FOR_SIDE: &str = "direction_illegal_for_side";

/// One rejected aspect of an input value.
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[error("{failure_class} at {path}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct MeasureValidationIssue {
    pub failure_class: String,
    pub path: String,
    pub message: String,
}

impl MeasureValidationIssue {
    pub(crate) fn new(
        failure_class: &str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            failure_class: failure_class.to_string(),
            path: path.into(),
            message: message.into(),
        }
    }
}
