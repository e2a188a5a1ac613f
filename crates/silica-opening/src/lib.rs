//! # Silica Opening
//!
//! Validated data model for how a physical opening (a door, a window, a
//! similar structural feature) is dimensionally measured.
//!
//! Untrusted input flows one direction:
//!
//! ```text
//! Side                   ← which edge/face the record describes
//!     │
//! Direction              ← legal travel directions, fixed per side
//!     │
//! Measure                ← one of five strategies, tagged by `Type`
//!     │
//! MeasurementValidator   ← the conjunction: shape ∧ direction
//!     │
//! Measurement | issues   ← a trusted value, or structured rejections
//! ```
//!
//! There is no state, no I/O, and no mutation: every operation is a pure
//! function from an untyped value to a validated value or a list of
//! [`MeasureValidationIssue`]s locating what was wrong.

pub mod direction;
pub mod issue;
pub mod measure;
pub mod measurement;

pub use direction::{Direction, Side, is_legal_direction};
pub use issue::{
    DIRECTION_ILLEGAL_FOR_SIDE, DIRECTION_TOKEN_UNKNOWN, MEASURE_SHAPE_MISMATCH,
    MEASURE_TYPE_UNKNOWN, MEASURE_VALUE_INVALID, MeasureValidationIssue,
};
pub use measure::{Measure, validate_measure};
pub use measurement::{Measurement, MeasurementValidator, validate_measurement};
