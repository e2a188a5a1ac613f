//! Rejections produced when constructing validated unit values.

use thiserror::Error;

/// Why a raw number was refused as a unit value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UnitsError {
    /// The value is NaN or infinite.
    #[error("value must be finite, got {value}")]
    NotFinite { value: f64 },

    /// A physical length cannot be negative.
    #[error("distance must be non-negative, got {value}")]
    NegativeDistance { value: f64 },

    /// An angular offset must lie in (-180, 180] degrees.
    #[error("angle must be within (-180, 180] degrees, got {value}")]
    AngleOutOfRange { value: f64 },
}
