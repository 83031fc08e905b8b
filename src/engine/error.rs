//! Error taxonomy for the conversion engine.
//!
//! Two families: validation errors (malformed input that can never convert)
//! and domain errors (well-formed input that is physically invalid). The
//! HTTP layer maps the former to 400 and the latter to 422.

use crate::units::Category;

/// Error produced by [`crate::engine::convert`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The requested category does not exist.
    #[error("unknown category '{0}', expected one of: time, weight, temperature, currency")]
    UnknownCategory(String),

    /// The unit key is not a member of the requested category.
    #[error("unknown unit '{unit}' for category '{category}'")]
    UnknownUnit { category: Category, unit: String },

    /// The input value is NaN or infinite. JSON cannot carry such values,
    /// but direct library callers can.
    #[error("value must be a finite number, got {0}")]
    NonFiniteValue(f64),

    /// The conversion overflowed the representable numeric range. Only
    /// reachable for inputs near the f64 limits.
    #[error("conversion of {0:e} overflows the representable numeric range")]
    ResultOutOfRange(f64),

    /// The input temperature lies below absolute zero on its scale.
    #[error("{value} {unit} is below absolute zero ({limit} {unit})")]
    BelowAbsoluteZero {
        unit: String,
        value: f64,
        limit: f64,
    },
}

impl ConvertError {
    /// True for physically-invalid values as opposed to malformed input.
    pub fn is_domain(&self) -> bool {
        matches!(self, ConvertError::BelowAbsoluteZero { .. })
    }
}
