//! Error types for shape construction and mutation.

use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors that can occur when constructing or mutating a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A geometric parameter was non-positive or not a finite number.
    #[error("invalid {dimension} for {shape}: {value} (must be finite and > 0)")]
    InvalidDimension {
        /// Which shape rejected the value.
        shape: ShapeKind,
        /// Which dimension was being set (e.g. `radius`, `length`).
        dimension: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Validate a dimension value: must be finite and strictly positive.
///
/// Returns the value unchanged on success so constructors and setters can
/// validate before committing any field.
pub(crate) fn check_dimension(
    shape: ShapeKind,
    dimension: &'static str,
    value: f64,
) -> Result<f64, ShapeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::InvalidDimension {
            shape,
            dimension,
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for bad in [0.0, -1.0, -0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = check_dimension(ShapeKind::Circle, "radius", bad);
            assert!(result.is_err(), "expected rejection of {bad}");
        }
    }

    #[test]
    fn accepts_positive_finite() {
        assert_eq!(check_dimension(ShapeKind::Square, "side", 2.5), Ok(2.5));
        assert_eq!(
            check_dimension(ShapeKind::Rectangle, "width", f64::MIN_POSITIVE),
            Ok(f64::MIN_POSITIVE)
        );
    }

    #[test]
    fn error_message_names_shape_and_dimension() {
        let err = check_dimension(ShapeKind::Rectangle, "length", -5.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("length"), "message was: {msg}");
        assert!(msg.contains("rectangle"), "message was: {msg}");
        assert!(msg.contains("-5"), "message was: {msg}");
    }
}
