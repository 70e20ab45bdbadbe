//! Rectangle: independently settable length and width.

use std::fmt;

use crate::error::{ShapeError, check_dimension};

use super::{Shape, ShapeKind};

/// A rectangle with area `length · width`.
///
/// Each dimension setter validates its value, updates that one field, and
/// recomputes the area before returning; the other dimension is untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    name: String,
    length: f64,
    width: f64,
    area: f64,
}

impl Rectangle {
    /// Create a rectangle, validating both dimensions before committing
    /// either. A failed call never yields a partially-constructed value.
    pub fn new(length: f64, width: f64, name: impl Into<String>) -> Result<Self, ShapeError> {
        let length = check_dimension(ShapeKind::Rectangle, "length", length)?;
        let width = check_dimension(ShapeKind::Rectangle, "width", width)?;
        let mut rect = Self {
            name: name.into(),
            length,
            width,
            area: 0.0,
        };
        rect.compute_area();
        Ok(rect)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Set the length and recompute the area; the width is untouched.
    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = check_dimension(ShapeKind::Rectangle, "length", length)?;
        self.compute_area();
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width and recompute the area; the length is untouched.
    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.width = check_dimension(ShapeKind::Rectangle, "width", width)?;
        self.compute_area();
        Ok(())
    }

    /// Write both dimensions as a single update, validating first.
    ///
    /// Used by [`super::Square`] so a square is never observable with
    /// `length != width`, even transiently across two setter calls.
    pub(crate) fn set_dimensions(&mut self, length: f64, width: f64) -> Result<(), ShapeError> {
        let length = check_dimension(ShapeKind::Rectangle, "length", length)?;
        let width = check_dimension(ShapeKind::Rectangle, "width", width)?;
        self.length = length;
        self.width = width;
        self.compute_area();
        Ok(())
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn compute_area(&mut self) -> f64 {
        self.area = self.length * self.width;
        self.area
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: length={} width={} area={:.5}",
            self.name, self.length, self.width, self.area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn area_is_length_times_width() {
        let r = Rectangle::new(10.0, 20.0, "Rectangle_1").expect("valid rectangle");
        assert_eq!(r.area(), 200.0);
    }

    #[test]
    fn setters_recompute_and_leave_other_dimension_alone() {
        let mut r = Rectangle::new(10.0, 20.0, "Rectangle_1").expect("valid rectangle");
        r.set_length(20.0).expect("valid length");
        assert_eq!((r.length(), r.width(), r.area()), (20.0, 20.0, 400.0));
        r.set_width(40.0).expect("valid width");
        assert_eq!((r.length(), r.width(), r.area()), (20.0, 40.0, 800.0));
    }

    #[test]
    fn constructor_rejects_either_bad_dimension() {
        let err = Rectangle::new(-5.0, 10.0, "Bad").unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidDimension {
                dimension: "length",
                ..
            }
        ));
        assert!(Rectangle::new(5.0, 0.0, "Bad").is_err());
        assert!(Rectangle::new(f64::NAN, 10.0, "Bad").is_err());
    }

    #[test]
    fn failed_setter_leaves_state_unchanged() {
        let mut r = Rectangle::new(3.0, 4.0, "r").expect("valid rectangle");
        let before = r.clone();
        assert!(r.set_length(0.0).is_err());
        assert!(r.set_width(f64::NAN).is_err());
        assert_eq!(r, before);
    }

    #[test]
    fn set_dimensions_is_all_or_nothing() {
        let mut r = Rectangle::new(3.0, 4.0, "r").expect("valid rectangle");
        let before = r.clone();
        // Second dimension invalid: the first must not have been committed.
        assert!(r.set_dimensions(5.0, -1.0).is_err());
        assert_eq!(r, before);
        r.set_dimensions(5.0, 6.0).expect("valid dimensions");
        assert_eq!((r.length(), r.width(), r.area()), (5.0, 6.0, 30.0));
    }

    #[test]
    fn compute_area_is_idempotent() {
        let mut r = Rectangle::new(7.0, 2.0, "r").expect("valid rectangle");
        assert_eq!(r.compute_area(), r.compute_area());
    }
}
