//! Square: a rectangle constrained to equal sides.

use std::fmt;

use crate::error::{ShapeError, check_dimension};

use super::{Rectangle, Shape, ShapeKind};

/// A square, modeled as a [`Rectangle`] it owns and constrains.
///
/// Only a single `side` dimension is exposed; [`Square::set_side`] writes
/// both underlying dimensions in one update, so `length == width == side`
/// holds at all times and `area == side²`. The area formula itself is the
/// rectangle's, applied with equal operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    inner: Rectangle,
}

impl Square {
    /// Create a square, with the same failure condition as
    /// [`Rectangle::new`] when `side <= 0` or non-finite.
    pub fn new(side: f64, name: impl Into<String>) -> Result<Self, ShapeError> {
        // Validate under the square's own kind so the error names it.
        let side = check_dimension(ShapeKind::Square, "side", side)?;
        let inner = Rectangle::new(side, side, name)?;
        Ok(Self { inner })
    }

    pub fn side(&self) -> f64 {
        self.inner.length()
    }

    /// Set the side, updating both underlying dimensions atomically and
    /// recomputing the area. On error the square is left unchanged.
    pub fn set_side(&mut self, side: f64) -> Result<(), ShapeError> {
        let side = check_dimension(ShapeKind::Square, "side", side)?;
        self.inner.set_dimensions(side, side)
    }

    /// The underlying length; always equal to [`Square::side`].
    pub fn length(&self) -> f64 {
        self.inner.length()
    }

    /// The underlying width; always equal to [`Square::side`].
    pub fn width(&self) -> f64 {
        self.inner.width()
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn set_name(&mut self, name: &str) {
        self.inner.set_name(name);
    }

    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn compute_area(&mut self) -> f64 {
        self.inner.compute_area()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shows `side`, not length/width.
        write!(
            f,
            "{}: side={} area={:.5}",
            self.name(),
            self.side(),
            self.area()
        )
    }
}
