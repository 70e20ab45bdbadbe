//! Circle: center coordinates plus a validated radius.

use std::f64::consts::PI;
use std::fmt;

use crate::error::{ShapeError, check_dimension};

use super::{Shape, ShapeKind};

/// A circle positioned by its center, with area `π · radius²`.
///
/// The center coordinates are plain mutable fields; only the radius
/// participates in area recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    name: String,
    center_x: f64,
    center_y: f64,
    radius: f64,
    area: f64,
}

impl Circle {
    /// Create a circle, validating `radius > 0` and computing the area
    /// immediately.
    pub fn new(
        center_x: f64,
        center_y: f64,
        radius: f64,
        name: impl Into<String>,
    ) -> Result<Self, ShapeError> {
        let radius = check_dimension(ShapeKind::Circle, "radius", radius)?;
        let mut circle = Self {
            name: name.into(),
            center_x,
            center_y,
            radius,
            area: 0.0,
        };
        circle.compute_area();
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius and recompute the area in the same call.
    ///
    /// On error the circle is left exactly as it was.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = check_dimension(ShapeKind::Circle, "radius", radius)?;
        self.compute_area();
        Ok(())
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Move the center horizontally. No recomputation: area does not depend
    /// on position.
    pub fn set_center_x(&mut self, x: f64) {
        self.center_x = x;
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Move the center vertically. No recomputation.
    pub fn set_center_y(&mut self, y: f64) {
        self.center_y = y;
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
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
        self.area = PI * self.radius * self.radius;
        self.area
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: center=({}, {}) radius={} area={:.5}",
            self.name, self.center_x, self.center_y, self.radius, self.area
        )
    }
}
