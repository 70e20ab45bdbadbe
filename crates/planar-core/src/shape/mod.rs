//! The shape hierarchy: a polymorphic [`Shape`] capability and its three
//! concrete implementers.
//!
//! Every shape keeps a derived `area` field that is recomputed as part of the
//! same call that mutates a dimension, so a caller can never observe an area
//! that is stale relative to the last-set dimension.

pub mod circle;
pub mod rectangle;
pub mod square;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;

/// The polymorphic capability shared by all shapes.
///
/// Implementers guarantee that [`Shape::area`] is always the mathematically
/// correct area for the shape's current dimensions. [`Shape::compute_area`]
/// is idempotent: calling it twice without mutating dimensions yields the
/// same value.
pub trait Shape {
    /// Which concrete shape this is.
    fn kind(&self) -> ShapeKind;

    /// The shape's display name.
    fn name(&self) -> &str;

    /// Rename the shape. Renaming never affects the area.
    fn set_name(&mut self, name: &str);

    /// The stored area, kept consistent with the current dimensions.
    fn area(&self) -> f64;

    /// Recompute the area from the current dimensions, store it, and return
    /// it. Dimension-mutating setters call this before they return.
    fn compute_area(&mut self) -> f64;
}

/// Flat, serializable projection of any shape: name, kind, and area.
///
/// This is what machine-readable consumers (e.g. `planar demo --json`) see;
/// it deliberately omits per-shape dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub name: String,
    pub kind: ShapeKind,
    pub area: f64,
}

impl ShapeRecord {
    /// Project a shape into a record via the `Shape` capability.
    pub fn from_shape(shape: &dyn Shape) -> Self {
        Self {
            name: shape.name().to_owned(),
            kind: shape.kind(),
            area: shape.area(),
        }
    }
}

/// The concrete shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
        };
        f.write_str(s)
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "rectangle" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            other => Err(ShapeKindParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`ShapeKind`] string.
#[derive(Debug, Clone)]
pub struct ShapeKindParseError(pub String);

impl fmt::Display for ShapeKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape kind: {:?} (expected circle, rectangle, or square)",
            self.0
        )
    }
}

impl std::error::Error for ShapeKindParseError {}
