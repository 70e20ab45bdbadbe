//! Core shape hierarchy for `planar`.
//!
//! Three concrete shapes (circle, rectangle, square) share the [`Shape`]
//! capability: a name, a kind, and a derived `area` that every
//! dimension-mutating setter recomputes before returning. Dimension values
//! are validated up front (finite and strictly positive); a failed
//! constructor or setter never leaves a partially-updated shape behind.
//!
//! The types here are plain single-owner values with no internal locking.
//! Callers sharing a shape across threads must synchronize externally.

pub mod error;
pub mod shape;

pub use error::ShapeError;
pub use shape::{Circle, Rectangle, Shape, ShapeKind, ShapeRecord, Square};
