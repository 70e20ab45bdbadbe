//! `planar area` command: construct one shape from CLI arguments and report
//! its name and area.

use anyhow::{Context, Result};

use planar_core::{Circle, Rectangle, Shape, ShapeRecord, Square};

use crate::AreaCommands;

/// Run the area command for the given shape arguments.
pub fn run_area(shape: AreaCommands, json: bool) -> Result<()> {
    let shape = build_shape(shape)?;
    tracing::debug!(kind = %shape.kind(), name = shape.name(), "constructed shape");

    if json {
        let record = ShapeRecord::from_shape(shape.as_ref());
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{} Area = {:.5}", shape.name(), shape.area());
    }
    Ok(())
}

/// Construct the requested shape, attaching context to dimension errors.
fn build_shape(shape: AreaCommands) -> Result<Box<dyn Shape>> {
    let shape: Box<dyn Shape> = match shape {
        AreaCommands::Circle { radius, x, y, name } => Box::new(
            Circle::new(x, y, radius, name).context("cannot construct circle")?,
        ),
        AreaCommands::Rectangle {
            length,
            width,
            name,
        } => Box::new(Rectangle::new(length, width, name).context("cannot construct rectangle")?),
        AreaCommands::Square { side, name } => {
            Box::new(Square::new(side, name).context("cannot construct square")?)
        }
    };
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_shape_kind() {
        let circle = build_shape(AreaCommands::Circle {
            radius: 4.0,
            x: 0.0,
            y: 0.0,
            name: "c".into(),
        })
        .expect("valid circle");
        assert!((circle.area() - 50.26548245743669).abs() < 1e-9);

        let rect = build_shape(AreaCommands::Rectangle {
            length: 10.0,
            width: 20.0,
            name: "r".into(),
        })
        .expect("valid rectangle");
        assert_eq!(rect.area(), 200.0);

        let square = build_shape(AreaCommands::Square {
            side: 10.0,
            name: "s".into(),
        })
        .expect("valid square");
        assert_eq!(square.area(), 100.0);
    }

    #[test]
    fn invalid_dimension_surfaces_as_error() {
        let result = build_shape(AreaCommands::Rectangle {
            length: -5.0,
            width: 10.0,
            name: "Bad".into(),
        });
        assert!(result.is_err());
    }
}
