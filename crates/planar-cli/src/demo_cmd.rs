//! `planar demo` command: polymorphic iteration over a heterogeneous shape
//! list, followed by the dimension-doubling walkthrough.

use anyhow::{Context, Result};

use planar_core::{Circle, Rectangle, Shape, ShapeRecord, Square};

/// Build the demo shape list.
pub fn demo_shapes() -> Result<Vec<Box<dyn Shape>>> {
    Ok(vec![
        Box::new(Circle::new(0.0, 0.0, 4.0, "Circle_1")?),
        Box::new(Circle::new(1.0, 1.0, 9.0, "Circle_2")?),
        Box::new(Rectangle::new(10.0, 20.0, "Rectangle_1")?),
        Box::new(Rectangle::new(20.0, 30.0, "Rectangle_2")?),
        Box::new(Square::new(10.0, "Square")?),
    ])
}

/// Run the demo command.
pub fn run_demo(json: bool) -> Result<()> {
    let shapes = demo_shapes().context("failed to build demo shapes")?;
    tracing::debug!(count = shapes.len(), "built demo shape list");

    if json {
        let records: Vec<ShapeRecord> = shapes
            .iter()
            .map(|s| ShapeRecord::from_shape(s.as_ref()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("--- Polymorphism check ---");
    for shape in &shapes {
        println!("{} Area = {:.5}", shape.name(), shape.area());
    }

    println!();
    println!("--- Getter/setter check ---");

    // Circle: double the radius.
    let mut circle = Circle::new(0.0, 0.0, 4.0, "Circle_1")?;
    println!(
        "{} Current:  {} {:.5}",
        circle.name(),
        circle.radius(),
        circle.area()
    );
    let doubled = circle.radius() * 2.0;
    circle.set_radius(doubled)?;
    println!(
        "{} Doubled:  {} {:.5}",
        circle.name(),
        circle.radius(),
        circle.area()
    );

    println!();

    // Rectangle: double length and width.
    let mut rect = Rectangle::new(10.0, 20.0, "Rectangle_1")?;
    println!(
        "{} Current:  {} {} {:.0}",
        rect.name(),
        rect.length(),
        rect.width(),
        rect.area()
    );
    let (l, w) = (rect.length() * 2.0, rect.width() * 2.0);
    rect.set_length(l)?;
    rect.set_width(w)?;
    println!(
        "{} Doubled:  {} {} {:.0}",
        rect.name(),
        rect.length(),
        rect.width(),
        rect.area()
    );

    println!();

    // Square: double the side.
    let mut sq = Square::new(10.0, "Square")?;
    println!("{} Current:  {} {:.0}", sq.name(), sq.side(), sq.area());
    let side = sq.side() * 2.0;
    sq.set_side(side)?;
    println!("{} Doubled:  {} {:.0}", sq.name(), sq.side(), sq.area());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_list_has_the_expected_shapes() {
        let shapes = demo_shapes().expect("demo shapes are valid");
        let names: Vec<&str> = shapes.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["Circle_1", "Circle_2", "Rectangle_1", "Rectangle_2", "Square"]
        );
    }

    #[test]
    fn demo_records_serialize() {
        let shapes = demo_shapes().expect("demo shapes are valid");
        let records: Vec<ShapeRecord> = shapes
            .iter()
            .map(|s| ShapeRecord::from_shape(s.as_ref()))
            .collect();
        let json = serde_json::to_string(&records).expect("serialize");
        assert!(json.contains("Rectangle_1"));
        assert!(json.contains(r#""kind":"circle""#));
    }
}
