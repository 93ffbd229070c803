//! Straight connector lines between text boxes.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, TextBox},
    geometry::{Bounds, Point, Size},
};

/// A straight line from the right edge of one box to the left edge of another.
///
/// The endpoints are frozen when the connector is created: the start is the
/// source box's [`right_middle`](TextBox::right_middle) and the end is the
/// target box's [`left_middle`](TextBox::left_middle). Because the right
/// edge follows the drawn width, connectors must only be created once both
/// boxes have their final geometry.
#[derive(Debug, Clone)]
pub struct Connector {
    start: Point,
    end: Point,
}

impl Connector {
    /// Creates a connector from box `a` to box `b`
    pub fn between(a: &TextBox, b: &TextBox) -> Self {
        Self {
            start: a.right_middle(),
            end: b.left_middle(),
        }
    }

    /// Returns the start point on the source box's right edge
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point on the target box's left edge
    pub fn end(&self) -> Point {
        self.end
    }
}

impl Drawable for Connector {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .set("stroke", "black");

        Box::new(line)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(
                self.start.x().min(self.end.x()),
                self.start.y().min(self.end.y()),
            ),
            Size::new(
                (self.end.x() - self.start.x()).abs(),
                (self.end.y() - self.start.y()).abs(),
            ),
        )
    }
}
