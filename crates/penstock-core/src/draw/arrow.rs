//! Standalone arrow glyphs.

use std::str::FromStr;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{DrawError, Drawable},
    geometry::{Bounds, Point, Size},
};

/// The direction an arrow points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Right,
    Left,
    Up,
    Down,
}

impl Default for ArrowDirection {
    fn default() -> Self {
        Self::Right
    }
}

impl std::fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ArrowDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err("Invalid arrow direction"),
        }
    }
}

/// A horizontal arrow glyph made of a shaft and two head strokes.
///
/// Only [`ArrowDirection::Right`] is drawable; requesting any other
/// direction fails at construction so an unsupported diagram never renders
/// with a silently wrong glyph.
///
/// # Examples
///
/// ```
/// # use penstock_core::draw::{Arrow, ArrowDirection};
/// # use penstock_core::geometry::Point;
/// let arrow = Arrow::new(Point::new(0.0, 10.0), ArrowDirection::Right).unwrap();
/// assert_eq!(arrow.length(), 40.0);
///
/// assert!(Arrow::new(Point::new(0.0, 10.0), ArrowDirection::Left).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Arrow {
    position: Point,
    direction: ArrowDirection,
    length: f32,
    thickness: f32,
    color: Color,
}

impl Arrow {
    /// Creates an arrow starting at `position` and pointing in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnsupportedArrowDirection`] for any direction
    /// other than [`ArrowDirection::Right`].
    pub fn new(position: Point, direction: ArrowDirection) -> Result<Self, DrawError> {
        if direction != ArrowDirection::Right {
            return Err(DrawError::UnsupportedArrowDirection(direction));
        }

        Ok(Self {
            position,
            direction,
            length: 40.0,
            thickness: 0.9,
            color: Color::default(),
        })
    }

    /// Returns the start position of the shaft
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the direction the arrow points in
    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }

    /// Returns the shaft length
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Returns the stroke width of the shaft and head strokes
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Returns the stroke color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the arrow with the given shaft length
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    /// Returns the arrow with the given stroke width
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Returns the arrow with the given stroke color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn stroke_line(&self, from: Point, to: Point) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y())
            .set("stroke", &self.color)
            .set("stroke-width", self.thickness)
    }
}

impl Drawable for Arrow {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let (x, y) = (self.position.x(), self.position.y());
        let tip = Point::new(x + self.length - 0.3, y);
        let barb_x = x + self.length - 5.0;

        let group = svg_element::Group::new()
            .add(self.stroke_line(self.position, Point::new(x + self.length, y)))
            .add(self.stroke_line(tip, Point::new(barb_x, y + 5.0)))
            .add(self.stroke_line(tip, Point::new(barb_x, y - 5.0)));

        Box::new(group)
    }

    fn bounds(&self) -> Bounds {
        let (x, y) = (self.position.x(), self.position.y());
        let min_x = x.min(x + self.length - 5.0);

        Bounds::new_from_top_left(
            Point::new(min_x, y - 5.0),
            Size::new(x + self.length - min_x, 10.0),
        )
    }
}
