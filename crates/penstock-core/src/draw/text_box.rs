//! Rounded rectangles holding lines of classified text.

use std::rc::Rc;

use log::debug;
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    draw::{BoxStyle, Drawable},
    geometry::{Bounds, Origin, Point, Size},
    text::{self, Role},
};

/// A rounded rectangle wrapped around a block of text.
///
/// The box measures its text with the deterministic character metrics from
/// [`text::measure`] and resolves its final rectangle position from the
/// anchor and [`Origin`] at construction time. The measured size never
/// changes afterwards; only the *drawn* width can be widened with
/// [`set_drawn_width`](TextBox::set_drawn_width) so that stacked boxes can
/// present a uniform column without disturbing each other's placement.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use penstock_core::draw::{BoxStyle, TextBox};
/// # use penstock_core::geometry::{Origin, Point};
/// let style = Rc::new(BoxStyle::default());
/// let text_box = TextBox::new("kind: VBM\n", Point::new(10.0, 177.0), Origin::CenterLeft, style);
///
/// assert_eq!(text_box.rect_pos().x(), 10.0);
/// assert_eq!(text_box.drawn_width(), text_box.size().width());
/// ```
#[derive(Debug, Clone)]
pub struct TextBox {
    content: String,
    style: Rc<BoxStyle>,
    rect_pos: Point,
    size: Size,
    drawn_width: f32,
}

impl TextBox {
    /// Creates a text box anchored at `anchor` according to `origin`.
    pub fn new(
        content: impl Into<String>,
        anchor: Point,
        origin: Origin,
        style: Rc<BoxStyle>,
    ) -> Self {
        let content = content.into();
        let size = text::measure(&content, style.font_size(), style.width_ratio());
        let rect_pos = origin.resolve(anchor, size);

        debug!(
            x = rect_pos.x(),
            y = rect_pos.y(),
            width = size.width(),
            height = size.height();
            "placed text box"
        );

        Self {
            content,
            style,
            rect_pos,
            size,
            drawn_width: size.width(),
        }
    }

    /// Returns the text content of the box
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the top-left corner of the rectangle
    pub fn rect_pos(&self) -> Point {
        self.rect_pos
    }

    /// Returns the measured size of the box.
    ///
    /// This is the size derived from the text metrics and is what layout
    /// uses for placement. It is unaffected by
    /// [`set_drawn_width`](TextBox::set_drawn_width).
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the width the rectangle is rendered with
    pub fn drawn_width(&self) -> f32 {
        self.drawn_width
    }

    /// Widens the rendered rectangle without moving the box.
    ///
    /// Connector endpoints and bounds follow the drawn width, so callers
    /// must finish all width adjustments before creating connectors that
    /// leave this box.
    pub fn set_drawn_width(&mut self, width: f32) {
        self.drawn_width = width;
    }

    /// Returns the size the rectangle is rendered with
    pub fn drawn_size(&self) -> Size {
        Size::new(self.drawn_width, self.size.height())
    }

    /// Returns the midpoint of the left edge, where incoming connectors attach
    pub fn left_middle(&self) -> Point {
        Point::new(
            self.rect_pos.x(),
            self.rect_pos.y() + self.size.height() / 2.0,
        )
    }

    /// Returns the midpoint of the right edge, where outgoing connectors attach.
    ///
    /// The x-coordinate follows the drawn width, not the measured width.
    pub fn right_middle(&self) -> Point {
        Point::new(
            self.rect_pos.x() + self.drawn_width,
            self.rect_pos.y() + self.size.height() / 2.0,
        )
    }

    fn render_line(&self, index: usize, line: &str) -> svg_element::Text {
        let font_size = self.style.font_size();
        // Text insets inside the rectangle: one font size horizontally,
        // two vertically down to the first baseline.
        let position = self.rect_pos.add_point(Point::new(
            font_size,
            2.0 * font_size + index as f32 * font_size,
        ));

        let mut element = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("font-size", format!("{font_size}px"));

        for span in self.style.classifier().classify(line) {
            let mut tspan = svg_element::TSpan::new("");
            match span.role() {
                Role::Key => tspan = tspan.set("fill", self.style.key_color()),
                Role::Value => tspan = tspan.set("fill", self.style.value_color()),
                Role::Plain => {}
            }
            element = element.add(tspan.add(SvgText::new(span.text())));
        }

        element
    }
}

impl Drawable for TextBox {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let rect = svg_element::Rectangle::new()
            .set("x", self.rect_pos.x())
            .set("y", self.rect_pos.y())
            .set("width", self.drawn_width)
            .set("height", self.size.height())
            .set("fill", self.style.fill())
            .set("stroke", "black")
            .set("fill-opacity", self.style.opacity())
            .set("rx", 10)
            .set("ry", 10);

        let mut group = svg_element::Group::new().add(rect);
        for (index, line) in self.content.split('\n').enumerate() {
            group = group.add(self.render_line(index, line));
        }

        Box::new(group)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.rect_pos, self.drawn_size())
    }
}
