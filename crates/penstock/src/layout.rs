//! Pipeline layout engine.
//!
//! The [`Engine`] walks a parsed pipeline document left to right:
//! datagrabber, optional preprocess, the marker fan-out and finally the
//! storage box, with straight connector lines between the stages. All
//! horizontal gaps come from one budget, a configured fraction of the
//! canvas width.

mod fanout;

use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use penstock_core::draw::{BoxStyle, Connector, Drawable, TextBox};
use penstock_core::geometry::{Bounds, Origin, Point, Size};
use penstock_core::text::LineClassifier;

use crate::config::{CanvasPolicy, ConfigError, StyleConfig, Unit};
use crate::document::{DocumentError, PipelineSpec};

/// X position of the first box.
const LEFT_MARGIN: f32 = 10.0;
/// Share of the gap budget spent left of the preprocess box.
const PREPROCESS_GAP_SHARE: f32 = 0.3;
/// Glyph width ratio for the storage box.
const STORAGE_WIDTH_RATIO: f32 = 0.5;
/// Breathing room around the content when the viewport fits itself.
const AUTO_MARGIN: f32 = 10.0;

/// Errors from turning a document into geometry.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("pipeline has no markers to draw")]
    NoMarkers,
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Declared size and user-space window of the finished diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: String,
    height: String,
    view_box: Bounds,
}

impl Viewport {
    fn fixed(width: f32, height: f32, unit: Unit) -> Self {
        let size = Size::new(width, height).scale(unit.scale());
        Self {
            width: format!("{width}{}", unit.suffix()),
            height: format!("{height}{}", unit.suffix()),
            view_box: Bounds::new_from_top_left(Point::new(0.0, 0.0), size),
        }
    }

    fn fit(content: Bounds) -> Self {
        let view_box = content.expand(AUTO_MARGIN);
        Self {
            width: format!("{}px", view_box.width()),
            height: format!("{}px", view_box.height()),
            view_box,
        }
    }

    /// Declared width, unit suffix included.
    pub fn width(&self) -> &str {
        &self.width
    }

    /// Declared height, unit suffix included.
    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn view_box(&self) -> Bounds {
        self.view_box
    }

    /// Value for the SVG `viewBox` attribute.
    pub fn view_box_attribute(&self) -> String {
        format!(
            "{} {} {} {}",
            self.view_box.min_x(),
            self.view_box.min_y(),
            self.view_box.width(),
            self.view_box.height()
        )
    }
}

/// A fully placed diagram.
///
/// Boxes are in pipeline order: datagrabber, preprocess when present,
/// markers in document order, storage. Connectors come last in creation
/// order and already point at final box edges.
#[derive(Debug, Clone)]
pub struct Layout {
    boxes: Vec<TextBox>,
    connectors: Vec<Connector>,
    viewport: Viewport,
}

impl Layout {
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

/// Turns parsed pipeline documents into diagram geometry.
#[derive(Debug)]
pub struct Engine {
    config: StyleConfig,
    style: Rc<BoxStyle>,
}

impl Engine {
    /// Validate the configuration and prepare the shared box style.
    pub fn new(config: &StyleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut style = BoxStyle::new();
        style.set_font_size(config.font_size());
        style.set_fill(config.box_color());
        style.set_opacity(config.opacity());
        style.set_key_color(config.key_color());
        style.set_value_color(config.value_color());

        Ok(Self {
            config: config.clone(),
            style: Rc::new(style),
        })
    }

    /// Swap the classifier used to color box text lines.
    pub fn set_classifier(&mut self, classifier: Rc<dyn LineClassifier>) {
        Rc::make_mut(&mut self.style).set_classifier(classifier);
    }

    /// Place every stage of the pipeline and wire up the connectors.
    pub fn calculate(&self, spec: &PipelineSpec) -> Result<Layout, LayoutError> {
        if spec.markers().is_empty() {
            return Err(LayoutError::NoMarkers);
        }

        let canvas = Size::new(self.config.canvas_width(), self.config.canvas_height())
            .scale(self.config.unit().scale());
        let center_y = match self.config.canvas_policy() {
            CanvasPolicy::Fixed => canvas.height() / 2.0,
            CanvasPolicy::Auto => 0.0,
        };
        let gap_budget = canvas.width() * self.config.horizontal_space();
        let preprocess_gap = gap_budget * PREPROCESS_GAP_SHARE;
        let marker_gap = gap_budget - preprocess_gap;

        info!(
            markers = spec.markers().len(),
            preprocess = spec.preprocess().is_some();
            "calculating pipeline layout"
        );

        let mut connectors: Vec<Connector> = Vec::new();

        let datagrabber = TextBox::new(
            spec.datagrabber_text()?,
            Point::new(LEFT_MARGIN, center_y),
            Origin::CenterLeft,
            self.style.clone(),
        );

        let preprocess = match spec.preprocess_text()? {
            Some(text) => {
                let anchor = Point::new(
                    datagrabber.rect_pos().x() + datagrabber.size().width() + preprocess_gap,
                    center_y,
                );
                let placed = TextBox::new(text, anchor, Origin::CenterLeft, self.style.clone());
                connectors.push(Connector::between(&datagrabber, &placed));
                Some(placed)
            }
            None => None,
        };

        // markers fan out after the last box on the center line
        let reference = preprocess.as_ref().unwrap_or(&datagrabber);
        let marker_x = reference.rect_pos().x() + reference.size().width() + marker_gap;
        let (mut markers, widest) = fanout::fan_out(
            spec.marker_texts()?,
            marker_x,
            center_y,
            self.config.marker_padding(),
            &self.style,
        );

        let storage = TextBox::new(
            spec.storage_text(self.config.storage_path_max_length())?,
            Point::new(marker_x + widest + marker_gap, center_y),
            Origin::CenterLeft,
            self.storage_style(),
        );

        // widths first, connectors second, so every line meets a final edge
        for marker in &mut markers {
            marker.set_drawn_width(widest);
        }
        for marker in &markers {
            connectors.push(Connector::between(reference, marker));
        }
        for marker in &markers {
            connectors.push(Connector::between(marker, &storage));
        }

        let mut boxes = Vec::with_capacity(markers.len() + 3);
        boxes.push(datagrabber);
        if let Some(preprocess) = preprocess {
            boxes.push(preprocess);
        }
        boxes.extend(markers);
        boxes.push(storage);

        let viewport = self.viewport(&boxes);
        debug!(boxes = boxes.len(), connectors = connectors.len(); "pipeline layout complete");

        Ok(Layout {
            boxes,
            connectors,
            viewport,
        })
    }

    fn storage_style(&self) -> Rc<BoxStyle> {
        let mut style = (*self.style).clone();
        style.set_width_ratio(STORAGE_WIDTH_RATIO);
        Rc::new(style)
    }

    fn viewport(&self, boxes: &[TextBox]) -> Viewport {
        match self.config.canvas_policy() {
            CanvasPolicy::Fixed => Viewport::fixed(
                self.config.canvas_width(),
                self.config.canvas_height(),
                self.config.unit(),
            ),
            CanvasPolicy::Auto => {
                let content = boxes
                    .iter()
                    .map(|b| b.bounds())
                    .reduce(|merged, bounds| merged.merge(&bounds))
                    .unwrap_or_else(|| {
                        Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(0.0, 0.0))
                    });
                Viewport::fit(content)
            }
        }
    }
}
