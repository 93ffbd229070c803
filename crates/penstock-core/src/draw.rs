//! Drawable primitives for diagram rendering.
//!
//! This module provides the visual building blocks of a pipeline diagram.
//! All primitives implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to SVG and reporting occupied bounds.
//!
//! Primitives carry their final position from the moment they are
//! constructed; layout decides coordinates, drawing only materializes them.

mod arrow;
mod connector;
mod style;
mod text_box;

pub use arrow::{Arrow, ArrowDirection};
pub use connector::Connector;
pub use style::BoxStyle;
pub use text_box::TextBox;

use thiserror::Error;

use crate::geometry::Bounds;

/// Errors raised while constructing drawable primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// Only right-pointing arrows exist so far; anything else is rejected
    /// when the arrow is created rather than silently drawn wrong.
    #[error("arrow direction `{0}` is not implemented yet, only right-pointing arrows are supported")]
    UnsupportedArrowDirection(ArrowDirection),
}

pub trait Drawable: std::fmt::Debug {
    /// Renders this primitive to an SVG node at its already-resolved position.
    fn render_to_svg(&self) -> Box<dyn svg::Node>;

    /// Returns the rectangle this primitive occupies in diagram coordinates.
    fn bounds(&self) -> Bounds;
}
