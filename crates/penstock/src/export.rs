//! SVG assembly.

use log::debug;
use svg::Document;

use penstock_core::draw::Drawable;

use crate::layout::Layout;

/// Assemble the SVG document for a finished layout.
///
/// The document declares the viewport size and `viewBox`, then carries
/// every box group followed by every connector line, so connectors are
/// painted on top of the boxes they touch.
pub(crate) fn render_document(layout: &Layout) -> Document {
    let viewport = layout.viewport();
    let mut document = Document::new()
        .set("viewBox", viewport.view_box_attribute())
        .set("width", viewport.width())
        .set("height", viewport.height());

    for text_box in layout.boxes() {
        document = document.add(text_box.render_to_svg());
    }
    for connector in layout.connectors() {
        document = document.add(connector.render_to_svg());
    }

    debug!(
        boxes = layout.boxes().len(),
        connectors = layout.connectors().len();
        "assembled SVG document"
    );
    document
}
