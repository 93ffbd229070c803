//! Shared visual configuration for text boxes.

use std::rc::Rc;

use crate::{
    color::Color,
    text::{LineClassifier, YamlClassifier},
};

/// Defines the visual style for [`TextBox`](crate::draw::TextBox) elements.
///
/// One `BoxStyle` is typically built from the resolved configuration and
/// shared by every box in a diagram via `Rc`; the storage box clones it with
/// a smaller width ratio because path text packs narrow characters.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `9.0` |
/// | Width ratio | `0.65` |
/// | Fill | `mistyrose` |
/// | Fill opacity | `0.3` |
/// | Key color | `darkgreen` |
/// | Value color | `navy` |
/// | Classifier | [`YamlClassifier`] |
#[derive(Debug, Clone)]
pub struct BoxStyle {
    font_size: f32,
    width_ratio: f32,
    fill: Color,
    opacity: f32,
    key_color: Color,
    value_color: Color,
    classifier: Rc<dyn LineClassifier>,
}

impl BoxStyle {
    /// Creates a new box style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font size in pixels
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the character width to font size ratio
    pub fn width_ratio(&self) -> f32 {
        self.width_ratio
    }

    /// Returns the background fill color of the box
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the fill opacity of the box background
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the color used for key spans
    pub fn key_color(&self) -> &Color {
        &self.key_color
    }

    /// Returns the color used for value spans
    pub fn value_color(&self) -> &Color {
        &self.value_color
    }

    /// Returns the classifier that splits text lines into colorable spans
    pub fn classifier(&self) -> &dyn LineClassifier {
        self.classifier.as_ref()
    }

    /// Sets the font size in pixels
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Sets the character width to font size ratio.
    ///
    /// Lower ratios model denser text. Storage paths use `0.5` while regular
    /// YAML text uses `0.65`.
    pub fn set_width_ratio(&mut self, width_ratio: f32) {
        self.width_ratio = width_ratio;
    }

    /// Sets the background fill color of the box
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Sets the fill opacity of the box background
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Sets the color used for key spans
    pub fn set_key_color(&mut self, key_color: Color) {
        self.key_color = key_color;
    }

    /// Sets the color used for value spans
    pub fn set_value_color(&mut self, value_color: Color) {
        self.value_color = value_color;
    }

    /// Replaces the line classifier used when rendering text
    pub fn set_classifier(&mut self, classifier: Rc<dyn LineClassifier>) {
        self.classifier = classifier;
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            width_ratio: 0.65,
            fill: Color::new("mistyrose").expect("'mistyrose' is a valid CSS color"),
            opacity: 0.3,
            key_color: Color::new("darkgreen").expect("'darkgreen' is a valid CSS color"),
            value_color: Color::new("navy").expect("'navy' is a valid CSS color"),
            classifier: Rc::new(YamlClassifier),
        }
    }
}
