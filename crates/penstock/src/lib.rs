//! Penstock - Pipeline diagrams from declarative pipeline documents.
//!
//! Parsing, layout, and SVG rendering for YAML pipeline documents. The
//! stages of a document become rounded text boxes laid out left to right,
//! markers fan out vertically around the pipeline center line, and
//! connector lines tie the stages together.

pub mod config;
pub mod document;
pub mod layout;

mod error;
mod export;

pub use penstock_core::{color, draw, geometry, text};

pub use error::PenstockError;

use std::rc::Rc;

use log::{debug, info, trace};

use penstock_core::text::{LineClassifier, YamlClassifier};

use config::StyleConfig;
use document::PipelineSpec;
use layout::Engine;

/// Builder for parsing and rendering pipeline diagrams.
///
/// This provides an API for processing pipeline documents through the
/// parsing, layout, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use penstock::{DiagramBuilder, config::StyleConfig};
///
/// let source = "\
/// datagrabber:
///   kind: PatternDataladDataGrabber
/// markers:
///   - name: gmd
/// storage:
///   uri: /tmp/out.hdf5
/// ";
///
/// // With custom config
/// let config = StyleConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Parse the document
/// let spec = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render to SVG
/// let svg = builder.render_svg(&spec)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
pub struct DiagramBuilder {
    config: StyleConfig,
    classifier: Rc<dyn LineClassifier>,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved style and canvas settings
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use penstock::{DiagramBuilder, config::StyleConfig};
    ///
    /// let config = StyleConfig::default();
    /// let builder = DiagramBuilder::new(config);
    /// ```
    pub fn new(config: StyleConfig) -> Self {
        Self {
            config,
            classifier: Rc::new(YamlClassifier),
        }
    }

    /// Replace the classifier used to color box text lines.
    ///
    /// The default [`YamlClassifier`] colors `key: value` pairs the way
    /// the documents themselves are written.
    pub fn with_classifier(mut self, classifier: Rc<dyn LineClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Parse a YAML pipeline document.
    ///
    /// # Arguments
    ///
    /// * `source` - Pipeline document text
    ///
    /// # Errors
    ///
    /// Returns `PenstockError` when the document is not valid YAML or is
    /// missing a required stage.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use penstock::{DiagramBuilder, config::StyleConfig};
    ///
    /// let source = "\
    /// datagrabber:
    ///   kind: PatternDataladDataGrabber
    /// markers:
    ///   - name: gmd
    /// storage:
    ///   uri: /tmp/out.hdf5
    /// ";
    /// let builder = DiagramBuilder::new(StyleConfig::default());
    /// let spec = builder.parse(source)
    ///     .expect("Failed to parse pipeline document");
    /// ```
    pub fn parse(&self, source: &str) -> Result<PipelineSpec, PenstockError> {
        info!("Parsing pipeline document");

        let spec: PipelineSpec = source
            .parse()
            .map_err(|err| PenstockError::new_parse_error(err, source))?;

        debug!("Pipeline document parsed successfully");
        trace!(spec:?; "Parsed pipeline");

        Ok(spec)
    }

    /// Render a parsed pipeline document to an SVG string.
    ///
    /// # Arguments
    ///
    /// * `spec` - A parsed pipeline document
    ///
    /// # Errors
    ///
    /// Returns `PenstockError` for configuration or layout errors.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use penstock::{DiagramBuilder, config::StyleConfig};
    ///
    /// let source = "\
    /// datagrabber:
    ///   kind: PatternDataladDataGrabber
    /// markers:
    ///   - name: gmd
    /// storage:
    ///   uri: /tmp/out.hdf5
    /// ";
    /// let builder = DiagramBuilder::new(StyleConfig::default());
    ///
    /// let spec = builder.parse(source)
    ///     .expect("Failed to parse");
    ///
    /// let svg = builder.render_svg(&spec)
    ///     .expect("Failed to render diagram");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, spec: &PipelineSpec) -> Result<String, PenstockError> {
        info!("Building layout engine");
        let mut engine = Engine::new(&self.config)?;
        engine.set_classifier(self.classifier.clone());

        let layout = engine.calculate(spec)?;
        info!(boxes = layout.boxes().len(); "Layout calculated");

        let svg_string = export::render_document(&layout).to_string();

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
