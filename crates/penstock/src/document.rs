//! Pipeline document model.
//!
//! A pipeline document is a YAML mapping with a `datagrabber` stage, an
//! optional `preprocess` stage, a non-empty `markers` list and a `storage`
//! stage. Each stage is kept as a raw [`Mapping`] rather than a typed
//! struct: the renderer never interprets stage contents, it only re-emits
//! them as the text shown inside the diagram boxes.

use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use penstock_core::text;

/// Errors from parsing or re-serializing a pipeline document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid pipeline document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("cannot serialize the `{stage}` stage: {source}")]
    Serialize {
        stage: &'static str,
        source: serde_yaml::Error,
    },
    #[error("storage has no `uri` string to shorten")]
    MissingUri,
}

impl DocumentError {
    /// Byte offset of a parse failure in the source, when the parser knows it.
    pub fn location_index(&self) -> Option<usize> {
        match self {
            DocumentError::Parse(err) => err.location().map(|location| location.index()),
            _ => None,
        }
    }
}

/// A parsed pipeline document.
///
/// Unknown top-level keys are ignored, so documents carrying extra
/// orchestration sections still render.
///
/// ```
/// use penstock::document::PipelineSpec;
///
/// let spec: PipelineSpec = "\
/// datagrabber:
///   kind: PatternDataladDataGrabber
/// markers:
///   - name: gmd
/// storage:
///   uri: /tmp/out.hdf5
/// "
/// .parse()
/// .expect("valid pipeline document");
///
/// assert_eq!(spec.markers().len(), 1);
/// assert!(spec.preprocess().is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSpec {
    datagrabber: Mapping,
    #[serde(default)]
    preprocess: Option<Mapping>,
    markers: Vec<Mapping>,
    storage: Mapping,
}

impl FromStr for PipelineSpec {
    type Err = DocumentError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl PipelineSpec {
    pub fn datagrabber(&self) -> &Mapping {
        &self.datagrabber
    }

    pub fn preprocess(&self) -> Option<&Mapping> {
        self.preprocess.as_ref()
    }

    pub fn markers(&self) -> &[Mapping] {
        &self.markers
    }

    pub fn storage(&self) -> &Mapping {
        &self.storage
    }

    /// Box text for the datagrabber stage.
    pub fn datagrabber_text(&self) -> Result<String, DocumentError> {
        stage_text("datagrabber", &self.datagrabber)
    }

    /// Box text for the preprocess stage, if the document has one.
    pub fn preprocess_text(&self) -> Result<Option<String>, DocumentError> {
        self.preprocess
            .as_ref()
            .map(|stage| stage_text("preprocess", stage))
            .transpose()
    }

    /// Box texts for the markers, in document order.
    pub fn marker_texts(&self) -> Result<Vec<String>, DocumentError> {
        self.markers
            .iter()
            .map(|stage| stage_text("markers", stage))
            .collect()
    }

    /// Box text for the storage stage.
    ///
    /// With `max_uri_length` set, the `uri` value is shortened to exactly
    /// that many characters by cutting out the middle of the path. The
    /// document itself is left untouched. A limit without a string `uri`
    /// in the stage is an error.
    pub fn storage_text(&self, max_uri_length: Option<usize>) -> Result<String, DocumentError> {
        let Some(max_length) = max_uri_length else {
            return stage_text("storage", &self.storage);
        };

        let mut storage = self.storage.clone();
        let uri = storage.get_mut("uri").ok_or(DocumentError::MissingUri)?;
        let shortened = match uri.as_str() {
            Some(path) => text::truncate_middle(path, max_length).into_owned(),
            None => return Err(DocumentError::MissingUri),
        };
        *uri = Value::String(shortened);
        stage_text("storage", &storage)
    }
}

/// Serialize one stage back to YAML, one key per line, keys in document order.
fn stage_text(stage: &'static str, value: &Mapping) -> Result<String, DocumentError> {
    serde_yaml::to_string(value).map_err(|source| DocumentError::Serialize { stage, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = "\
datagrabber:
  kind: PatternDataladDataGrabber
  types:
    - T1w
preprocess:
  kind: fMRIPrepConfoundRemover
markers:
  - name: gmd
    kind: ParcelAggregation
  - name: fc
    kind: FunctionalConnectivity
storage:
  kind: HDF5FeatureStorage
  uri: /data/projects/study/storage/output.hdf5
";

    fn parsed(source: &str) -> PipelineSpec {
        source.parse().expect("document should parse")
    }

    #[test]
    fn parses_every_stage() {
        let spec = parsed(FULL_DOCUMENT);
        assert_eq!(spec.markers().len(), 2);
        assert!(spec.preprocess().is_some());
        assert!(spec.datagrabber().get("kind").is_some());
        assert!(spec.storage().get("uri").is_some());
    }

    #[test]
    fn preprocess_is_optional() {
        let spec = parsed(
            "datagrabber:\n  kind: X\nmarkers:\n  - name: m\nstorage:\n  uri: /tmp/o.hdf5\n",
        );
        assert!(spec.preprocess().is_none());
        assert_eq!(spec.preprocess_text().unwrap(), None);
    }

    #[test]
    fn null_preprocess_counts_as_absent() {
        let spec = parsed(
            "datagrabber:\n  kind: X\npreprocess: null\nmarkers:\n  - name: m\nstorage:\n  uri: /o\n",
        );
        assert!(spec.preprocess().is_none());
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let spec = parsed(
            "workdir: /tmp/wd\ndatagrabber:\n  kind: X\nmarkers:\n  - name: m\nstorage:\n  uri: /o\n",
        );
        assert_eq!(spec.markers().len(), 1);
    }

    #[test]
    fn missing_stage_is_reported_by_name() {
        let err = "datagrabber:\n  kind: X\nstorage:\n  uri: /o\n"
            .parse::<PipelineSpec>()
            .unwrap_err();
        assert!(err.to_string().contains("markers"));
    }

    #[test]
    fn markers_must_be_a_sequence() {
        let err = "datagrabber:\n  kind: X\nmarkers:\n  name: m\nstorage:\n  uri: /o\n"
            .parse::<PipelineSpec>()
            .unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn stage_text_keeps_document_key_order() {
        let spec = parsed(
            "datagrabber:\n  zulu: 1\n  alpha: 2\n  mike: 3\nmarkers:\n  - name: m\nstorage:\n  uri: /o\n",
        );
        let text = spec.datagrabber_text().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["zulu: 1", "alpha: 2", "mike: 3"]);
    }

    #[test]
    fn stage_text_puts_one_pair_per_line() {
        let spec = parsed(FULL_DOCUMENT);
        let text = spec.datagrabber_text().unwrap();
        assert_eq!(text, "kind: PatternDataladDataGrabber\ntypes:\n- T1w\n");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn marker_texts_follow_document_order() {
        let spec = parsed(FULL_DOCUMENT);
        let texts = spec.marker_texts().unwrap();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].starts_with("name: gmd\n"));
        assert!(texts[1].starts_with("name: fc\n"));
    }

    #[test]
    fn storage_text_without_limit_is_verbatim() {
        let spec = parsed(FULL_DOCUMENT);
        let text = spec.storage_text(None).unwrap();
        assert!(text.contains("uri: /data/projects/study/storage/output.hdf5"));
    }

    #[test]
    fn storage_text_shortens_the_uri() {
        let spec = parsed(FULL_DOCUMENT);
        let text = spec.storage_text(Some(20)).unwrap();
        assert!(text.contains("uri: /data/pr...tput.hdf5"));
        // the parsed document keeps the full path
        assert_eq!(
            spec.storage().get("uri").and_then(Value::as_str),
            Some("/data/projects/study/storage/output.hdf5")
        );
    }

    #[test]
    fn storage_limit_requires_a_string_uri() {
        let spec = parsed("datagrabber:\n  kind: X\nmarkers:\n  - name: m\nstorage:\n  kind: S\n");
        assert!(matches!(
            spec.storage_text(Some(20)).unwrap_err(),
            DocumentError::MissingUri
        ));

        let spec = parsed("datagrabber:\n  kind: X\nmarkers:\n  - name: m\nstorage:\n  uri: 42\n");
        assert!(matches!(
            spec.storage_text(Some(20)).unwrap_err(),
            DocumentError::MissingUri
        ));
    }

    #[test]
    fn storage_without_uri_renders_when_no_limit_is_set() {
        let spec = parsed("datagrabber:\n  kind: X\nmarkers:\n  - name: m\nstorage:\n  kind: S\n");
        assert_eq!(spec.storage_text(None).unwrap(), "kind: S\n");
    }
}
