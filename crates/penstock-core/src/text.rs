//! Text measurement and formatting utilities.
//!
//! Penstock sizes boxes from character counts instead of rendered font
//! metrics, so identical input always produces identical geometry regardless
//! of which fonts are installed. The trade-off is that the width ratio is an
//! approximation; callers tune it per kind of content (dense path text uses a
//! smaller ratio than prose-like YAML).
//!
//! # Overview
//!
//! - [`measure`] - Deterministic text extent calculation
//! - [`truncate_middle`] - Shorten long paths with a middle ellipsis
//! - [`LineClassifier`] / [`YamlClassifier`] - Split lines into colorable spans

use std::borrow::Cow;

use crate::geometry::Size;

/// Calculates the box extent needed to display `text`.
///
/// The width is the character count of the longest line multiplied by
/// `font_size * width_ratio`. The height reserves one `font_size` per line
/// plus two `font_size` of vertical padding. Lines are produced by splitting
/// on `'\n'`, so a trailing newline contributes one (empty) line to the
/// height, matching how the rendered text reserves room for it.
///
/// # Examples
///
/// ```
/// # use penstock_core::text::measure;
/// let size = measure("kind: VBM\nname: gmd", 7.0, 0.65);
/// assert_eq!(size.width(), 9.0 * 7.0 * 0.65);
/// assert_eq!(size.height(), 2.0 * 7.0 + 2.0 * 7.0);
/// ```
pub fn measure(text: &str, font_size: f32, width_ratio: f32) -> Size {
    let mut line_count = 0usize;
    let mut longest_line = 0usize;
    for line in text.split('\n') {
        line_count += 1;
        longest_line = longest_line.max(line.chars().count());
    }

    Size::new(
        longest_line as f32 * font_size * width_ratio,
        line_count as f32 * font_size + 2.0 * font_size,
    )
}

/// Shortens a path to `max_length` characters by replacing its middle with
/// `"..."`.
///
/// Paths of `max_length` characters or fewer are returned unchanged (and
/// borrowed). Longer paths keep their first `max_length / 2 - 2` characters
/// and as many trailing characters as fit, so the result is always exactly
/// `max_length` characters long. Lengths are counted in characters, not
/// bytes.
///
/// Budgets below 5 cannot hold the ellipsis plus any context and are
/// rejected during configuration before this function runs.
///
/// # Examples
///
/// ```
/// # use penstock_core::text::truncate_middle;
/// assert_eq!(truncate_middle("short", 30), "short");
///
/// let truncated = truncate_middle("/data/projects/study/storage/output.hdf5", 20);
/// assert_eq!(truncated, "/data/pr...tput.hdf5");
/// assert_eq!(truncated.chars().count(), 20);
/// ```
pub fn truncate_middle(path: &str, max_length: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";

    let char_count = path.chars().count();
    if char_count <= max_length {
        return Cow::Borrowed(path);
    }

    let head_len = (max_length / 2).saturating_sub(2);
    let tail_len = max_length.saturating_sub(head_len + ELLIPSIS.len());

    let head: String = path.chars().take(head_len).collect();
    let tail: String = path.chars().skip(char_count - tail_len).collect();

    Cow::Owned(format!("{head}{ELLIPSIS}{tail}"))
}

/// Semantic role of one classified span within a line of box text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A mapping key, rendered in the configured key color
    Key,
    /// A scalar value, rendered in the configured value color
    Value,
    /// Structural text (indentation, separators), rendered in the default color
    Plain,
}

/// A run of characters within a single line that shares one [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    text: &'a str,
    role: Role,
}

impl<'a> Span<'a> {
    /// Creates a new span over the given text with the given role
    pub fn new(text: &'a str, role: Role) -> Self {
        Self { text, role }
    }

    /// Returns the text of the span
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the role of the span
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Splits single lines of box text into spans for colored rendering.
///
/// The classifier only influences text coloring. Box sizes are computed by
/// [`measure`] from the raw text, so a custom classifier can never change
/// the layout.
///
/// Implementations must cover the whole line: the concatenated span texts
/// must equal the input line.
pub trait LineClassifier: std::fmt::Debug {
    /// Splits `line` into spans. The line never contains `'\n'`.
    fn classify<'a>(&self, line: &'a str) -> Vec<Span<'a>>;
}

/// Classifies lines of YAML block output into key, value, and plain spans.
///
/// This is a line-local approximation of YAML highlighting, sufficient for
/// the serializer output rendered into boxes: indentation and sequence
/// dashes are plain, a mapping key up to the colon is a key, and whatever
/// follows the separator is a value.
///
/// # Examples
///
/// ```
/// # use penstock_core::text::{LineClassifier, Role, YamlClassifier};
/// let spans = YamlClassifier.classify("  kind: VBM");
/// let roles: Vec<Role> = spans.iter().map(|s| s.role()).collect();
/// assert_eq!(roles, vec![Role::Plain, Role::Key, Role::Plain, Role::Value]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlClassifier;

impl LineClassifier for YamlClassifier {
    fn classify<'a>(&self, line: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let mut push = |text: &'a str, role: Role| {
            if !text.is_empty() {
                spans.push(Span::new(text, role));
            }
        };

        // Indentation and any sequence dashes form one plain prefix.
        let mut rest = line.trim_start();
        while let Some(stripped) = rest.strip_prefix("- ") {
            rest = stripped.trim_start();
        }
        let prefix_len = line.len() - rest.len();
        push(&line[..prefix_len], Role::Plain);

        if rest.starts_with('#') {
            push(rest, Role::Plain);
        } else if let Some(colon) = rest.find(": ") {
            push(&rest[..colon], Role::Key);
            push(&rest[colon..colon + 2], Role::Plain);
            push(&rest[colon + 2..], Role::Value);
        } else if let Some(key) = rest.strip_suffix(':') {
            push(key, Role::Key);
            push(&rest[rest.len() - 1..], Role::Plain);
        } else {
            push(rest, Role::Value);
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_line() {
        let size = measure("datagrabber", 7.0, 0.65);
        assert_eq!(size.width(), 11.0 * 7.0 * 0.65);
        assert_eq!(size.height(), 7.0 + 14.0);
    }

    #[test]
    fn test_measure_uses_longest_line() {
        let size = measure("ab\nlongest line\ncd", 10.0, 0.5);
        assert_eq!(size.width(), 12.0 * 10.0 * 0.5);
        assert_eq!(size.height(), 3.0 * 10.0 + 20.0);
    }

    #[test]
    fn test_measure_counts_trailing_newline() {
        // Serialized documents end with a newline; the empty final line
        // still reserves vertical space.
        let without = measure("a: b", 7.0, 0.65);
        let with = measure("a: b\n", 7.0, 0.65);
        assert_eq!(with.height(), without.height() + 7.0);
        assert_eq!(with.width(), without.width());
    }

    #[test]
    fn test_measure_empty_text() {
        let size = measure("", 7.0, 0.65);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 3.0 * 7.0);
    }

    #[test]
    fn test_measure_counts_characters_not_bytes() {
        let size = measure("naïve", 10.0, 0.5);
        assert_eq!(size.width(), 5.0 * 10.0 * 0.5);
    }

    #[test]
    fn test_truncate_middle_short_path_is_borrowed() {
        let path = "/tmp/out.hdf5";
        let result = truncate_middle(path, 30);
        assert_eq!(result, path);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_middle_exact_length_is_unchanged() {
        let path = "abcdefghij";
        assert_eq!(truncate_middle(path, 10), path);
    }

    #[test]
    fn test_truncate_middle_long_path() {
        let path = "/data/projects/study/subject/session/storage/output.hdf5";
        let result = truncate_middle(path, 30);

        assert_eq!(result.chars().count(), 30);
        assert_eq!(result.matches("...").count(), 1);

        // Head is the first max/2 - 2 characters, tail fills the remainder.
        let head = &path[..13];
        let tail = &path[path.len() - 14..];
        assert_eq!(result, format!("{head}...{tail}"));
    }

    #[test]
    fn test_truncate_middle_minimal_budget() {
        let result = truncate_middle("abcdefghij", 5);
        assert_eq!(result, "...ij");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn test_truncate_middle_counts_characters_not_bytes() {
        let path = "ñññññññññññññññ";
        let result = truncate_middle(path, 9);
        assert_eq!(result.chars().count(), 9);
        assert_eq!(result, "ññ...ññññ");
    }

    #[test]
    fn test_classify_key_value() {
        let spans = YamlClassifier.classify("kind: VBM");
        assert_eq!(
            spans,
            vec![
                Span::new("kind", Role::Key),
                Span::new(": ", Role::Plain),
                Span::new("VBM", Role::Value),
            ]
        );
    }

    #[test]
    fn test_classify_indented_key_value() {
        let spans = YamlClassifier.classify("  uri: /tmp/out.hdf5");
        assert_eq!(
            spans,
            vec![
                Span::new("  ", Role::Plain),
                Span::new("uri", Role::Key),
                Span::new(": ", Role::Plain),
                Span::new("/tmp/out.hdf5", Role::Value),
            ]
        );
    }

    #[test]
    fn test_classify_sequence_item() {
        let spans = YamlClassifier.classify("- name: gmd");
        assert_eq!(
            spans,
            vec![
                Span::new("- ", Role::Plain),
                Span::new("name", Role::Key),
                Span::new(": ", Role::Plain),
                Span::new("gmd", Role::Value),
            ]
        );
    }

    #[test]
    fn test_classify_block_mapping_key() {
        let spans = YamlClassifier.classify("storage:");
        assert_eq!(
            spans,
            vec![Span::new("storage", Role::Key), Span::new(":", Role::Plain)]
        );
    }

    #[test]
    fn test_classify_plain_scalar() {
        let spans = YamlClassifier.classify("- schaefer");
        assert_eq!(
            spans,
            vec![
                Span::new("- ", Role::Plain),
                Span::new("schaefer", Role::Value),
            ]
        );
    }

    #[test]
    fn test_classify_comment() {
        let spans = YamlClassifier.classify("# a comment");
        assert_eq!(spans, vec![Span::new("# a comment", Role::Plain)]);
    }

    #[test]
    fn test_classify_empty_line() {
        assert!(YamlClassifier.classify("").is_empty());
    }
}
