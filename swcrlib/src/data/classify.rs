//! Line classification: blank, comment, or code.
//!
//! Classification is purely textual. A line is a comment when, after its
//! leading whitespace is removed, it starts with one of the configured
//! markers. There is no tokenizer, so a marker inside a string literal at the
//! start of a continuation line counts too, and a block comment's inner lines
//! are only caught when they start with a marker such as `*`.

use serde::Serialize;

/// Comment markers used when none are configured.
pub const DEFAULT_COMMENT_MARKERS: &[&str] = &["/*", "*", "*/", "//"];

/// Ordered list of literal comment prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentMarkerSet {
    markers: Vec<String>,
}

impl CommentMarkerSet {
    /// Build a set from the given markers.
    ///
    /// An empty input falls back to [`DEFAULT_COMMENT_MARKERS`].
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if markers.is_empty() {
            return Self::default();
        }
        Self { markers }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.markers
    }
}

impl Default for CommentMarkerSet {
    fn default() -> Self {
        Self {
            markers: DEFAULT_COMMENT_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// What a single line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Split text into lines on `\r\n`, `\n` or a lone `\r`.
///
/// Terminators are dropped and nothing else is touched. A final terminator
/// does not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .flat_map(|piece| piece.strip_suffix('\r').unwrap_or(piece).split('\r'))
}

/// True iff the line is empty once surrounding whitespace is stripped.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True iff the line, with leading whitespace stripped, starts with any marker.
///
/// Matching is a case-sensitive literal prefix test. Check [`is_blank`] first:
/// an empty marker would otherwise claim blank lines as comments.
pub fn is_comment<S: AsRef<str>>(line: &str, markers: &[S]) -> bool {
    let line = line.trim_start();
    markers.iter().any(|marker| line.starts_with(marker.as_ref()))
}

/// Classify a line, testing for blank before comment.
pub fn classify(line: &str, markers: &CommentMarkerSet) -> LineKind {
    if is_blank(line) {
        LineKind::Blank
    } else if is_comment(line, markers.as_slice()) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}
