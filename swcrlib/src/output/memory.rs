//! In-memory document: paragraphs with their style, saved as plain text.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::sink::DocumentSink;
use crate::error::SwcrError;
use crate::options::StyleProfile;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
}

/// One paragraph of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Alignment,
    pub style: StyleProfile,
}

/// A listing held entirely in memory.
///
/// The header paragraph comes first when set, then one paragraph per kept
/// source line. Saving writes one line per paragraph as UTF-8 text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    header: Option<Paragraph>,
    paragraphs: Vec<Paragraph>,
}

impl RenderedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> Option<&Paragraph> {
        self.header.as_ref()
    }

    /// Content paragraphs, header excluded.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Text of each content paragraph, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.iter().map(|p| p.text.as_str())
    }

    /// Total paragraph count, header included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len() + usize::from(self.header.is_some())
    }

    /// The document as text: header line, then content lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for paragraph in self.header.iter().chain(self.paragraphs.iter()) {
            out.push_str(&paragraph.text);
            out.push('\n');
        }
        out
    }
}

impl DocumentSink for RenderedDocument {
    fn set_header(&mut self, title: &str, style: &StyleProfile) -> Result<()> {
        self.header = Some(Paragraph {
            text: title.to_string(),
            alignment: Alignment::Center,
            style: style.clone(),
        });
        Ok(())
    }

    fn append_line(&mut self, text: &str, style: &StyleProfile) -> Result<()> {
        self.paragraphs.push(Paragraph {
            text: text.to_string(),
            alignment: Alignment::Left,
            style: style.clone(),
        });
        Ok(())
    }

    fn save(self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|e| SwcrError::Sink {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_header_and_lines() {
        let style = StyleProfile::default();
        let mut doc = RenderedDocument::new();
        doc.set_header("Title", &style).unwrap();
        doc.append_line("int x;", &style).unwrap();
        doc.append_line("  return x;", &style).unwrap();

        let header = doc.header().unwrap();
        assert_eq!(header.text, "Title");
        assert_eq!(header.alignment, Alignment::Center);
        assert_eq!(doc.paragraph_count(), 3);
        assert_eq!(doc.lines().collect::<Vec<_>>(), vec!["int x;", "  return x;"]);
        assert_eq!(doc.paragraphs()[0].alignment, Alignment::Left);
        assert_eq!(doc.paragraphs()[1].style, style);
    }

    #[test]
    fn test_text_is_not_escaped() {
        let style = StyleProfile::default();
        let mut doc = RenderedDocument::new();
        doc.append_line("if (a < b && c > d) {", &style).unwrap();

        assert_eq!(doc.to_text(), "if (a < b && c > d) {\n");
    }

    #[test]
    fn test_save_writes_text() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("listing.txt");
        let style = StyleProfile::default();

        let mut doc = RenderedDocument::new();
        doc.set_header("Title", &style).unwrap();
        doc.append_line("int x;", &style).unwrap();
        doc.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Title\nint x;\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing/listing.txt");

        let result = RenderedDocument::new().save(&path);
        assert!(matches!(result, Err(SwcrError::Sink { .. })));
    }
}
