//! WordprocessingML (.docx) output.
//!
//! Paragraphs are collected in memory and the package is only built and
//! written on save, so an interrupted run leaves no half-written file.
//!
//! The page template is fixed: A4 portrait with 2.54cm top/bottom and
//! 3.17cm left/right margins. Sizes passed to docx-rs are in twentieths of a
//! point (twips) for spacing and half-points for fonts.

use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AlignmentType, Docx, Header, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run,
    RunFonts,
};

use super::sink::DocumentSink;
use crate::error::SwcrError;
use crate::options::StyleProfile;
use crate::Result;

/// Builds a .docx listing.
#[derive(Debug, Default)]
pub struct DocxSink {
    header: Option<Paragraph>,
    paragraphs: Vec<Paragraph>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the package and return its bytes.
    pub fn into_bytes(self) -> std::result::Result<Vec<u8>, String> {
        let mut docx = Docx::new()
            .page_size(11906, 16838)
            .page_margin(
                PageMargin::new()
                    .top(1440)
                    .bottom(1440)
                    .left(1800)
                    .right(1800),
            );

        if let Some(header) = self.header {
            docx = docx.header(Header::new().add_paragraph(header));
        }
        for paragraph in self.paragraphs {
            docx = docx.add_paragraph(paragraph);
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).map_err(|e| e.to_string())?;
        Ok(buffer.into_inner())
    }
}

impl DocumentSink for DocxSink {
    fn set_header(&mut self, title: &str, style: &StyleProfile) -> Result<()> {
        let paragraph = Paragraph::new()
            .add_run(styled_run(title, style))
            .align(AlignmentType::Center);
        self.header = Some(paragraph);
        Ok(())
    }

    fn append_line(&mut self, text: &str, style: &StyleProfile) -> Result<()> {
        let spacing = LineSpacing::new()
            .before(twips(style.space_before))
            .after(twips(style.space_after))
            .line(twips(style.line_spacing) as _)
            .line_rule(LineSpacingType::Exact);

        let paragraph = Paragraph::new()
            .add_run(styled_run(text, style))
            .line_spacing(spacing);
        self.paragraphs.push(paragraph);
        Ok(())
    }

    fn save(self, path: &Path) -> Result<()> {
        let sink_error = |message: String| SwcrError::Sink {
            path: path.to_path_buf(),
            message,
        };

        let bytes = self.into_bytes().map_err(sink_error)?;
        fs::write(path, bytes).map_err(|e| sink_error(e.to_string()))?;

        tracing::info!("saved {}", path.display());
        Ok(())
    }
}

fn styled_run(text: &str, style: &StyleProfile) -> Run {
    let fonts = RunFonts::new()
        .ascii(style.font_name.as_str())
        .hi_ansi(style.font_name.as_str())
        .east_asia(style.font_name.as_str());

    Run::new()
        .add_text(xml_safe(text))
        .fonts(fonts)
        .size(half_points(style.font_size))
}

/// Points to twentieths of a point.
fn twips(points: f32) -> u32 {
    (points * 20.0).round().max(0.0) as u32
}

/// Points to half-points, the unit of `w:sz`.
fn half_points(points: f32) -> usize {
    (points * 2.0).round().max(0.0) as usize
}

/// Drop characters XML 1.0 cannot carry. Tabs survive.
fn xml_safe(text: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    }

    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| allowed(c)).collect())
    }
}
