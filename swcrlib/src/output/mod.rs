//! Output: assemble the listing into a document.
//!
//! This module handles the final stage of the pipeline - writing kept lines
//! into a document and saving it. It provides:
//!
//! - **DocumentSink**: the interface every output container implements
//! - **DocxSink**: a Word document with a centred page header
//! - **RenderedDocument**: an in-memory document, saved as plain text
//! - **DocumentAssembler**: feeds filtered source lines into a sink
//!
//! ## Example
//!
//! ```rust,ignore
//! use swcrlib::output::{assemble, DocumentSink, DocxSink};
//!
//! let assembled = assemble(DocxSink::new(), "My Project V1.0", &files, &style, &markers)?;
//! assembled.sink.save("code.docx".as_ref())?;
//! ```

use std::path::Path;

use serde::Serialize;

pub mod assembler;
pub mod docx;
pub mod memory;
pub mod sink;

pub use assembler::{assemble, Assembled, DocumentAssembler};
pub use docx::DocxSink;
pub use memory::{Alignment, Paragraph, RenderedDocument};
pub use sink::DocumentSink;

/// Container written for a given output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Docx,
    Text,
}

impl OutputFormat {
    /// `.txt` files get plain text; everything else is a Word document.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => OutputFormat::Text,
            _ => OutputFormat::Docx,
        }
    }
}
