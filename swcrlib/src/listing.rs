//! High-level listing API.
//!
//! This module ties the stages together: discover code files under every
//! input directory, assemble them into one document, and save it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::{FileListing, LineCounts};
use crate::options::ListingConfig;
use crate::output::{assemble, DocumentSink, DocxSink, OutputFormat, RenderedDocument};
use crate::source::Finder;
use crate::Result;

/// Result of a listing run.
#[derive(Debug, Clone, Serialize)]
pub struct ListingReport {
    /// Where the document was saved
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Per-file statistics, in document order
    pub files: Vec<FileListing>,
    /// Totals across all files
    pub lines: LineCounts,
}

impl ListingReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Find the code files a run would list, in document order.
///
/// Input directories are scanned in the configured order and their results
/// concatenated.
///
/// # Example
///
/// ```rust,ignore
/// use swcrlib::{discover, ListingConfig};
///
/// let files = discover(&ListingConfig::new().input_dirs(["src"]))?;
/// ```
pub fn discover(config: &ListingConfig) -> Result<Vec<PathBuf>> {
    let finder = Finder::new(config.extensions.clone()).sorted(config.sorted);
    finder.find_all(&config.input_dirs, &config.exclusions)
}

/// Discover, assemble, and save a listing.
///
/// The container is picked from the output path: `.txt` writes plain text,
/// anything else a Word document.
///
/// # Example
///
/// ```rust,ignore
/// use swcrlib::{generate_listing, ListingConfig};
///
/// let report = generate_listing(
///     &ListingConfig::new()
///         .title("My Project V1.0")
///         .input_dirs(["src", "include"])
///         .output("code.docx"),
/// )?;
/// println!("{} lines from {} files", report.lines.kept, report.file_count());
/// ```
pub fn generate_listing(config: &ListingConfig) -> Result<ListingReport> {
    match OutputFormat::from_path(&config.output) {
        OutputFormat::Docx => generate_with(config, DocxSink::new(), OutputFormat::Docx),
        OutputFormat::Text => generate_with(config, RenderedDocument::new(), OutputFormat::Text),
    }
}

/// Run the whole pipeline into a caller-supplied sink and save it to
/// `config.output`.
pub fn generate_with<S: DocumentSink>(
    config: &ListingConfig,
    sink: S,
    format: OutputFormat,
) -> Result<ListingReport> {
    let files = discover(config)?;
    let assembled = assemble(
        sink,
        &config.title,
        &files,
        &config.style,
        &config.comment_markers,
    )?;

    save(assembled.sink, &config.output)?;

    Ok(ListingReport {
        output: config.output.clone(),
        format,
        files: assembled.files,
        lines: assembled.lines,
    })
}

fn save<S: DocumentSink>(sink: S, path: &Path) -> Result<()> {
    sink.save(path)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
