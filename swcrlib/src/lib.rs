//! # swcrlib
//!
//! A source listing generator for software copyright registration. It finds
//! the code files of a project, drops blank and comment lines, and writes what
//! is left into a single Word document with a fixed header, font, and spacing.
//!
//! ## Overview
//!
//! A run is a straight pipeline:
//!
//! - **Discovery** (`source`): walk each input directory, skip hidden entries
//!   and excluded path prefixes, keep files whose name ends with a configured
//!   extension
//! - **Reading** (`data`): detect each file's encoding, decode it, and classify
//!   every line as blank, comment, or code
//! - **Output** (`output`): append code lines to a document sink as uniformly
//!   styled paragraphs under a centred header, then save
//!
//! Matching is deliberately literal. Extension `c` matches any name ending in
//! `c`, and an exclusion `/src/foo` also excludes `/src/foobar`.
//!
//! ## Example
//!
//! ```rust
//! use swcrlib::{generate_listing, CommentMarkerSet, ListingConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.c"), "// entry\n\nint main(void) { return 0; }\n").unwrap();
//!
//! let report = generate_listing(
//!     &ListingConfig::new()
//!         .title("Demo V1.0")
//!         .input_dirs([dir.path()])
//!         .comment_markers(CommentMarkerSet::new(["//"]))
//!         .output(dir.path().join("code.docx")),
//! )
//! .unwrap();
//!
//! assert_eq!(report.file_count(), 1);
//! assert_eq!(report.lines.kept, 1);
//! ```

pub mod data;
pub mod error;
pub mod listing;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    classify, is_blank, is_comment, split_lines, CommentMarkerSet, FileListing, LineCounts,
    LineKind,
};
pub use error::SwcrError;
pub use listing::{discover, generate_listing, generate_with, ListingReport};
pub use options::{ListingConfig, StyleProfile};
pub use output::{
    assemble, Assembled, DocumentAssembler, DocumentSink, DocxSink, OutputFormat,
    RenderedDocument,
};
pub use source::{ExclusionSet, FileExtensionSet, Finder};

/// Result type for swcrlib operations
pub type Result<T> = std::result::Result<T, SwcrError>;
