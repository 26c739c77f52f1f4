//! Data collection: read files and classify their lines.
//!
//! This module handles the second stage of the pipeline - turning each
//! discovered file into text and deciding which lines belong in the listing.
//! It provides:
//!
//! - **Decoding**: per-file encoding detection with lossy fallback
//! - **Classification**: blank / comment / code predicates
//! - **Statistics**: line counts per file and per run

pub mod classify;
pub mod decode;
pub mod stats;

pub use classify::{
    classify, is_blank, is_comment, split_lines, CommentMarkerSet, LineKind,
    DEFAULT_COMMENT_MARKERS,
};
pub use decode::{decode, read_source, DecodedText};
pub use stats::{FileListing, LineCounts};
