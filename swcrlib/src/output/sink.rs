//! The document sink abstraction.

use std::path::Path;

use crate::options::StyleProfile;
use crate::Result;

/// Destination for the assembled listing.
///
/// A sink owns the container format: page layout, runs, fonts, and the
/// bytes written on [`save`](DocumentSink::save). The assembler only hands it
/// a header title and one line of text at a time, in document order.
pub trait DocumentSink {
    /// Set the page header to `title`, centred, in the profile's font.
    fn set_header(&mut self, title: &str, style: &StyleProfile) -> Result<()>;

    /// Append one paragraph holding `text` verbatim.
    fn append_line(&mut self, text: &str, style: &StyleProfile) -> Result<()>;

    /// Write the document to `path`, replacing any existing file.
    ///
    /// Nothing is written to `path` before this call.
    fn save(self, path: &Path) -> Result<()>
    where
        Self: Sized;
}
