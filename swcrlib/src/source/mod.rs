//! Source discovery: find code files to list.
//!
//! This module handles the first stage of the pipeline - walking the input
//! directories and returning the code files that belong in the listing.
//!
//! ## Example
//!
//! ```rust,ignore
//! use swcrlib::source::{ExclusionSet, FileExtensionSet, Finder};
//!
//! let finder = Finder::new(FileExtensionSet::new(["c", "h"]));
//! let exclusions = ExclusionSet::new().exclude("third_party")?;
//! let files = finder.find(".", &exclusions)?;
//! ```

pub mod finder;
mod paths;

pub use finder::{is_hidden, ExclusionSet, FileExtensionSet, Finder, DEFAULT_EXTENSIONS};
