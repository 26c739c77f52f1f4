//! Input options for a listing run.
//!
//! A [`ListingConfig`] is built once, before anything touches the file
//! system, and only read afterwards. Every field has a default matching the
//! usual submission format: C sources, C-style comment markers, 宋体 10.5pt.

use serde::Serialize;
use std::path::PathBuf;

use crate::data::CommentMarkerSet;
use crate::source::{ExclusionSet, FileExtensionSet};

/// Header title used when none is given.
pub const DEFAULT_TITLE: &str = "软件著作权程序鉴别材料生成器V1.0";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "code.docx";

/// Font used when none is given.
pub const DEFAULT_FONT_NAME: &str = "宋体";

/// Input directory used when none is given.
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Font and spacing applied to the header and to every content paragraph.
///
/// All sizes are in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProfile {
    pub font_name: String,
    pub font_size: f32,
    pub space_before: f32,
    pub space_after: f32,
    /// Exact line height
    pub line_spacing: f32,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: 10.5,
            space_before: 0.0,
            space_after: 2.3,
            line_spacing: 10.5,
        }
    }
}

impl StyleProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    pub fn font_size(mut self, points: f32) -> Self {
        self.font_size = points;
        self
    }

    pub fn space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    pub fn space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    pub fn line_spacing(mut self, points: f32) -> Self {
        self.line_spacing = points;
        self
    }
}

/// Everything a listing run needs.
#[derive(Debug, Clone, Serialize)]
pub struct ListingConfig {
    /// Text placed in the page header
    pub title: String,
    /// Directories to scan, in order
    pub input_dirs: Vec<PathBuf>,
    pub extensions: FileExtensionSet,
    pub comment_markers: CommentMarkerSet,
    pub exclusions: ExclusionSet,
    pub style: StyleProfile,
    /// Where the document is saved
    pub output: PathBuf,
    /// Visit directory entries in name order
    pub sorted: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            input_dirs: vec![PathBuf::from(DEFAULT_INPUT_DIR)],
            extensions: FileExtensionSet::default(),
            comment_markers: CommentMarkerSet::default(),
            exclusions: ExclusionSet::default(),
            style: StyleProfile::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sorted: false,
        }
    }
}

impl ListingConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the directories to scan. An empty list keeps the current directory.
    pub fn input_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(Into::into).collect();
        self.input_dirs = if dirs.is_empty() {
            vec![PathBuf::from(DEFAULT_INPUT_DIR)]
        } else {
            dirs
        };
        self
    }

    pub fn extensions(mut self, extensions: FileExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn comment_markers(mut self, markers: CommentMarkerSet) -> Self {
        self.comment_markers = markers;
        self
    }

    pub fn exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn style(mut self, style: StyleProfile) -> Self {
        self.style = style;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}
