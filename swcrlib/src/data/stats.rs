//! Line statistics for a listing run.
//!
//! Every physical line of every input file lands in exactly one bucket:
//! `blank`, `comment`, or `kept`. `kept` lines are the ones written to the
//! document, so `kept` always equals the number of content paragraphs.

use serde::Serialize;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use super::classify::LineKind;

/// Line counts by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// Physical lines read
    pub total: u64,
    /// Whitespace-only lines dropped
    pub blank: u64,
    /// Comment lines dropped
    pub comment: u64,
    /// Lines written to the document
    pub kept: u64,
}

impl LineCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one line of the given kind.
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.kept += 1,
        }
    }

    /// Lines dropped by filtering.
    pub fn dropped(&self) -> u64 {
        self.blank + self.comment
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            kept: self.kept + other.kept,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.blank += other.blank;
        self.comment += other.comment;
        self.kept += other.kept;
    }
}

/// Outcome of writing one source file into the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListing {
    pub path: PathBuf,
    /// Encoding the file was decoded with
    pub encoding: &'static str,
    /// Whether undecodable bytes were replaced
    pub lossy: bool,
    pub lines: LineCounts,
}
