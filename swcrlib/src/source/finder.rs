//! Code file discovery with hidden-entry and path-prefix exclusion.
//!
//! Discovery walks each input directory depth-first and emits the absolute
//! path of every regular file whose name ends with one of the configured
//! extensions. Two rules prune the walk before the extension test:
//!
//! 1. Any entry whose name starts with `.` is skipped, file or directory.
//!    This also keeps `.git`, `.svn` and friends out without a name list.
//! 2. Any entry whose absolute path starts with an exclusion prefix is
//!    skipped. Excluding a directory prunes its whole subtree.
//!
//! Both matches are plain string tests. An extension `c` matches `abc`, and
//! an exclusion `/src/foo` also excludes `/src/foobar`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use super::paths::{absolutize, strip_trailing_separators};
use crate::error::SwcrError;
use crate::Result;

/// Extensions matched when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h"];

/// Allow-list of file name suffixes, written without the dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileExtensionSet {
    extensions: Vec<String>,
}

impl FileExtensionSet {
    /// Build a set from the given extensions.
    ///
    /// An empty input falls back to [`DEFAULT_EXTENSIONS`].
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = extensions.into_iter().map(Into::into).collect();
        if extensions.is_empty() {
            return Self::default();
        }
        Self { extensions }
    }

    /// Whether `file_name` ends with any configured extension.
    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for FileExtensionSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered list of absolute path prefixes to leave out of discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    prefixes: Vec<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path to exclude.
    ///
    /// Relative paths are resolved against the current directory. Trailing
    /// separators are dropped before the prefix is stored.
    pub fn exclude(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let absolute = absolutize(path)?;
        let prefix = absolute.to_string_lossy();
        self.prefixes
            .push(strip_trailing_separators(&prefix).to_string());
        Ok(self)
    }

    /// Add multiple paths to exclude.
    pub fn exclude_many<I, P>(mut self, paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self = self.exclude(path)?;
        }
        Ok(self)
    }

    /// Whether `path` starts with any stored prefix.
    ///
    /// `path` is expected to be absolute.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }
}

/// Check if a directory entry name marks a hidden entry.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Recursive code file finder.
#[derive(Debug, Clone, Default)]
pub struct Finder {
    extensions: FileExtensionSet,
    sorted: bool,
}

impl Finder {
    pub fn new(extensions: FileExtensionSet) -> Self {
        Self {
            extensions,
            sorted: false,
        }
    }

    /// Visit siblings in file name order instead of file system order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Find code files under `root`.
    ///
    /// Every returned path is absolute, names a regular file, is not hidden
    /// and does not start with an exclusion prefix. The root itself is never
    /// tested against the hidden or exclusion rules.
    ///
    /// Symlinks are only resolved once an entry has passed both rules, so a
    /// hidden or excluded dangling link is skipped like any other entry.
    /// Any directory or surviving link that cannot be read fails the whole
    /// call; a partial listing is never returned.
    pub fn find(&self, root: impl AsRef<Path>, exclusions: &ExclusionSet) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(SwcrError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(SwcrError::NotADirectory(root.to_path_buf()));
        }

        let root = absolutize(root)?;
        let real_root = fs::canonicalize(&root)?;

        let mut files = Vec::new();
        self.walk(&root, &real_root, exclusions, &mut Vec::new(), &mut files)?;

        tracing::debug!("{} directory: {} code files", root.display(), files.len());

        Ok(files)
    }

    /// Walk `dir` without following links, descending into symlinked
    /// directories by hand.
    ///
    /// `real_dir` is the resolved location of `dir`. `trail` holds, for every
    /// link hop above this one, the resolved directory the hop started from
    /// and the resolved parent of the link it took.
    fn walk(
        &self,
        dir: &Path,
        real_dir: &Path,
        exclusions: &ExclusionSet,
        trail: &mut Vec<(PathBuf, PathBuf)>,
        files: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut walker = WalkDir::new(dir);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || admits(e, exclusions))
        {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                SwcrError::Discovery { path, source: err }
            })?;

            if entry.depth() == 0 {
                continue;
            }

            if entry.path_is_symlink() {
                let link = entry.path();
                let link_error = |source| SwcrError::Link {
                    path: link.to_path_buf(),
                    source,
                };
                let target = fs::metadata(link).map_err(link_error)?;

                if target.is_dir() {
                    let real = fs::canonicalize(link).map_err(link_error)?;
                    let here = match link.parent() {
                        Some(parent) => fs::canonicalize(parent).map_err(link_error)?,
                        None => real_dir.to_path_buf(),
                    };
                    if revisits(&real, real_dir, &here, trail) {
                        return Err(SwcrError::SymlinkLoop {
                            path: link.to_path_buf(),
                            target: real,
                        });
                    }

                    trail.push((real_dir.to_path_buf(), here));
                    let walked = self.walk(link, &real, exclusions, trail, files);
                    trail.pop();
                    walked?;
                    continue;
                }
                if !target.is_file() {
                    continue;
                }
            } else if !entry.file_type().is_file() {
                continue;
            }

            if self.extensions.matches(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }

        Ok(())
    }

    /// Find code files under each root in turn.
    ///
    /// Results are concatenated in root order. Overlapping roots yield
    /// duplicate paths; callers that pass nested roots get what they asked for.
    pub fn find_all<P: AsRef<Path>>(
        &self,
        roots: &[P],
        exclusions: &ExclusionSet,
    ) -> Result<Vec<PathBuf>> {
        let mut all_files = Vec::new();

        for root in roots {
            all_files.extend(self.find(root, exclusions)?);
        }

        Ok(all_files)
    }
}

/// Hidden test first, then the exclusion prefix test.
fn admits(entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    !is_hidden(entry.file_name()) && !exclusions.is_excluded(entry.path())
}

/// Whether `target` is a directory already open on the current walk: an
/// ancestor of the link's parent within this hop or any hop above it.
fn revisits(target: &Path, real_dir: &Path, here: &Path, trail: &[(PathBuf, PathBuf)]) -> bool {
    let open = |from: &Path, at: &Path| target.starts_with(from) && at.starts_with(target);
    open(real_dir, here) || trail.iter().any(|(from, at)| open(from, at))
}
