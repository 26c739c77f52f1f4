//! Path helpers shared by discovery and configuration.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and fold away `.` and
/// `..` components without touching the file system.
///
/// Symlinks are not resolved, so the result keeps the spelling the user gave.
pub fn absolutize(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path.as_ref())?;
    Ok(normalize_lexically(&absolute))
}

/// Fold `.` and `..` components of an absolute path.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Remove trailing path separators, leaving the rest of the string intact.
///
/// `"/src/vendor/"` becomes `"/src/vendor"`. A path made only of separators
/// becomes the empty string, which as a prefix matches everything, same as
/// the root it named.
pub fn strip_trailing_separators(path: &str) -> &str {
    path.trim_end_matches(std::path::is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize_relative_path() {
        let cwd = std::env::current_dir().unwrap();
        let result = absolutize("some/dir").unwrap();
        assert!(result.is_absolute());
        assert_eq!(result, cwd.join("some").join("dir"));
    }

    #[test]
    fn test_absolutize_folds_dot_components() {
        let result = absolutize("/a/./b/../c").unwrap();
        assert_eq!(result, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_absolutize_parent_of_root() {
        let result = absolutize("/../x").unwrap();
        assert_eq!(result, PathBuf::from("/x"));
    }

    #[test]
    fn test_absolutize_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(".").unwrap(), cwd);
    }

    #[test]
    fn test_strip_trailing_separators() {
        assert_eq!(strip_trailing_separators("/proj/vendor/"), "/proj/vendor");
        assert_eq!(strip_trailing_separators("/proj/vendor//"), "/proj/vendor");
        assert_eq!(strip_trailing_separators("/proj/vendor"), "/proj/vendor");
        assert_eq!(strip_trailing_separators("/"), "");
    }
}
