//! Scan error types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Non-fatal failures scoped to one entry of a scan.
///
/// The walk never aborts on these. The affected subtree is skipped and the
/// error is handed back in [`crate::ScanReport::diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Permission denied: {}", path.display())]
    AccessDenied { path: PathBuf },

    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl ScanError {
    /// Build a scan error from a walkdir failure, falling back to `fallback`
    /// when the failure carries no path of its own.
    pub(crate) fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_else(|| fallback.to_path_buf());
        let kind = err.io_error().map(io::Error::kind);
        Self::classify(path, kind, err.to_string())
    }

    /// Permission failures become `AccessDenied`; everything else, including
    /// link loops that carry no io error, becomes `Io`.
    fn classify(path: PathBuf, kind: Option<io::ErrorKind>, message: String) -> Self {
        match kind {
            Some(io::ErrorKind::PermissionDenied) => ScanError::AccessDenied { path },
            _ => ScanError::Io { path, message },
        }
    }

    /// Path of the entry that could not be read
    pub fn path(&self) -> &Path {
        match self {
            ScanError::AccessDenied { path } => path,
            ScanError::Io { path, .. } => path,
        }
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, ScanError::AccessDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ScanError::AccessDenied {
            path: PathBuf::from("/vs/Templates/locked"),
        };
        assert_eq!(err.to_string(), "Permission denied: /vs/Templates/locked");

        let err = ScanError::Io {
            path: PathBuf::from("/vs/ItemTemplates"),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to read /vs/ItemTemplates: boom");
    }

    #[test]
    fn test_classify_permission_denied() {
        let err = ScanError::classify(
            PathBuf::from("/vs/Templates/locked"),
            Some(io::ErrorKind::PermissionDenied),
            "Permission denied (os error 13)".to_string(),
        );
        assert_eq!(
            err,
            ScanError::AccessDenied {
                path: PathBuf::from("/vs/Templates/locked")
            }
        );
    }

    #[test]
    fn test_classify_other_failures() {
        let err = ScanError::classify(
            PathBuf::from("/vs/gone"),
            Some(io::ErrorKind::NotFound),
            "No such file or directory".to_string(),
        );
        assert!(!err.is_access_denied());
        assert_eq!(err.to_string(), "Failed to read /vs/gone: No such file or directory");

        let err = ScanError::classify(PathBuf::from("/vs/loop"), None, "File system loop found".to_string());
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_path_and_kind() {
        let err = ScanError::AccessDenied {
            path: PathBuf::from("/a"),
        };
        assert!(err.is_access_denied());
        assert_eq!(err.path(), Path::new("/a"));

        let err = ScanError::Io {
            path: PathBuf::from("/b"),
            message: String::new(),
        };
        assert!(!err.is_access_denied());
        assert_eq!(err.path(), Path::new("/b"));
    }
}
