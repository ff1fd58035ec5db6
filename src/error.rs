// ============================================================================
// Utility Errors
// Failures of the I/O helpers (logging sink, file backup)
// ============================================================================

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by the logging and backup helpers.
#[derive(Debug)]
pub enum UtilError {
    /// An I/O operation on `path` failed
    Io { path: PathBuf, source: io::Error },
    /// The log sink could not be installed
    Log(String),
    /// The backup request was rejected before any copy was made
    Backup(String),
}

impl UtilError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        UtilError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            },
            UtilError::Log(msg) => write!(f, "logging error: {msg}"),
            UtilError::Backup(msg) => write!(f, "backup error: {msg}"),
        }
    }
}

impl std::error::Error for UtilError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UtilError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for the I/O helpers
pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = UtilError::io("/tmp/x.log", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "I/O error on '/tmp/x.log': gone");
        assert_eq!(
            UtilError::Backup("nothing to copy".to_string()).to_string(),
            "backup error: nothing to copy"
        );
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = UtilError::io("a", io::Error::other("disk full"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".to_string()));
        assert!(UtilError::Log("x".to_string()).source().is_none());
    }
}
