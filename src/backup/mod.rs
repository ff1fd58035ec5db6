// ============================================================================
// File Backup
// Timestamped copies of a file, next to it or in a backup directory
// ============================================================================

use crate::error::{UtilError, UtilResult};
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default timestamp suffix, e.g. `report_20250513_142501.csv`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where and how backups are named.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackupOptions {
    /// Target directory; `None` writes next to the source file
    pub dir: Option<PathBuf>,

    /// chrono format string appended to the file stem
    pub timestamp_format: String,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            dir: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl BackupOptions {
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

/// Copies `path` to `<stem>_<timestamp>.<ext>` beside it.
///
/// Returns the path of the copy.
pub fn backup_file(path: impl AsRef<Path>) -> UtilResult<PathBuf> {
    backup_file_with(path, &BackupOptions::default())
}

/// Copies `path` according to `options`.
///
/// # Errors
/// * `Backup` if the source is not an existing regular file, or the
///   timestamp format is invalid
/// * `Io` if the backup directory or the copy cannot be created
pub fn backup_file_with(path: impl AsRef<Path>, options: &BackupOptions) -> UtilResult<PathBuf> {
    let source = path.as_ref();
    if !source.is_file() {
        return Err(UtilError::Backup(format!(
            "'{}' does not exist or is not a regular file",
            source.display()
        )));
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| UtilError::Backup(format!("'{}' has no file name", source.display())))?;
    let extension = source.extension().and_then(|e| e.to_str());

    let dir = match &options.dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| UtilError::io(dir, e))?;
            dir.clone()
        },
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let mut stamp = String::new();
    write!(stamp, "{}", Local::now().format(&options.timestamp_format)).map_err(|_| {
        UtilError::Backup(format!(
            "invalid timestamp format '{}'",
            options.timestamp_format
        ))
    })?;
    let target = unique_target(&dir, &format!("{stem}_{stamp}"), extension);

    fs::copy(source, &target).map_err(|e| UtilError::io(&target, e))?;
    tracing::info!(
        source = %source.display(),
        backup = %target.display(),
        "file backed up"
    );
    Ok(target)
}

/// First free `<base>[_n].<ext>` in `dir`.
fn unique_target(dir: &Path, base: &str, extension: Option<&str>) -> PathBuf {
    let name = |suffix: Option<u32>| {
        let base = match suffix {
            Some(n) => format!("{base}_{n}"),
            None => base.to_string(),
        };
        match extension {
            Some(ext) => dir.join(format!("{base}.{ext}")),
            None => dir.join(base),
        }
    };

    let mut candidate = name(None);
    let mut n = 1;
    while candidate.exists() {
        candidate = name(Some(n));
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_backup_next_to_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("report.csv");
        fs::write(&source, "a,b\n1,2\n").unwrap();

        let backup = backup_file(&source).unwrap();
        assert_eq!(backup.parent(), Some(dir.path()));
        assert_eq!(backup.extension().and_then(|e| e.to_str()), Some("csv"));

        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("report_"), "{name}");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "a,b\n1,2\n");
        // Source untouched
        assert_eq!(fs::read_to_string(&source).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_backup_into_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, "keep me").unwrap();

        let options = BackupOptions::default().with_dir(dir.path().join("backups/daily"));
        let backup = backup_file_with(&source, &options).unwrap();
        assert_eq!(backup.parent(), Some(dir.path().join("backups/daily").as_path()));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "keep me");
    }

    #[test]
    fn test_same_second_backups_do_not_collide() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("data.json");
        fs::write(&source, "{}").unwrap();

        // A fixed stamp forces a collision on every call
        let options = BackupOptions::default().with_timestamp_format("fixed");
        let first = backup_file_with(&source, &options).unwrap();
        let second = backup_file_with(&source, &options).unwrap();
        let third = backup_file_with(&source, &options).unwrap();

        assert_eq!(first, dir.path().join("data_fixed.json"));
        assert_eq!(second, dir.path().join("data_fixed_1.json"));
        assert_eq!(third, dir.path().join("data_fixed_2.json"));
    }

    #[test]
    fn test_file_without_extension() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Makefile");
        fs::write(&source, "all:").unwrap();

        let options = BackupOptions::default().with_timestamp_format("bak");
        let backup = backup_file_with(&source, &options).unwrap();
        assert_eq!(backup, dir.path().join("Makefile_bak"));
    }

    #[test]
    fn test_invalid_timestamp_format() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "x").unwrap();

        let options = BackupOptions::default().with_timestamp_format("stamp_%");
        let result = backup_file_with(&source, &options);
        assert!(matches!(result, Err(UtilError::Backup(msg)) if msg.contains("stamp_%")));
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let dir = tempdir().unwrap();
        let result = backup_file(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(UtilError::Backup(_))));

        let result = backup_file(dir.path());
        assert!(matches!(result, Err(UtilError::Backup(_))));
    }
}
