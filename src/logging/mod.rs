// ============================================================================
// Logging
// File-backed tracing setup and severity-tagged log writes
// ============================================================================
//
// Usage:
//
// ```ignore
// use clearutils::logging::{setup_logging, logw, flush_logs, LogConfig};
// use tracing::Level;
//
// setup_logging(&LogConfig::default().with_path("run.log"))?;
// logw(Level::INFO, "starting");
// flush_logs()?;
// ```
//
// Writes are buffered; call flush_logs() (or LogSink::flush) before reading
// the file back or exiting.
// ============================================================================

use crate::error::{UtilError, UtilResult};
use parking_lot::{Mutex, MutexGuard};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

// ============================================================================
// Configuration
// ============================================================================

/// Log file location and output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// File the log is written to
    pub path: PathBuf,

    /// Most verbose level recorded
    pub level: Level,

    /// Append to an existing file instead of truncating it
    pub append: bool,

    /// Emit ANSI colour codes
    pub ansi: bool,

    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("clearutils.log"),
            level: Level::INFO,
            append: true,
            ansi: false,
            with_target: false,
        }
    }
}

impl LogConfig {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}

// ============================================================================
// Log Sink
// ============================================================================

/// Shared, buffered log file.
///
/// Clones write to the same file. Implements `MakeWriter` so it can back a
/// `tracing_subscriber::fmt` subscriber.
#[derive(Debug, Clone)]
pub struct LogSink {
    path: Arc<PathBuf>,
    writer: Arc<Mutex<BufWriter<File>>>,
}

impl LogSink {
    /// Opens (creating parent directories as needed) the log file.
    pub fn open(path: impl AsRef<Path>, append: bool) -> UtilResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| UtilError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|e| UtilError::io(path, e))?;

        Ok(Self {
            path: Arc::new(path.to_path_buf()),
            writer: Arc::new(Mutex::new(BufWriter::new(file))),
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes buffered lines to disk.
    pub fn flush(&self) -> UtilResult<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| UtilError::io(self.path.as_path(), e))
    }

    /// Builds a fmt subscriber writing to this sink.
    ///
    /// Install it globally with [`setup_logging`], or scope it with
    /// `tracing::subscriber::with_default`.
    #[cfg(feature = "logging")]
    pub fn subscriber(
        &self,
        config: &LogConfig,
    ) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_max_level(config.level)
            .with_ansi(config.ansi)
            .with_target(config.with_target)
            .with_writer(self.clone())
            .finish()
    }
}

/// Exclusive handle to the sink for the duration of one event.
pub struct SinkWriter<'a>(MutexGuard<'a, BufWriter<File>>);

impl Write for SinkWriter<'_> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

#[cfg(feature = "logging")]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogSink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter(self.writer.lock())
    }
}

// ============================================================================
// Process-wide Setup
// ============================================================================

static ACTIVE_SINK: Mutex<Option<LogSink>> = parking_lot::const_mutex(None);

/// Installs a global subscriber writing to `config.path`.
///
/// # Errors
/// * `Io` if the file cannot be opened
/// * `Log` if a global subscriber is already installed
#[cfg(feature = "logging")]
pub fn setup_logging(config: &LogConfig) -> UtilResult<LogSink> {
    let sink = LogSink::open(&config.path, config.append)?;

    tracing::subscriber::set_global_default(sink.subscriber(config))
        .map_err(|e| UtilError::Log(e.to_string()))?;

    *ACTIVE_SINK.lock() = Some(sink.clone());
    tracing::debug!(path = %config.path.display(), "logging initialised");
    Ok(sink)
}

/// Flushes the sink installed by [`setup_logging`]; a no-op without one.
pub fn flush_logs() -> UtilResult<()> {
    let sink = ACTIVE_SINK.lock().clone();
    match sink {
        Some(sink) => sink.flush(),
        None => Ok(()),
    }
}

// ============================================================================
// Writing
// ============================================================================

/// Writes `message` at the given severity.
pub fn logw(level: Level, message: &str) {
    if level == Level::ERROR {
        tracing::error!("{message}");
    } else if level == Level::WARN {
        tracing::warn!("{message}");
    } else if level == Level::INFO {
        tracing::info!("{message}");
    } else if level == Level::DEBUG {
        tracing::debug!("{message}");
    } else {
        tracing::trace!("{message}");
    }
}

/// Logs an error and every `source()` beneath it at ERROR.
///
/// Returns the number of errors in the chain.
pub fn logw_traceback(err: &(dyn std::error::Error + 'static)) -> usize {
    tracing::error!("{err}");

    let mut depth = 1;
    let mut source = err.source();
    while let Some(cause) = source {
        tracing::error!(depth, "caused by: {cause}");
        source = cause.source();
        depth += 1;
    }
    depth
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read(sink: &LogSink) -> String {
        sink.flush().unwrap();
        fs::read_to_string(sink.path()).unwrap()
    }

    #[test]
    fn test_logw_writes_each_level() {
        let dir = tempdir().unwrap();
        let config = LogConfig::default()
            .with_path(dir.path().join("levels.log"))
            .with_level(Level::DEBUG);
        let sink = LogSink::open(&config.path, config.append).unwrap();

        tracing::subscriber::with_default(sink.subscriber(&config), || {
            logw(Level::INFO, "hello info");
            logw(Level::WARN, "careful");
            logw(Level::DEBUG, "details");
            logw(Level::TRACE, "too verbose");
        });

        let contents = read(&sink);
        assert!(contents.contains("INFO"));
        assert!(contents.contains("hello info"));
        assert!(contents.contains("WARN"));
        assert!(contents.contains("careful"));
        assert!(contents.contains("details"));
        assert!(!contents.contains("too verbose"));
    }

    #[test]
    fn test_level_filter() {
        let dir = tempdir().unwrap();
        let config = LogConfig::default()
            .with_path(dir.path().join("warn.log"))
            .with_level(Level::WARN);
        let sink = LogSink::open(&config.path, true).unwrap();

        tracing::subscriber::with_default(sink.subscriber(&config), || {
            logw(Level::INFO, "skipped");
            logw(Level::ERROR, "kept");
        });

        let contents = read(&sink);
        assert!(!contents.contains("skipped"));
        assert!(contents.contains("kept"));
    }

    #[test]
    fn test_traceback_logs_source_chain() {
        let dir = tempdir().unwrap();
        let config = LogConfig::default().with_path(dir.path().join("trace.log"));
        let sink = LogSink::open(&config.path, true).unwrap();

        let err = UtilError::io("data.csv", io::Error::other("disk on fire"));
        let depth = tracing::subscriber::with_default(sink.subscriber(&config), || {
            logw_traceback(&err)
        });

        assert_eq!(depth, 2);
        let contents = read(&sink);
        assert!(contents.contains("I/O error on 'data.csv'"));
        assert!(contents.contains("caused by: disk on fire"));
    }

    #[test]
    fn test_open_creates_parents_and_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/app.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "old line\n").unwrap();

        let sink = LogSink::open(&path, false).unwrap();
        assert_eq!(read(&sink), "");

        let other = dir.path().join("fresh/dir/app.log");
        let sink = LogSink::open(&other, true).unwrap();
        assert!(sink.path().exists());
    }

    #[test]
    fn test_setup_logging_installs_once() {
        let dir = tempdir().unwrap();
        let config = LogConfig::default().with_path(dir.path().join("global.log"));

        let sink = setup_logging(&config).unwrap();
        logw(Level::INFO, "global hello");
        flush_logs().unwrap();
        assert!(fs::read_to_string(sink.path()).unwrap().contains("global hello"));

        let again = setup_logging(&config);
        assert!(matches!(again, Err(UtilError::Log(_))));
    }
}
