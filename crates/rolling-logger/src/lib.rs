//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to `<app>-YYYY-MM-DD.log` in
//! the given directory (a new file each day) and to stderr. `log` records
//! are bridged, so crates using the `log` facade land in the same file.
//! The last lines are also kept in memory for in-app display.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Lines kept in the in-memory buffer
pub const BUFFER_CAPACITY: usize = 500;

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

/// Stderr goes nowhere on Android; events are forwarded to logcat instead
#[cfg(target_os = "android")]
mod logcat {
    use std::fmt::{self, Write as _};

    use log::Log;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    pub struct LogcatLayer {
        logger: android_logger::AndroidLogger,
    }

    impl LogcatLayer {
        pub fn new(tag: &str) -> Self {
            let config = android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag(tag.to_string());
            Self {
                logger: android_logger::AndroidLogger::new(config),
            }
        }
    }

    #[derive(Default)]
    struct MessageVisitor {
        message: String,
    }

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "message" => {
                    let _ = write!(self.message, "{:?}", value);
                }
                // bridged `log` metadata
                name if name.starts_with("log.") => {}
                name => {
                    let _ = write!(self.message, " {}={:?}", name, value);
                }
            }
        }
    }

    fn log_level(level: &Level) -> log::Level {
        match *level {
            Level::ERROR => log::Level::Error,
            Level::WARN => log::Level::Warn,
            Level::INFO => log::Level::Info,
            Level::DEBUG => log::Level::Debug,
            Level::TRACE => log::Level::Trace,
        }
    }

    impl<S: Subscriber> Layer<S> for LogcatLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.logger.log(
                &log::Record::builder()
                    .args(format_args!("{}", visitor.message))
                    .level(log_level(meta.level()))
                    .target(meta.target())
                    .build(),
            );
        }
    }
}

/// Initialize the global logger. Fails if a subscriber is already set.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;

    let writer = RollingWriter::new(log_dir, app_name, BUFFER_CAPACITY);
    WRITER
        .set(writer.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    #[cfg(target_os = "android")]
    let logcat = Some(logcat::LogcatLayer::new(app_name));
    #[cfg(not(target_os = "android"))]
    let logcat: Option<tracing_subscriber::layer::Identity> = None;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(logcat)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}

pub fn info(message: &str) -> Result<(), String> {
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), String> {
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    tracing::error!("{}", message);
    Ok(())
}

/// Most recent `limit` lines, oldest first. Empty before `init_logger`.
pub fn recent_lines(limit: usize) -> Vec<String> {
    WRITER
        .get()
        .map(|writer| writer.recent(limit))
        .unwrap_or_default()
}

/// Fixed-size line buffer, oldest dropped first
#[derive(Debug)]
struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
    /// Bytes after the last newline, waiting for the rest of the line
    partial: String,
}

impl LineBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        }
    }

    fn push_bytes(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            self.push_line(line.trim_end().to_string());
        }
    }

    fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn recent(&self, limit: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(limit);
        self.lines.iter().skip(skip).cloned().collect()
    }
}

/// Daily log file, reopened when the date changes
#[derive(Debug)]
struct DailyFile {
    dir: PathBuf,
    prefix: String,
    date: String,
    file: Option<File>,
}

impl DailyFile {
    fn new(dir: PathBuf, prefix: &str) -> Self {
        Self {
            dir,
            prefix: prefix.to_string(),
            date: String::new(),
            file: None,
        }
    }

    fn path_for(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.prefix, date))
    }

    fn write_all(&mut self, date: &str, buf: &[u8]) -> io::Result<()> {
        if self.file.is_none() || self.date != date {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path_for(date))?;
            self.file = Some(file);
            self.date = date.to_string();
        }
        match self.file.as_mut() {
            Some(file) => file.write_all(buf),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
struct Inner {
    file: DailyFile,
    buffer: LineBuffer,
}

/// `MakeWriter` shared between the subscriber and `recent_lines`
#[derive(Debug, Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingWriter {
    pub fn new(log_dir: PathBuf, app_name: &str, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                file: DailyFile::new(log_dir, app_name),
                buffer: LineBuffer::new(capacity),
            })),
        }
    }

    pub fn recent(&self, limit: usize) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.buffer.recent(limit),
            Err(_) => Vec::new(),
        }
    }

    fn write_dated(&self, date: &str, buf: &[u8]) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.buffer.push_bytes(buf);
        inner.file.write_all(date, buf)
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_dated(&today(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.lock() {
            Ok(mut inner) => inner.file.flush(),
            Err(_) => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(2);
        buffer.push_bytes(b"one\ntwo\nthree\n");
        assert_eq!(buffer.recent(10), vec!["two", "three"]);
        assert_eq!(buffer.recent(1), vec!["three"]);
    }

    #[test]
    fn test_buffer_joins_split_writes() {
        let mut buffer = LineBuffer::new(10);
        buffer.push_bytes(b"hal");
        assert!(buffer.recent(10).is_empty());
        buffer.push_bytes(b"f line\nnext");
        assert_eq!(buffer.recent(10), vec!["half line"]);
    }

    #[test]
    fn test_writer_rolls_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::new(dir.path().to_path_buf(), "TaskBoard", 10);

        writer.write_dated("2024-03-01", b"first day\n").unwrap();
        writer.write_dated("2024-03-02", b"second day\n").unwrap();

        let mut files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        files.sort();
        assert_eq!(files, vec!["TaskBoard-2024-03-01.log", "TaskBoard-2024-03-02.log"]);
        let first = std::fs::read_to_string(dir.path().join("TaskBoard-2024-03-01.log")).unwrap();
        assert_eq!(first, "first day\n");
        assert_eq!(writer.recent(10), vec!["first day", "second day"]);
    }

    #[test]
    fn test_write_trait_appends_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path().to_path_buf(), "TaskBoard", 10);

        writeln!(writer, "hello").unwrap();
        writer.flush().unwrap();

        let path = dir.path().join(format!("TaskBoard-{}.log", today()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn test_level_helpers_work_without_subscriber() {
        assert!(info("setup").is_ok());
        assert!(warn("second instance").is_ok());
        assert!(error("config unreadable").is_ok());
    }
}
