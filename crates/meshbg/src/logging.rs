//! File logging.
//!
//! The terminal is the drawing surface, so nothing is ever logged to it.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use directories::ProjectDirs;
use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle, Record, WriteMode};

/// Start logging to a file under [`log_dir`].
///
/// The level comes from `RUST_LOG` and defaults to `info`. Returns `None`
/// if the logger cannot be started; the background runs without logs then.
pub fn setup() -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(FileSpec::default().directory(log_dir()).basename("meshbg"))
        .format(line_format)
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .ok()
}

/// Directory log files are written to.
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("", "", "meshbg")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Single-line log format: time, level, source location, message.
pub fn line_format(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> io::Result<()> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        now.now().format("%H:%M:%S%.6f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_log_dir() {
        assert!(log_dir().ends_with("logs"));
    }

    #[test]
    fn test_line_format() {
        let mut out = Vec::new();
        let mut now = DeferredNow::new();
        line_format(
            &mut out,
            &mut now,
            &Record::builder()
                .args(format_args!("reinitialized 40 particles"))
                .level(Level::Debug)
                .module_path(Some("meshbg_background::field"))
                .line(Some(12))
                .build(),
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with(
            " [DEBUG] [meshbg_background::field:12] reinitialized 40 particles"
        ));
    }
}
