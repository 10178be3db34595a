//! File logging setup.
//!
//! The console belongs to the interactive menu, so log records go to a file
//! next to the configuration instead of stdout/stderr.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "fipe-explorer.log";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name from the configuration, falling back to `info`
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") | Some("warning") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}

/// Default log file location: `~/.config/fipe-explorer/fipe-explorer.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("fipe-explorer")
            .join(LOG_FILE_NAME)
    })
}

/// Install the global file logger. Returns false when logging stays disabled
/// (level `off`, unwritable path, or a logger already installed).
pub fn init_file_logger(path: &Path, level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(path) {
        Ok(log_file) => WriteLogger::init(level, log_config, log_file).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_off_level_does_not_create_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("logs").join(LOG_FILE_NAME);

        assert!(!init_file_logger(&path, LevelFilter::Off));
        assert!(!path.exists());
    }

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }
}
