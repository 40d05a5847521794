//! Tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. When a log file is
/// configured and can be opened, output goes there without ANSI colors;
/// otherwise it goes to stdout. Calling this twice keeps the first
/// subscriber.
pub fn init_logging(config: &LoggingConfig) {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    };

    let log_file = config.file.as_ref().and_then(|path| {
        open_log_file(path)
            .map_err(|e| eprintln!("Failed to open log file {}: {e}", path.display()))
            .ok()
    });

    let installed = match (log_file, config.json) {
        (Some(file), true) => tracing::subscriber::set_global_default(
            fmt::Subscriber::builder()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .json()
                .finish(),
        ),
        (Some(file), false) => tracing::subscriber::set_global_default(
            fmt::Subscriber::builder()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish(),
        ),
        (None, true) => tracing::subscriber::set_global_default(
            fmt::Subscriber::builder()
                .with_env_filter(filter())
                .json()
                .finish(),
        ),
        (None, false) => tracing::subscriber::set_global_default(
            fmt::Subscriber::builder()
                .with_env_filter(filter())
                .with_target(true)
                .with_line_number(false)
                .finish(),
        ),
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

fn open_log_file(path: &std::path::Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("toolfield.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
