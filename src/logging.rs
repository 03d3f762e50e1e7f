use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "study-plan.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    /// Daily rolling file output goes here when set.
    pub file_dir: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env(level: impl Into<String>) -> Self {
        let file_dir = file_logging_enabled().then(|| {
            PathBuf::from(std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()))
        });
        Self {
            level: level.into(),
            file_dir,
        }
    }
}

/// Keeps the non-blocking file writer flushing until dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

fn file_logging_enabled() -> bool {
    std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

pub fn init_tracing(settings: &LogSettings) -> Option<FileLogGuard> {
    let env_filter =
        EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);

    let file_dir = settings.file_dir.as_ref().filter(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            false
        }
    });

    let (file_layer, guard) = match file_dir {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(FileLogGuard { _guard: guard }))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
