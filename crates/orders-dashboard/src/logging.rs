//! Process-wide tracing subscriber for the dashboard, configured from [`LogConfig`].

use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::LogConfig;

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_LOG_FILE: &str = "orders.logs.jsonl";

/// Explicit level first, then `RUST_LOG`, then `warn`.
fn resolve_env_filter(level: Option<&str>) -> EnvFilter {
    if let Some(level) = level {
        match EnvFilter::try_new(level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring log level {level:?}: {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Open `path` for JSON-lines logging, creating parent directories.
fn json_log_writer(path: &Path) -> Result<RollingFileAppender, String> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| format!("create {}: {}", dir.display(), e))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| format!("open {}: {}", path.display(), e))
}

/// Install the subscriber once per process. JSON lines go to
/// `json_log_path` when set; otherwise compact logs go to stderr, since
/// stdout carries the report. An unusable log file is reported on stderr and
/// logging falls back to the console.
pub fn init_logging(config: &LogConfig) {
    INIT.get_or_init(|| {
        if !config.enabled {
            return;
        }

        let env_filter = resolve_env_filter(config.level.as_deref());
        let json_writer = config
            .json_log_path
            .as_deref()
            .and_then(|path| match json_log_writer(path) {
                Ok(writer) => Some(writer),
                Err(message) => {
                    eprintln!("JSON log file unavailable, logging to stderr instead: {message}");
                    None
                }
            });

        if let Some(writer) = json_writer {
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(false)
                .with_writer(writer);
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .try_init();
        } else {
            let console_layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .try_init();
        }
    });
}
