//! Logging - tracing subscriber setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::config::LogConfig;
use crate::error::Result;
use crate::utils::config_store;

/// Daily log file name prefix inside `<data dir>/logs`
const LOG_FILE_PREFIX: &str = "contact-table.log";

/// Install the global subscriber
///
/// Directives from `RUST_LOG` are combined with `config.level`. The
/// returned guard must be held until exit so buffered file output is
/// flushed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(default_directive(&config.level));

    let (file_layer, guard, file_error) = if config.file {
        match file_writer() {
            Ok((writer, guard)) => (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
                None,
            ),
            Err(err) => (None, None, Some(err)),
        }
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(err) = file_error {
        tracing::warn!(%err, "File logging disabled");
    }
    guard
}

/// Parse the configured level, falling back to `info`
fn default_directive(level: &str) -> Directive {
    level
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

fn file_writer() -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = config_store::get_or_create_data_dir()?.join("logs");
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_becomes_directive() {
        assert_eq!(default_directive("debug").to_string(), "debug");
        assert_eq!(
            default_directive("contact_table=trace").to_string(),
            "contact_table=trace"
        );
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        assert_eq!(default_directive("contact_table=verbose").to_string(), "info");
    }

    #[test]
    fn test_filter_keeps_configured_directive() {
        let filter = EnvFilter::new("contact_table=warn").add_directive(default_directive("debug"));
        let rendered = filter.to_string();
        assert!(rendered.contains("contact_table=warn"));
        assert!(rendered.contains("debug"));
    }
}
