//! Logging setup for the M269 ADTs library.
//!
//! The data structures emit `tracing` events (for example when an operation
//! is rejected on an empty container). Applications that want to see them
//! install a subscriber with [`init_logging`].

use crate::config::LogConfig;
use crate::error::{AdtError, AdtResult};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber configured by `config`, writing to
/// standard output.
///
/// `RUST_LOG`, when set, overrides the configured level.
///
/// # Errors
///
/// [`AdtError::Logging`] if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> AdtResult<()> {
    init_logging_with_writer(config, std::io::stdout)
}

/// Like [`init_logging`], but formatted events go to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> AdtResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| AdtError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_rejected() {
        let config = LogConfig {
            level: "debug".to_string(),
            ..LogConfig::default()
        };

        // Only one subscriber can ever be global.
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(AdtError::Logging(_))));
    }
}
