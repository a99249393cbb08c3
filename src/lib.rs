//! M269 ADTs Library
//!
//! Textbook abstract data types for teaching algorithmic complexity: a
//! [`Stack`], a [`Queue`] and a [`Bag`] (multiset), each documented with the
//! cost of every operation.
//!
//! # Representations
//!
//! | ADT   | Default                     | Alternative         |
//! |-------|-----------------------------|---------------------|
//! | Stack | [`VecStack`]                | [`LinkedListStack`] |
//! | Queue | [`LinkedListQueue`]         | [`VecQueue`]        |
//! | Bag   | hash map of item to copies  |                     |
//!
//! The vector-backed queue dequeues in O(n) and the linked one in O(1), which
//! is why the linked one is the default `Queue`. Both stacks are O(1), so the
//! simpler vector-backed one is the default `Stack`.
//!
//! # Preconditions
//!
//! Taking from an empty stack or queue, or removing an absent item from a
//! bag, returns an error and leaves the container unchanged.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::{
    Bag, Fifo, Lifo, LinkedListQueue, LinkedListStack, Queue, Stack, VecQueue, VecStack,
};

use std::path::Path;

use error::config::ConfigError;
use tracing_subscriber::fmt::MakeWriter;

/// Version information for the M269 ADTs library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (defaults are used if the file does
/// not exist) and `M269__*` environment variables, then installs logging to
/// standard output.
///
/// # Returns
///
/// The loaded configuration, for building containers with `from_config`.
pub fn init<P: AsRef<Path>>(config_path: Option<P>) -> error::AdtResult<config::AdtConfig> {
    init_with_writer(config_path, std::io::stdout)
}

/// Like [`init`], but log output goes to `writer`.
///
/// Logging is installed before anything about the configuration is reported,
/// so a missing file is still announced on the new subscriber.
pub fn init_with_writer<P, W>(
    config_path: Option<P>,
    writer: W,
) -> error::AdtResult<config::AdtConfig>
where
    P: AsRef<Path>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let loader = config::ConfigLoader::new(config_path.as_ref(), config::ENV_PREFIX);
    let (config, missing) = match loader.load() {
        Err(ConfigError::FileNotFound(path)) => (loader.load_defaults()?, Some(path)),
        result => (result?, None),
    };

    logging::init_logging_with_writer(&config.log, writer)?;
    match missing {
        Some(path) => tracing::warn!("Configuration file not found at: {}", path.display()),
        None if config_path.is_some() => tracing::debug!("configuration file loaded"),
        None => {}
    }
    tracing::info!(version = VERSION, "M269 ADTs initialized");

    Ok(config)
}
