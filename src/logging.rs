//! Logging facade over [`tracing`] for console diagnostics.
//!
//! `main` installs a `tracing-subscriber` console layer once via
//! [`init_subscriber`]; commands receive a [`Logger`] and never touch the
//! subscriber directly. All diagnostics go to stderr so that command output
//! on stdout stays clean for piping.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for console output.
///
/// The verbose flag selects `debug` over `info` as the fallback level;
/// `RUST_LOG` overrides both. Calling this more than once (as tests do) is
/// harmless: later installations are ignored.
pub fn init_subscriber(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Structured logger handed to command handlers.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a stage header (major step of a command).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "inifmt::stage", "{msg}");
    }

    /// Log a detail message, visible with `--verbose`.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn logger_records_verbosity() {
        assert!(Logger::new(true).is_verbose());
        assert!(!Logger::new(false).is_verbose());
    }

    #[test]
    fn logging_methods_do_not_panic_without_a_subscriber() {
        let log = Logger::new(false);
        log.error("e");
        log.warn("w");
        log.info("i");
        log.stage("s");
        log.debug("d");
    }

    #[test]
    fn init_subscriber_is_idempotent() {
        init_subscriber(false);
        init_subscriber(true);
    }
}
