//! Logging setup
//!
//! Logs go to stderr so stdout carries only bot output (and clean JSON for
//! `run --json`). `RUST_LOG` wins over everything else.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Level used until the configuration has been read
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter directive for a configured level raised by `verbose` steps.
///
/// Unknown levels fall back to "warn"; verbosity never lowers the level.
pub fn filter_directive(level: &str, verbose: u8) -> String {
    let level = level.trim().to_ascii_lowercase();
    let base = LEVELS.iter().position(|l| *l == level).unwrap_or(1);
    let raised = match verbose {
        0 => base,
        n => base.max(1 + usize::from(n).min(3)),
    };
    LEVELS[raised].to_string()
}

/// Handle to the installed subscriber's filter
pub struct LoggingHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
    verbose: u8,
}

impl LoggingHandle {
    /// Switch to the configured `level`, still raised by `-v`.
    ///
    /// A filter taken from `RUST_LOG` is left untouched.
    pub fn apply_level(&self, level: &str) {
        if self.from_env {
            return;
        }
        let directive = filter_directive(level, self.verbose);
        if let Err(e) = self.filter.reload(EnvFilter::new(&directive)) {
            tracing::warn!(error = %e, "Failed to apply configured log level");
        }
    }
}

/// Install the global subscriber on stderr.
///
/// Runs before configuration is loaded, so the filter starts from `RUST_LOG`
/// or [`DEFAULT_LEVEL`] raised by `verbose`. If a subscriber is already set
/// the returned handle has no effect.
pub fn init_logging(verbose: u8) -> LoggingHandle {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let filter =
        env_filter.unwrap_or_else(|| EnvFilter::new(filter_directive(DEFAULT_LEVEL, verbose)));
    let (filter, handle) = reload::Layer::new(filter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    LoggingHandle {
        filter: handle,
        from_env,
        verbose,
    }
}
