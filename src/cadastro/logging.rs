//! Logging setup for the `cadastro` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary, once, at startup.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How chatty the binary is on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Normal,
    /// Debug and above: every file read and rewrite.
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }

    fn default_filter(&self) -> String {
        format!("cadastro={}", self.level())
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_filter()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    // Ignore the error if a subscriber is already set
    let _ = subscriber.try_init();
}
