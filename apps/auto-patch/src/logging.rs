//! Tracing subscriber setup
//!
//! Two sinks, each with its own level floor: the systemd journal and, when
//! attached to a terminal, stderr. `RUST_LOG` replaces both floors.

use std::io::IsTerminal;

use autopatch_config::LoggingConfig;
use autopatch_events::tracing_level;
use autopatch_types::Severity;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn level_filter(level: Severity, overridden: bool) -> LevelFilter {
    if overridden {
        LevelFilter::TRACE
    } else {
        LevelFilter::from_level(tracing_level(level))
    }
}

/// Install the global subscriber
///
/// Must be called exactly once per process.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = std::env::var_os(EnvFilter::DEFAULT_ENV)
        .and_then(|_| EnvFilter::try_from_default_env().ok());
    let overridden = env_filter.is_some();

    let (journal, journal_error) = match tracing_journald::layer() {
        Ok(layer) => (
            Some(layer.with_filter(level_filter(config.journal_level, overridden))),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    let stderr = std::io::stderr().is_terminal().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(level_filter(config.stderr_level, overridden))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(journal)
        .with(stderr)
        .init();

    if let Some(e) = journal_error {
        tracing::warn!("systemd journal unavailable, not logging to it: {e}");
    }
}
