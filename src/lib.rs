//! jumbo: apply the Jumbo feature template to a freshly generated Rails application.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ApplyOutcome, Mode, apply, apply_at, apply_with};
pub use app::config::{Overrides, Settings};
pub use domain::{AppError, CATALOG, Feature, FeatureGroup, SelectionMap, Step};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "JUMBO_LOG";

/// Install the stderr `tracing` subscriber, filtered by `JUMBO_LOG` (default `warn`).
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
