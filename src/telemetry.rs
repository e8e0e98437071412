//! Log setup for the `wxcharts` binary and other embedders.
//!
//! Library code only emits `tracing` events; installing a subscriber is up to
//! the host. `RUST_LOG` wins over the level passed in.

/// Installs a compact stderr subscriber at `default_level` unless `RUST_LOG` is set.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// already exists.
#[must_use]
pub fn init_tracing(default_level: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_level;
        false
    }
}
