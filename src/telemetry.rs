//! Opt-in tracing bootstrap for applications embedding `ambient-chart-rs`.
//!
//! Hosts that already run their own `tracing` subscriber should skip this
//! module and keep their filters; nothing here installs anything implicitly.

/// Installs a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when the subscriber was installed, `false` when nothing was
/// done (feature disabled, or a global subscriber is already set by the host).
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
