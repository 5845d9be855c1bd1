//! Opt-in tracing setup for hosts and the bundled trace tool.
//!
//! `RUST_LOG` always wins; the directive passed here only applies when the
//! environment sets no filter.

/// Installs a compact fmt subscriber filtered by `fallback_directive`.
///
/// Returns `false` without the `telemetry` feature, for an unparsable
/// directive, or when the host already installed a global subscriber.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback_directive) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

/// Same as [`init_tracing`] with an `info` fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}
