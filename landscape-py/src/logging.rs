use tracing_subscriber::EnvFilter;

/// Install a stdout subscriber so `verbose=True` rows reach the notebook.
///
/// `RUST_LOG` overrides the default `info` level. A subscriber installed by
/// the host process is left in place.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
