use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; passing `debug = true`
/// raises it to `debug` and lets the `RUST_LOG` environment variable
/// override the filter.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    // try_init so a second call (tests, embedders) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
