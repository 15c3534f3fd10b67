use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr. Defaults to `info`; `--debug` switches to
/// `debug` and lets `RUST_LOG` pick the filter.
pub fn init(debug: bool) {
    // RUST_LOG is ignored unless --debug is given.
    let filter = if debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("speed_overlay=debug,info"))
    } else {
        EnvFilter::new("info")
    };

    // The NMEA reader logs from its own thread.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init();
}
