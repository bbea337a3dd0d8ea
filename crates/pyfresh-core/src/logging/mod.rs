use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false (the default), only error-level events are emitted
/// so stdout stays clean for user-facing output. When `verbose` is true,
/// info-level and above events are emitted to stderr as JSON.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };

    // Cover both the CLI crate and the core library targets
    let filter = EnvFilter::from_default_env()
        .add_directive(
            format!("pyfresh={level}")
                .parse()
                .expect("Invalid log directive"),
        )
        .add_directive(
            format!("pyfresh_core={level}")
                .parse()
                .expect("Invalid log directive"),
        );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
