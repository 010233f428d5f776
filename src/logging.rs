use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes diagnostics on stderr. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "zoo_intake=debug" } else { "zoo_intake=info" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for the run summary and confirmation
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
