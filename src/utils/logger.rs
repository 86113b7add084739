use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used by the shell. `RUST_LOG` always wins.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "pretty_numbers=debug,info"
    } else {
        "pretty_numbers=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Logs go to stderr so they never interleave with formatted output on stdout.
pub fn init_cli_logger(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
