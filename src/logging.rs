use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::cli::ColorChoice;

/// Console filter used for a given number of `-v` flags.
pub fn console_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "info,libshapecheck=debug",
        2 => "info,libshapecheck=trace",
        _ => "trace",
    }
}

/// Installs the stderr logger for the CLI. `RUST_LOG` takes precedence over
/// the verbosity flag. Records emitted through the `log` crate are forwarded
/// into `tracing` as well.
pub fn init_logging(verbosity: u8, color: ColorChoice) {
    let console_env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_filter(verbosity)));

    let use_ansi = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi)
        .without_time()
        .with_target(false)
        .with_thread_names(false)
        .with_level(true)
        .with_filter(console_env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
