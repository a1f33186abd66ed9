use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr so stdout carries only program output. `RUST_LOG`
/// overrides `verbosity`-derived filtering when set. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let fallback = match verbosity {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init();
}
