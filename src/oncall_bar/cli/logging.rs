use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Overrides the verbosity flags, e.g. `ONCALL_LOG=oncall_bar=debug`.
pub const LOG_ENV: &str = "ONCALL_LOG";

/// Install the global subscriber. Logs go to stderr without colors; SwiftBar
/// only reads stdout.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
