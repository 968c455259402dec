//! File logging for namescope processes.
//!
//! Logs go to `$HOME/.namescope/logs/<component>.<date>`. The filter is read from
//! `NAMESCOPE_LOG` and otherwise keeps namescope crates at `info`, everything else at `warn`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "NAMESCOPE_LOG";

const NAMESCOPE_CRATES: [&str; 3] = ["namescope_core", "namescope_runtime", "namescope_cli"];

pub fn log_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".namescope").join("logs")
}

/// Directive used when `NAMESCOPE_LOG` is unset, e.g. `warn,namescope_core=info,...`.
/// `verbose` lowers namescope crates to `debug`.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    std::iter::once("warn".to_string())
        .chain(NAMESCOPE_CRATES.iter().map(|name| format!("{name}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the subscriber for `component`. With `to_stderr`, records are mirrored
/// to stderr and the default level drops to `debug`.
///
/// The returned guard flushes the file writer on drop.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    let file_appender = tracing_appender::rolling::daily(&dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(to_stderr)));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    // A subscriber may already be installed (tests, embedding hosts).
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Subscriber already installed; {} logs not redirected", component);
    }

    guard
}
