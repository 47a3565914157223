use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` applies only when no `-v` was given.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Colour codes only when the log stream is an interactive terminal.
pub fn use_ansi<S: IsTerminal>(stream: &S) -> bool {
    stream.is_terminal()
}

pub fn init_logging(verbosity: u8) {
    // Reports go to stdout, so logs stay on stderr.
    let _ = fmt()
        .with_env_filter(filter_for(verbosity))
        .with_target(false)
        .with_level(true)
        .with_ansi(use_ansi(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
