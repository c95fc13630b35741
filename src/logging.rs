//! Tracing subscriber setup.
//!
//! The meter owns the whole screen, so it only logs when a log file is
//! given. Console commands log to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file.
    File(&'a Path),
    Stderr,
    /// Install nothing; all events are dropped.
    Disabled,
}

/// Filter directive for a `-v` count when `RUST_LOG` is unset.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count.
pub fn init(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    match target {
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {}", e))
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e)),
        LogTarget::Disabled => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init(0, LogTarget::Disabled).is_ok());
    }
}
