//! Logger bootstrap.
//!
//! Diagnostics go to stderr so they never mix with command output.
//! `RUST_LOG` wins over the configured level.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::{Error, Result};

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
pub const DEFAULT_LEVEL: &str = "warn";

/// Starts the global logger. The returned handle must be kept alive for the
/// lifetime of the process.
///
/// An unknown `level` falls back to [`DEFAULT_LEVEL`] so a bad config value
/// can still be fixed with `ecolife config --log-level`.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = startup_level(level);
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}

pub fn startup_level(configured: &str) -> &'static str {
    normalize_level(configured).unwrap_or_else(|e| {
        eprintln!("Warning: {}; using '{}'", e, DEFAULT_LEVEL);
        DEFAULT_LEVEL
    })
}

pub fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|candidate| **candidate == wanted)
        .copied()
        .ok_or_else(|| Error::InvalidLogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::models::config;

    #[test]
    fn normalize_level_accepts_any_case() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warn ").unwrap(), "warn");
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        let err = normalize_level("verbose").unwrap_err();
        assert!(matches!(err, Error::InvalidLogLevel(ref l) if l == "verbose"));
    }

    #[test]
    fn startup_level_keeps_valid_level() {
        assert_eq!(startup_level("Debug"), "debug");
    }

    #[test]
    fn bad_configured_level_does_not_block_startup() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config::config_path(dir.path()), r#"{"log_level":"verbose"}"#).unwrap();

        let settings = config::load_settings(dir.path()).unwrap();
        assert_eq!(settings.log_level, "verbose");
        assert_eq!(startup_level(&settings.log_level), DEFAULT_LEVEL);
    }
}
