//! Logging setup for the stackshot CLI.
//!
//! Built on the `tracing` ecosystem. The validated `[logging]` config
//! section sets the baseline; the `--verbose` and `--json-logs` flags
//! override it, and `RUST_LOG` overrides the level entirely.

use stackshot_core::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber.
///
/// Logs go to stderr: stdout is reserved for the per-image progress
/// lines and command output.
pub fn init(config: &LoggingConfig, verbose: bool, json_logs: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(config, verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    if use_json(config, json_logs) {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// The level the filter is built from. `--verbose` raises the
/// configured level to debug but never lowers an already chattier one.
fn effective_level<'a>(config: &'a LoggingConfig, verbose: bool) -> &'a str {
    if verbose && config.level != "trace" {
        "debug"
    } else {
        &config.level
    }
}

/// JSON output when either the flag or the config file asks for it.
fn use_json(config: &LoggingConfig, json_logs: bool) -> bool {
    json_logs || config.format == "json"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_verbose_raises_level_to_debug() {
        assert_eq!(effective_level(&logging("info", "pretty"), true), "debug");
        assert_eq!(effective_level(&logging("warn", "pretty"), true), "debug");
    }

    #[test]
    fn test_verbose_keeps_trace() {
        assert_eq!(effective_level(&logging("trace", "pretty"), true), "trace");
    }

    #[test]
    fn test_config_level_used_without_verbose() {
        assert_eq!(effective_level(&logging("warn", "pretty"), false), "warn");
        assert_eq!(effective_level(&logging("debug", "pretty"), false), "debug");
    }

    #[test]
    fn test_json_from_flag_or_config() {
        assert!(use_json(&logging("info", "json"), false));
        assert!(use_json(&logging("info", "pretty"), true));
        assert!(!use_json(&logging("info", "pretty"), false));
    }
}
