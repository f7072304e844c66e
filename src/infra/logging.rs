//! Logging setup
//!
//! Logs go to stderr so a script printed on stdout stays clean. The level
//! comes from `SENZING_LOG_LEVEL`.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_LEVEL;

/// Map a `SENZING_LOG_LEVEL` value to a tracing level
///
/// Unknown values fall back to info.
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "notset" | "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warning" | "warn" => Level::WARN,
        "error" | "fatal" | "critical" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber
///
/// Returns false when a subscriber was already installed.
pub fn init(level_setting: Option<&str>) -> bool {
    let level = parse_level(level_setting.unwrap_or(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .parse_lossy(""),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_values() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("critical"), Level::ERROR);
        assert_eq!(parse_level("fatal"), Level::ERROR);
        assert_eq!(parse_level("notset"), Level::TRACE);
    }

    #[test]
    fn test_parse_level_unknown_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
