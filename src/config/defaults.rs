//! Default configuration values

/// Program version from Cargo.toml
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date of the last functional update to the generated script
pub const PROGRAM_UPDATED: &str = "2022-09-29";

/// Product identifier embedded in every message code
pub const PRODUCT_ID: &str = "5028";

/// Default for `--debug`
pub const DEFAULT_DEBUG: &str = "false";

/// Default for `--sleep-time-in-seconds` (0 means forever)
pub const DEFAULT_SLEEP_TIME_IN_SECONDS: &str = "0";

/// Length of one increment when sleeping forever
pub const INFINITE_SLEEP_INTERVAL_SECONDS: u64 = 3600;

/// Log level used when `SENZING_LOG_LEVEL` is unset or unknown
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration keys never written to the audit log unless debugging
pub const KEYS_TO_REDACT: &[&str] = &["password"];

/// Build timestamp emitted by the build script, if available
pub const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

/// Git commit the binary was built from, if available
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");
