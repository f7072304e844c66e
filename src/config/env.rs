//! Environment variable names
//!
//! Every option of the tool can be supplied through one of these variables.
//! Command-line flags win over the environment, the environment wins over the
//! built-in defaults in [`super::defaults`].

pub const ENV_DEBUG: &str = "SENZING_DEBUG";
pub const ENV_DOCKER_COMPOSE_FILE: &str = "SENZING_DOCKER_COMPOSE_FILE";
pub const ENV_OUTPUT_FILE: &str = "SENZING_OUTPUT_FILE";
pub const ENV_SLEEP_TIME_IN_SECONDS: &str = "SENZING_SLEEP_TIME_IN_SECONDS";
pub const ENV_SUBCOMMAND: &str = "SENZING_SUBCOMMAND";
pub const ENV_LOG_LEVEL: &str = "SENZING_LOG_LEVEL";

/// Set by container images; turns an empty invocation into `sleep`
pub const ENV_DOCKER_LAUNCHED: &str = "SENZING_DOCKER_LAUNCHED";
