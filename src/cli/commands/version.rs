//! CLI implementation for `version`

use anyhow::Result;

use crate::cli::commands::Commands;
use crate::config::defaults::{BUILD_TIMESTAMP, GIT_SHA, PROGRAM_UPDATED, PROGRAM_VERSION};
use crate::core::messages::Message;

/// Subcommand name
pub const NAME: &str = "version";

/// Execute the version command
pub fn execute(command: &Commands) -> Result<()> {
    Message::Version {
        version: PROGRAM_VERSION.to_string(),
        updated: PROGRAM_UPDATED.to_string(),
    }
    .log();
    Message::BuildInfo {
        timestamp: BUILD_TIMESTAMP.unwrap_or("unknown").to_string(),
        sha: GIT_SHA.unwrap_or("unknown").to_string(),
    }
    .log();
    Message::Arguments(format!("{NAME} {command:?}")).log();
    Ok(())
}
