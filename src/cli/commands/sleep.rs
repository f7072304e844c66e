//! CLI implementation for `sleep`

use anyhow::Result;

use crate::core::configuration::{resolve, CliArgs};
use crate::core::messages::Message;
use crate::core::sleep::{self, SleepPlan};
use crate::error::AirGapperError;

/// Subcommand name
pub const NAME: &str = "sleep";

/// Execute the sleep command
///
/// With a sleep time of 0 this only ends when the process is signalled.
pub async fn execute(args: &CliArgs) -> Result<()> {
    let mut config = resolve(NAME, args).map_err(AirGapperError::from)?;
    config.entry_message().log();

    let plan = SleepPlan::from_seconds(config.sleep_time_in_seconds);
    sleep::execute(plan, Message::log).await;

    config.exit_message().log();
    Ok(())
}
