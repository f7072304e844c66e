//! Command-line interface module
//!
//! This module handles argument parsing and dispatch.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

use crate::config::env::{ENV_DOCKER_LAUNCHED, ENV_SUBCOMMAND};
use crate::infra::lifecycle::Lifecycle;

/// Generate scripts that save the images of a docker-compose file
///
/// The generated save-images.sh pulls and saves every image so it can be
/// carried into an air-gapped environment. Every option can also be given
/// through a SENZING_* environment variable.
#[derive(Parser, Debug)]
#[command(name = "docker-compose-air-gapper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand (SENZING_SUBCOMMAND)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Non-empty value of an environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Cli {
    /// Execute the CLI command
    ///
    /// Without a subcommand on the command line, `SENZING_SUBCOMMAND` is used.
    pub async fn run(self, lifecycle: &mut Lifecycle) -> Result<()> {
        let command = match self.command {
            Some(command) => command,
            None => match env_value(ENV_SUBCOMMAND) {
                Some(name) => Commands::from_name(&name),
                None => return run_without_subcommand().await,
            },
        };

        let command = Arc::new(command);
        lifecycle.attach_arguments(Arc::clone(&command))?;
        command.run().await
    }
}

/// Show help; inside a container launched for testing, sleep instead of exiting
async fn run_without_subcommand() -> Result<()> {
    output::print_help()?;
    if env_value(ENV_DOCKER_LAUNCHED).is_some() {
        Commands::from_name("sleep").run().await?;
    }
    Ok(())
}
