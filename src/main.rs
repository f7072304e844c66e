//! docker-compose-air-gapper CLI
//!
//! Entry point for the docker-compose-air-gapper command-line application.

use anyhow::Result;
use clap::Parser;

use docker_compose_air_gapper::cli::output::display_error;
use docker_compose_air_gapper::cli::Cli;
use docker_compose_air_gapper::infra::lifecycle::Lifecycle;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging and signal handling come up before arguments are parsed
    let mut lifecycle = Lifecycle::start()?;

    let cli = Cli::parse();

    // Run the command and handle errors
    match cli.run(&mut lifecycle).await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
