//! CLI command implementations
//!
//! Each command is implemented in its own submodule. The set of commands is
//! closed; anything else lands in [`Commands::Unknown`].

pub mod create_save_images;
pub mod sleep;
pub mod version;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output;
use crate::core::configuration::CliArgs;
use crate::core::messages::Message;

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the save-images.sh file
    CreateSaveImages {
        /// Location of 'docker-compose.yaml' file. Default: STDIN
        #[arg(long, value_name = "SENZING_DOCKER_COMPOSE_FILE")]
        docker_compose_file: Option<String>,

        /// Send output to this file. Default: STDOUT
        #[arg(long, value_name = "SENZING_OUTPUT_FILE")]
        output_file: Option<String>,

        /// Enable debugging (SENZING_DEBUG). Default: False
        #[arg(long)]
        debug: bool,
    },

    /// Do nothing but sleep. For Docker testing
    Sleep {
        /// Sleep time in seconds. Default: 0 (infinite)
        #[arg(long, value_name = "SENZING_SLEEP_TIME_IN_SECONDS")]
        sleep_time_in_seconds: Option<String>,
    },

    /// Print version of program
    Version,

    /// For Docker acceptance testing
    DockerAcceptanceTest,

    /// Anything that is not a known subcommand
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Commands {
    /// Command for a subcommand name given outside the command line
    pub fn from_name(name: &str) -> Self {
        match name {
            create_save_images::NAME => Self::CreateSaveImages {
                docker_compose_file: None,
                output_file: None,
                debug: false,
            },
            sleep::NAME => Self::Sleep {
                sleep_time_in_seconds: None,
            },
            version::NAME => Self::Version,
            docker_acceptance_test::NAME => Self::DockerAcceptanceTest,
            other => Self::Unknown(vec![other.to_string()]),
        }
    }

    /// Subcommand name as typed by the user
    pub fn name(&self) -> &str {
        match self {
            Self::CreateSaveImages { .. } => create_save_images::NAME,
            Self::Sleep { .. } => sleep::NAME,
            Self::Version => version::NAME,
            Self::DockerAcceptanceTest => docker_acceptance_test::NAME,
            Self::Unknown(args) => args.first().map_or("", String::as_str),
        }
    }

    /// Flags given on the command line, for configuration resolution
    pub fn cli_args(&self) -> CliArgs {
        match self {
            Self::CreateSaveImages {
                docker_compose_file,
                output_file,
                debug,
            } => CliArgs {
                debug: debug.then_some(true),
                docker_compose_file: docker_compose_file.clone(),
                output_file: output_file.clone(),
                ..CliArgs::default()
            },
            Self::Sleep {
                sleep_time_in_seconds,
            } => CliArgs {
                sleep_time_in_seconds: sleep_time_in_seconds.clone(),
                ..CliArgs::default()
            },
            Self::Version | Self::DockerAcceptanceTest | Self::Unknown(_) => CliArgs::default(),
        }
    }

    /// Execute the command
    pub async fn run(&self) -> Result<()> {
        match self {
            Self::CreateSaveImages { .. } => create_save_images::execute(&self.cli_args()).await,
            Self::Sleep { .. } => sleep::execute(&self.cli_args()).await,
            Self::Version => version::execute(self),
            Self::DockerAcceptanceTest => docker_acceptance_test::execute(&self.cli_args()),
            Self::Unknown(_) => {
                Message::BadSubcommand(self.name().to_string()).log();
                output::print_help()?;
                Ok(())
            }
        }
    }
}
