//! CLI implementation for `create-save-images`
//!
//! Reads a docker-compose file (or stdin), and writes the rendered
//! save-images.sh to the output file (or stdout).

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::print_script;
use crate::core::compose::read_images;
use crate::core::configuration::{resolve, CliArgs};
use crate::core::script::render;
use crate::error::AirGapperError;
use crate::infra::filesystem::write_file;

/// Subcommand name
pub const NAME: &str = "create-save-images";

/// Execute the create-save-images command
pub async fn execute(args: &CliArgs) -> Result<()> {
    let mut config = resolve(NAME, args).map_err(AirGapperError::from)?;
    config.entry_message().log();

    let compose_file = config.docker_compose_file.as_deref().map(Path::new);
    let images = read_images(compose_file).with_context(|| match compose_file {
        Some(path) => format!("Failed to read images from {}", path.display()),
        None => "Failed to read images from standard input".to_string(),
    })?;
    tracing::debug!(count = images.len(), "Collected service images");

    let script = render(&images);

    match config.output_file.as_deref() {
        Some(path) => write_file(Path::new(path), &script)
            .map_err(AirGapperError::from)
            .with_context(|| format!("Failed to write script to {path}"))?,
        None => print_script(&script).map_err(AirGapperError::from)?,
    }

    config.exit_message().log();
    Ok(())
}
