//! Output helpers
//!
//! Generated scripts and usage help go to stdout; everything else is logged
//! to stderr through [`crate::core::messages`].

use std::io::Write;

use clap::CommandFactory;

use crate::cli::Cli;
use crate::core::messages::Message;
use crate::error::{AirGapperError, ConfigError, DocumentError, FileError};

/// Write a generated script followed by a newline
pub fn write_script<W: Write>(mut writer: W, script: &str) -> Result<(), FileError> {
    writeln!(writer, "{script}")
        .and_then(|()| writer.flush())
        .map_err(|e| FileError::WriteStdout {
            error: e.to_string(),
        })
}

/// Print a generated script to stdout
pub fn print_script(script: &str) -> Result<(), FileError> {
    write_script(std::io::stdout().lock(), script)
}

/// Print usage help to stdout
pub fn print_help() -> std::io::Result<()> {
    Cli::command().print_help()
}

/// Message number for a fatal error, 699 when it is not a domain error
pub fn fatal_index(error: &anyhow::Error) -> u16 {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<AirGapperError>() {
            return e.message_index();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return e.message_index();
        }
        if let Some(e) = cause.downcast_ref::<FileError>() {
            return e.message_index();
        }
        if let Some(e) = cause.downcast_ref::<DocumentError>() {
            return e.message_index();
        }
    }
    699
}

/// Log a fatal error followed by the termination notice
pub fn display_error(error: &anyhow::Error) {
    Message::Fatal {
        index: fatal_index(error),
        text: format!("{error:#}"),
    }
    .log();
    Message::TerminatedWithError.log();
}
