//! Numbered log messages
//!
//! Every operational log line carries a code of the form
//! `senzing-5028NNNNx`, where `NNNN` is the message number and `x` the
//! severity letter. Message numbers are grouped by hundreds:
//!
//! - 1xx-2xx informational
//! - 3xx-4xx warnings
//! - 5xx user configuration issues
//! - 7xx internal errors
//! - 9xx debugging

use std::fmt;

use crate::config::defaults::PRODUCT_ID;

/// Message severity, reflected in the code suffix and the tracing level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Debug,
}

impl Severity {
    fn suffix(self) -> char {
        match self {
            Self::Info => 'I',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Debug => 'D',
        }
    }
}

/// Build the identifier for a message number
pub fn message_code(index: u16, severity: Severity) -> String {
    format!("senzing-{PRODUCT_ID}{index:04}{}", severity.suffix())
}

/// Catalogue of messages the tool emits
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// 294
    Version { version: String, updated: String },
    /// 295
    SleepingInfinitely,
    /// 296
    Sleeping { seconds: u64 },
    /// 297, payload is the audit JSON
    Enter(String),
    /// 298, payload is the audit JSON or the parsed arguments
    Exit(String),
    /// 696
    BadSubcommand(String),
    /// 698
    TerminatedWithError,
    /// Fatal error with its own number
    Fatal { index: u16, text: String },
    /// 901
    SignalReceived(String),
    /// 902
    Arguments(String),
    /// 903
    BuildInfo { timestamp: String, sha: String },
    /// 998
    DebuggingEnabled,
}

impl Message {
    /// Message number
    pub fn index(&self) -> u16 {
        match self {
            Self::Version { .. } => 294,
            Self::SleepingInfinitely => 295,
            Self::Sleeping { .. } => 296,
            Self::Enter(_) => 297,
            Self::Exit(_) => 298,
            Self::BadSubcommand(_) => 696,
            Self::TerminatedWithError => 698,
            Self::Fatal { index, .. } => *index,
            Self::SignalReceived(_) => 901,
            Self::Arguments(_) => 902,
            Self::BuildInfo { .. } => 903,
            Self::DebuggingEnabled => 998,
        }
    }

    /// Message severity
    pub fn severity(&self) -> Severity {
        match self {
            Self::Version { .. }
            | Self::SleepingInfinitely
            | Self::Sleeping { .. }
            | Self::Enter(_)
            | Self::Exit(_) => Severity::Info,
            Self::BadSubcommand(_) => Severity::Warning,
            Self::TerminatedWithError | Self::Fatal { .. } => Severity::Error,
            Self::SignalReceived(_)
            | Self::Arguments(_)
            | Self::BuildInfo { .. }
            | Self::DebuggingEnabled => Severity::Debug,
        }
    }

    /// Full identifier, e.g. `senzing-50280297I`
    pub fn code(&self) -> String {
        message_code(self.index(), self.severity())
    }

    /// Emit the message at the tracing level matching its severity
    pub fn log(&self) {
        match self.severity() {
            Severity::Info => tracing::info!("{self}"),
            Severity::Warning => tracing::warn!("{self}"),
            Severity::Error => tracing::error!("{self}"),
            Severity::Debug => tracing::debug!("{self}"),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.code())?;
        match self {
            Self::Version { version, updated } => {
                write!(f, "Version: {version}  Updated: {updated}")
            }
            Self::SleepingInfinitely => write!(f, "Sleeping infinitely."),
            Self::Sleeping { seconds } => write!(f, "Sleeping {seconds} seconds."),
            Self::Enter(payload) => write!(f, "Enter {payload}"),
            Self::Exit(payload) => write!(f, "Exit {payload}"),
            Self::BadSubcommand(name) => write!(f, "Bad SENZING_SUBCOMMAND: {name}."),
            Self::TerminatedWithError => write!(f, "Program terminated with error."),
            Self::Fatal { text, .. } | Self::SignalReceived(text) | Self::Arguments(text) => {
                write!(f, "{text}")
            }
            Self::BuildInfo { timestamp, sha } => {
                write!(f, "Built: {timestamp}  Commit: {sha}")
            }
            Self::DebuggingEnabled => write!(f, "Debugging enabled."),
        }
    }
}
