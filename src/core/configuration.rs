//! Configuration resolution
//!
//! Merges built-in defaults, environment variables and command-line flags
//! into one [`Configuration`]. Precedence, highest first:
//!
//! 1. Command-line flags that were actually given
//! 2. Environment variables that are set and non-empty
//! 3. Built-in defaults

use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::config::defaults::{
    DEFAULT_DEBUG, DEFAULT_SLEEP_TIME_IN_SECONDS, KEYS_TO_REDACT, PROGRAM_UPDATED,
    PROGRAM_VERSION,
};
use crate::config::env::{
    ENV_DEBUG, ENV_DOCKER_COMPOSE_FILE, ENV_OUTPUT_FILE, ENV_SLEEP_TIME_IN_SECONDS,
    ENV_SUBCOMMAND,
};
use crate::core::messages::Message;
use crate::error::ConfigError;

/// Options that can be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKey {
    Debug,
    DockerComposeFile,
    OutputFile,
    SleepTimeInSeconds,
    Subcommand,
}

impl OptionKey {
    /// Name used in the audit log and in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::DockerComposeFile => "docker_compose_file",
            Self::OutputFile => "output_file",
            Self::SleepTimeInSeconds => "sleep_time_in_seconds",
            Self::Subcommand => "subcommand",
        }
    }
}

/// Where an option is looked up and what it falls back to
#[derive(Debug, Clone, Copy)]
pub struct OptionLocator {
    pub key: OptionKey,
    pub env: &'static str,
    pub default: Option<&'static str>,
}

/// Every configurable option
pub const CONFIGURATION_LOCATOR: &[OptionLocator] = &[
    OptionLocator {
        key: OptionKey::Debug,
        env: ENV_DEBUG,
        default: Some(DEFAULT_DEBUG),
    },
    OptionLocator {
        key: OptionKey::DockerComposeFile,
        env: ENV_DOCKER_COMPOSE_FILE,
        default: None,
    },
    OptionLocator {
        key: OptionKey::OutputFile,
        env: ENV_OUTPUT_FILE,
        default: None,
    },
    OptionLocator {
        key: OptionKey::SleepTimeInSeconds,
        env: ENV_SLEEP_TIME_IN_SECONDS,
        default: Some(DEFAULT_SLEEP_TIME_IN_SECONDS),
    },
    OptionLocator {
        key: OptionKey::Subcommand,
        env: ENV_SUBCOMMAND,
        default: None,
    },
];

/// A value before type conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Text from the environment, a default, or a string flag
    Text(String),
    /// A switch given on the command line
    Flag(bool),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Flags parsed from the command line
///
/// `None` means the flag was not given, which never overrides anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub debug: Option<bool>,
    pub docker_compose_file: Option<String>,
    pub output_file: Option<String>,
    pub sleep_time_in_seconds: Option<String>,
}

impl CliArgs {
    fn values(&self) -> Vec<(OptionKey, RawValue)> {
        let mut values = Vec::new();
        if let Some(debug) = self.debug {
            values.push((OptionKey::Debug, RawValue::Flag(debug)));
        }
        if let Some(path) = &self.docker_compose_file {
            values.push((OptionKey::DockerComposeFile, RawValue::Text(path.clone())));
        }
        if let Some(path) = &self.output_file {
            values.push((OptionKey::OutputFile, RawValue::Text(path.clone())));
        }
        if let Some(seconds) = &self.sleep_time_in_seconds {
            values.push((OptionKey::SleepTimeInSeconds, RawValue::Text(seconds.clone())));
        }
        values
    }
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub debug: bool,
    pub docker_compose_file: Option<String>,
    pub output_file: Option<String>,
    pub sleep_time_in_seconds: u64,
    pub subcommand: String,
    pub program_version: String,
    pub program_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<f64>,
}

/// Resolve configuration against the process environment
pub fn resolve(subcommand: &str, cli: &CliArgs) -> Result<Configuration, ConfigError> {
    resolve_with(subcommand, cli, |name| std::env::var(name).ok())
}

/// Resolve configuration using `lookup` to read environment variables
pub fn resolve_with<F>(
    subcommand: &str,
    cli: &CliArgs,
    lookup: F,
) -> Result<Configuration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut raw: BTreeMap<OptionKey, RawValue> = BTreeMap::new();

    for locator in CONFIGURATION_LOCATOR {
        if let Some(default) = locator.default {
            raw.insert(locator.key, RawValue::Text(default.to_string()));
        }
    }

    for locator in CONFIGURATION_LOCATOR {
        if let Some(value) = lookup(locator.env).filter(|v| !v.is_empty()) {
            raw.insert(locator.key, RawValue::Text(value));
        }
    }

    for (key, value) in cli.values() {
        raw.insert(key, value);
    }

    raw.insert(OptionKey::Subcommand, RawValue::Text(subcommand.to_string()));

    Configuration::from_raw(raw)
}

/// Permissive boolean conversion used for text values
pub fn parse_bool(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "true" | "1" | "t" | "y" | "yes"
    )
}

fn parse_integer(key: OptionKey, value: &RawValue) -> Result<u64, ConfigError> {
    let text = value.to_string();
    text.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidInteger {
            option: key.name().to_string(),
            value: text,
        })
}

fn now_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

impl Configuration {
    fn from_raw(mut raw: BTreeMap<OptionKey, RawValue>) -> Result<Self, ConfigError> {
        let debug = match raw.remove(&OptionKey::Debug) {
            Some(RawValue::Flag(flag)) => flag,
            Some(RawValue::Text(text)) => parse_bool(&text),
            None => false,
        };

        let sleep_time_in_seconds = match raw.remove(&OptionKey::SleepTimeInSeconds) {
            Some(value) => parse_integer(OptionKey::SleepTimeInSeconds, &value)?,
            None => 0,
        };

        let mut text = |key: OptionKey| raw.remove(&key).map(|v| v.to_string());

        Ok(Self {
            debug,
            docker_compose_file: text(OptionKey::DockerComposeFile),
            output_file: text(OptionKey::OutputFile),
            sleep_time_in_seconds,
            subcommand: text(OptionKey::Subcommand).unwrap_or_default(),
            program_version: PROGRAM_VERSION.to_string(),
            program_updated: PROGRAM_UPDATED.to_string(),
            start_time: None,
            stop_time: None,
            elapsed_time: None,
        })
    }

    /// Record the start time and build the entry audit message
    pub fn entry_message(&mut self) -> Message {
        self.start_time = Some(now_seconds());
        Message::Enter(self.audit_json())
    }

    /// Record stop and elapsed time and build the exit audit message
    pub fn exit_message(&mut self) -> Message {
        let stop_time = now_seconds();
        self.stop_time = Some(stop_time);
        self.elapsed_time = Some(stop_time - self.start_time.unwrap_or(stop_time));
        Message::Exit(self.audit_json())
    }

    /// Configuration as JSON with sorted keys, redacted unless debugging
    pub fn audit_json(&self) -> String {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if !self.debug {
            if let Some(map) = value.as_object_mut() {
                for key in KEYS_TO_REDACT {
                    map.remove(*key);
                }
            }
        }
        value.to_string()
    }
}
