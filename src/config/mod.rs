//! Configuration and constants
//!
//! - [`defaults`] - Built-in default values and program metadata
//! - [`env`] - Environment variable names

pub mod defaults;
pub mod env;
