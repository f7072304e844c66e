//! docker-compose-air-gapper - save docker-compose images for air-gapped hosts
//!
//! This library reads a docker-compose file, collects the image of every
//! service, and renders a bash script that pulls, saves and archives those
//! images together with a companion `load-images.sh`.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and dispatch
//! - [`core`] - Business logic (configuration, extraction, rendering)
//! - [`infra`] - Infrastructure layer (filesystem, logging, signals)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
