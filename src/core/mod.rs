//! Core business logic module
//!
//! This module contains all business logic for docker-compose-air-gapper.
//! File and process side effects belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`configuration`] - Merging defaults, environment and flags
//! - [`compose`] - Image extraction from docker-compose documents
//! - [`script`] - save-images.sh rendering
//! - [`sleep`] - Sleep subcommand logic
//! - [`messages`] - Numbered log messages

pub mod compose;
pub mod configuration;
pub mod messages;
pub mod script;
pub mod sleep;
