//! Infrastructure layer
//!
//! Handles filesystem access, logging and process signals.
//! This module is the only place where process-wide state is set up.

pub mod filesystem;
pub mod lifecycle;
pub mod logging;
pub mod signals;
