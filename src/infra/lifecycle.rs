//! Process lifecycle context
//!
//! Owns the process-wide pieces: the logging subscriber and the active
//! signal listener. Created once in `main` and passed to the dispatcher.

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::env::ENV_LOG_LEVEL;
use crate::core::messages::Message;
use crate::infra::logging;
use crate::infra::signals::SignalListener;

/// Logging and signal handling for one invocation
#[derive(Debug)]
pub struct Lifecycle {
    listener: SignalListener,
}

impl Lifecycle {
    /// Initialise logging and trap signals until arguments are known
    pub fn start() -> Result<Self> {
        let level = std::env::var(ENV_LOG_LEVEL).ok();
        logging::init(level.as_deref());
        Message::DebuggingEnabled.log();

        let listener =
            SignalListener::bootstrap().context("Failed to install signal handlers")?;
        Ok(Self { listener })
    }

    /// Swap the bootstrap listener for one that reports `arguments` on exit
    pub fn attach_arguments<T>(&mut self, arguments: Arc<T>) -> Result<()>
    where
        T: Debug + Send + Sync + 'static,
    {
        self.listener = SignalListener::with_arguments(arguments)
            .context("Failed to install signal handlers")?;
        Ok(())
    }
}
