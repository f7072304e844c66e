//! Termination signal listeners
//!
//! SIGINT and SIGTERM end the process with status 0. A listener is a spawned
//! task; dropping the [`SignalListener`] aborts it, so replacing one listener
//! with another deregisters the old behaviour.

use std::fmt::Debug;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::core::messages::Message;

/// Handle to a running signal listener task
#[derive(Debug)]
pub struct SignalListener {
    handle: JoinHandle<()>,
}

impl SignalListener {
    /// Listener used before arguments are parsed: exit immediately
    pub fn bootstrap() -> std::io::Result<Self> {
        Self::spawn(|signal| {
            Message::SignalReceived(format!("Received {signal}")).log();
        })
    }

    /// Listener that logs the exit message with the parsed arguments
    pub fn with_arguments<T>(arguments: Arc<T>) -> std::io::Result<Self>
    where
        T: Debug + Send + Sync + 'static,
    {
        Self::spawn(move |signal| {
            Message::Exit(format!("{arguments:?}")).log();
            Message::SignalReceived(format!("Received {signal}")).log();
        })
    }

    /// Register the signal streams now and run `on_signal` before exiting
    ///
    /// Must be called from within a tokio runtime.
    fn spawn<F>(on_signal: F) -> std::io::Result<Self>
    where
        F: FnOnce(&str) + Send + 'static,
    {
        let mut termination = Termination::register()?;
        let handle = tokio::spawn(async move {
            let signal = termination.recv().await;
            on_signal(signal);
            std::process::exit(0);
        });
        Ok(Self { handle })
    }
}

impl Drop for SignalListener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(unix)]
struct Termination {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Termination {
    fn register() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }
}

#[cfg(not(unix))]
struct Termination;

#[cfg(not(unix))]
impl Termination {
    fn register() -> std::io::Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> &'static str {
        let _ = tokio::signal::ctrl_c().await;
        "SIGINT"
    }
}
