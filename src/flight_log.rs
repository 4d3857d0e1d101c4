//! # Flight log
//!
//! The navigator reports every bounds check, computed course, command and state transition as a one-line message.
//! Messages go to an injected [FlightLog] rather than straight to a global logger, so that callers can capture them.
//!
//! [LogFacade] is the default sink and forwards to the [`log`] crate. [MemoryLog] keeps the messages in memory.

use std::sync::{Arc, Mutex};

use log::Level;

/// Sink for navigator messages
pub trait FlightLog: Send + Sync {
    /// Report normal operation
    fn info(&self, message: &str);

    /// Report a failure
    fn error(&self, message: &str);
}

/// [FlightLog] forwarding to the process-wide [`log`] logger
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl FlightLog for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// [FlightLog] keeping messages in memory
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Messages received at the given level, oldest first
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_owned()));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A panic while holding the lock cannot leave the vector half-written
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FlightLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
