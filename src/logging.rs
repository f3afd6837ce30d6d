//! Logging sink abstraction.
//!
//! Logging is deliberately decoupled from the storage lifecycle: the
//! stash never holds a sink. Callers that want the embedding
//! application's prefixed log lines construct a [`PrefixLogger`] over
//! whatever sink suits them.

use tracing::info;

/// Fire-and-forget logging sink.
///
/// Receives a configured prefix and a message; no return value, and
/// failures are not surfaced.
pub trait LogSink: Send + Sync {
    /// Forwards one log line.
    fn log(&self, prefix: &str, message: &str);
}

/// Sink that forwards lines to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, prefix: &str, message: &str) {
        info!(target: "stash", "{prefix}{message}");
    }
}

/// Logger holding a configured prefix over a sink.
///
/// # Examples
///
/// ```
/// use stash_rs::logging::{PrefixLogger, TracingSink};
///
/// let logger = PrefixLogger::new("stash: ", TracingSink);
/// logger.log("archived note.txt");
/// ```
pub struct PrefixLogger<S> {
    /// Prefix prepended by the sink to every message.
    prefix: String,
    /// The underlying sink.
    sink: S,
}

impl<S: LogSink> PrefixLogger<S> {
    /// Creates a logger with the given prefix.
    pub fn new<P: Into<String>>(prefix: P, sink: S) -> Self {
        Self {
            prefix: prefix.into(),
            sink,
        }
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Logs one message through the sink.
    pub fn log(&self, message: &str) {
        self.sink.log(&self.prefix, message);
    }
}
