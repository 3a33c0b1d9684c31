//! Failure logger injected into handlers

use std::fmt::Display;

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    /// Report a failure: a fixed message followed by the error value.
    fn error(&self, message: &str, error: &dyn Display);
}

/// Forwards to `tracing::error!`
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str, error: &dyn Display) {
        tracing::error!(error = %error, "{}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn error(&self, _message: &str, _error: &dyn Display) {}
}
