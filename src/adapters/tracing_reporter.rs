//! Tracing Reporter Adapter - logs reported failures.

use async_trait::async_trait;
use tracing::error;

use crate::domain::BridgeError;
use crate::ports::ErrorReporter;

/// Error reporter that emits a structured `tracing` event per failure.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Creates a new tracing-backed reporter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ErrorReporter for TracingReporter {
    async fn report(&self, err: &BridgeError) {
        error!(error = %err, "notebook scratch operation failed");
    }
}
