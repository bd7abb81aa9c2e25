//! Error Reporter Port - side-effecting failure sink.
//!
//! Some bridge operations report failures without failing themselves (see
//! `TempModelBridge::make_file_in_directory`). This port is the side channel
//! those reports go through.

use async_trait::async_trait;

use crate::domain::BridgeError;

/// Port for reporting failures out of band.
///
/// # Contract
///
/// Implementations log or forward the error (telemetry, notifications) and
/// must not fail themselves - reporting is infallible by contract, which is
/// why the method returns nothing.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Report a failure. Never fails, never panics.
    async fn report(&self, error: &BridgeError);
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
