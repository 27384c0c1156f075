//! Tracing-backed notifier.
//!
//! Deployments with a real toast subsystem implement `Notifier` themselves;
//! this implementation routes notifications into the structured log so
//! headless runs still surface them.

use sharegen_core::notify::Notifier;

/// Notifier that emits notifications as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "notify", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "notify", "{}", message);
    }
}
