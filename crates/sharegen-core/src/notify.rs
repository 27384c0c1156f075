//! Notification collaborator interface.
//!
//! The toast/notification subsystem is external; the session layer only
//! emits through this seam. Success messages fire after save/remove
//! complete; failures are routed to `error` by the orchestrator.

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Reports a completed operation ("Saved", "Removed", ...).
    fn success(&self, message: &str);

    /// Reports a failed operation.
    fn error(&self, message: &str);
}

/// Notifier that drops everything, for contexts without a notification
/// subsystem (tests, headless runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
