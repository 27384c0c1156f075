//! Session locale application.
//!
//! The app's `default_language` must be applied to the session locale
//! exactly once, from the initializer's success continuation. Modelled as
//! an explicit idempotent operation instead of ambient global mutation.

use once_cell::sync::OnceCell;

/// Write-once locale slot for one session.
#[derive(Debug, Default)]
pub struct LocaleState {
    applied: OnceCell<String>,
}

impl LocaleState {
    /// Creates an unapplied locale slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the locale code once.
    ///
    /// Returns `true` when this call applied the locale, `false` when a
    /// locale was already applied (the call is then a no-op).
    pub fn apply(&self, code: &str) -> bool {
        let applied = self.applied.set(code.to_string()).is_ok();
        if applied {
            tracing::info!("[Locale] switched to '{}'", code);
        } else {
            tracing::debug!(
                "[Locale] '{}' ignored, '{}' already applied",
                code,
                self.current().unwrap_or_default()
            );
        }
        applied
    }

    /// The applied locale code, if any.
    pub fn current(&self) -> Option<&str> {
        self.applied.get().map(String::as_str)
    }
}
