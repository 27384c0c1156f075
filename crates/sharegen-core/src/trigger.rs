//! Decoupled "run now" signal.
//!
//! The active mode view fires the trigger; the generation pipeline and the
//! result view observe it. Neither side knows about the other: observers
//! react to any *change* of the token, the token value itself carries no
//! further meaning.

use tokio::sync::watch;

/// A single-slot, strictly increasing version signal.
///
/// Tokens are derived from the wall clock in milliseconds; same-instant
/// fires are bumped past the previous token so every `fire()` is observable
/// as a change. The channel's slot is the only token store, and the bump
/// happens inside its lock, so concurrent fires publish in token order.
pub struct TriggerChannel {
    tx: watch::Sender<u64>,
}

impl TriggerChannel {
    /// Creates an idle channel. Token `0` means "never fired".
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Signals "start/restart generation with the current inputs".
    ///
    /// Returns the fresh token, which is strictly greater than every token
    /// this channel handed out before.
    pub fn fire(&self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(1) as u64;
        let mut token = 0;
        self.tx.send_modify(|value| {
            *value = now.max(*value + 1);
            token = *value;
        });
        tracing::debug!("[Trigger] fired token {}", token);
        token
    }

    /// The most recent token, `0` if the channel never fired.
    pub fn current(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Subscribes an observer. Receivers see the latest token immediately
    /// and are woken on every subsequent `fire()`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for TriggerChannel {
    fn default() -> Self {
        Self::new()
    }
}
