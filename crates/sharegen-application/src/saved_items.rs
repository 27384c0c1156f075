//! Saved-output lifecycle.
//!
//! The service owns the saved-messages collection. The server list is the
//! source of truth: save/remove are never applied optimistically, each
//! successful mutation notifies and then re-fetches the whole list.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use sharegen_core::error::Result;
use sharegen_core::gateway::RemoteGateway;
use sharegen_core::notify::Notifier;
use sharegen_core::saved::SavedMessage;
use sharegen_core::session::AppAccess;

/// Owns the saved-outputs collection for one session scope.
///
/// Refreshes may overlap (a rapid remove-then-save issues two trailing
/// list calls); each refresh carries a sequence stamp and a response older
/// than the newest applied stamp is discarded, so the displayed collection
/// always reflects the latest known server state.
pub struct SavedItemsService {
    gateway: Arc<dyn RemoteGateway>,
    notifier: Arc<dyn Notifier>,
    access: AppAccess,
    items: RwLock<Vec<SavedMessage>>,
    next_stamp: AtomicU64,
    applied_stamp: AtomicU64,
}

impl SavedItemsService {
    /// Creates an empty service for the given scope.
    pub fn new(
        gateway: Arc<dyn RemoteGateway>,
        notifier: Arc<dyn Notifier>,
        access: AppAccess,
    ) -> Self {
        Self {
            gateway,
            notifier,
            access,
            items: RwLock::new(Vec::new()),
            next_stamp: AtomicU64::new(0),
            applied_stamp: AtomicU64::new(0),
        }
    }

    /// Replaces the local collection with the server's current list.
    ///
    /// # Errors
    ///
    /// On a gateway failure the local collection is left unchanged (stale).
    pub async fn refresh(&self) -> Result<()> {
        let stamp = self.next_stamp.fetch_add(1, Ordering::SeqCst) + 1;
        let response = self.gateway.fetch_saved_messages(&self.access).await?;
        self.apply(stamp, response.data).await;
        Ok(())
    }

    /// Applies a fetched list unless a newer refresh already landed.
    async fn apply(&self, stamp: u64, data: Vec<SavedMessage>) {
        // Stamp check and replacement happen under the write lock so a
        // newer response cannot be overwritten between the two steps.
        let mut items = self.items.write().await;
        if stamp <= self.applied_stamp.load(Ordering::SeqCst) {
            tracing::debug!("[Saved] dropping stale list response (stamp {})", stamp);
            return;
        }
        self.applied_stamp.store(stamp, Ordering::SeqCst);
        *items = data;
    }

    /// Saves a generated message, notifies, and resynchronizes the list.
    pub async fn save(&self, message_id: &str) -> Result<()> {
        self.gateway.save_message(message_id, &self.access).await?;
        self.notifier.success("Saved");
        self.refresh().await
    }

    /// Removes a saved message, notifies, and resynchronizes the list.
    pub async fn remove(&self, message_id: &str) -> Result<()> {
        self.gateway.remove_message(message_id, &self.access).await?;
        self.notifier.success("Removed");
        self.refresh().await
    }

    /// Snapshot of the current collection, in server order.
    pub async fn items(&self) -> Vec<SavedMessage> {
        self.items.read().await.clone()
    }

    /// Number of saved outputs.
    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Count badge for the saved tab; hidden (`None`) when empty.
    pub async fn badge(&self) -> Option<usize> {
        let count = self.count().await;
        (count > 0).then_some(count)
    }
}
