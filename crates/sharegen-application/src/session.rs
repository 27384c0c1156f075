//! Session orchestrator.
//!
//! `GenerationSession` is the composition point for one visitor session:
//! it runs the startup sequence, owns the navigation mode, the form inputs,
//! the trigger channel, the saved-items service and the presentation state,
//! and exposes the operations the mode views and the result view bind to.

use std::sync::Arc;
use tokio::sync::{RwLock, watch};

use sharegen_core::error::Result;
use sharegen_core::gateway::RemoteGateway;
use sharegen_core::locale::LocaleState;
use sharegen_core::notify::Notifier;
use sharegen_core::presentation::{Point, PresentationState, Region, ViewportClass};
use sharegen_core::prompt::PromptConfig;
use sharegen_core::saved::SavedMessage;
use sharegen_core::session::{ActiveMode, AppAccess, FormInputs, SessionContext};
use sharegen_core::trigger::TriggerChannel;

use crate::initializer::SessionInitializer;
use crate::saved_items::SavedItemsService;

/// One visitor's end-to-end session against a shared app.
pub struct GenerationSession {
    notifier: Arc<dyn Notifier>,
    initializer: SessionInitializer,
    locale: LocaleState,
    context_tx: watch::Sender<Option<SessionContext>>,
    saved: SavedItemsService,
    trigger: TriggerChannel,
    mode: RwLock<ActiveMode>,
    inputs: RwLock<FormInputs>,
    presentation: RwLock<PresentationState>,
}

impl GenerationSession {
    /// Creates an uninitialized session for the given scope and viewport.
    pub fn new(
        gateway: Arc<dyn RemoteGateway>,
        notifier: Arc<dyn Notifier>,
        access: AppAccess,
        viewport: ViewportClass,
    ) -> Self {
        let (context_tx, _rx) = watch::channel(None);
        Self {
            notifier: notifier.clone(),
            initializer: SessionInitializer::new(gateway.clone(), access.clone()),
            locale: LocaleState::new(),
            context_tx,
            saved: SavedItemsService::new(gateway, notifier, access),
            trigger: TriggerChannel::new(),
            mode: RwLock::new(ActiveMode::default()),
            inputs: RwLock::new(FormInputs::default()),
            presentation: RwLock::new(PresentationState::new(viewport)),
        }
    }

    /// Creates a session wired to the HTTP gateway, configured from the
    /// environment, with notifications routed into the log.
    pub fn from_env(access: AppAccess, viewport: ViewportClass) -> Result<Self> {
        let config = sharegen_infrastructure::GatewayConfig::try_from_env()?;
        let gateway = Arc::new(sharegen_infrastructure::HttpRemoteGateway::new(config));
        let notifier = Arc::new(sharegen_infrastructure::TracingNotifier);
        Ok(Self::new(gateway, notifier, access, viewport))
    }

    // ------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------

    /// Runs the mount sequence: the context fetches and the initial
    /// saved-list query, concurrently.
    ///
    /// On success the context is published to every subscriber. On failure
    /// nothing is published and the session stays in loading state; the
    /// failure is logged and routed to the notifier (no retry). A failed
    /// initial saved-list query never blocks the context.
    pub async fn initialize(&self) -> Result<()> {
        let (context, saved) = tokio::join!(
            self.initializer.initialize(&self.locale),
            self.saved.refresh()
        );

        if let Err(e) = saved {
            tracing::warn!("[Init] initial saved-list query failed: {}", e);
        }

        match context {
            Ok(context) => {
                self.context_tx.send_replace(Some(context));
                Ok(())
            }
            Err(e) => {
                tracing::error!("[Init] session initialization failed: {}", e);
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Subscribes to context publication. Receivers start at `None`
    /// (loading) and observe the single transition to `Some` on success.
    pub fn subscribe_context(&self) -> watch::Receiver<Option<SessionContext>> {
        self.context_tx.subscribe()
    }

    /// Snapshot of the published context, `None` while loading.
    pub fn context(&self) -> Option<SessionContext> {
        self.context_tx.borrow().clone()
    }

    /// Whether the dependent views may render.
    pub fn is_ready(&self) -> bool {
        self.context_tx.borrow().is_some()
    }

    /// Derived prompt configuration, once ready.
    pub fn prompt_config(&self) -> Option<PromptConfig> {
        self.context_tx
            .borrow()
            .as_ref()
            .map(|c| c.prompt_config.clone())
    }

    /// Derived window/document title; tracks the site title.
    pub fn display_title(&self) -> Option<String> {
        self.context_tx
            .borrow()
            .as_ref()
            .map(|c| c.site.display_title())
    }

    /// The locale applied from the site's default language, if any.
    pub fn locale(&self) -> Option<String> {
        self.locale.current().map(str::to_string)
    }

    // ------------------------------------------------------------------
    // Mode state machine
    // ------------------------------------------------------------------

    /// Currently active tab.
    pub async fn active_mode(&self) -> ActiveMode {
        *self.mode.read().await
    }

    /// User-initiated tab selection.
    pub async fn set_mode(&self, mode: ActiveMode) {
        let mut current = self.mode.write().await;
        if *current != mode {
            tracing::debug!("[Mode] {} -> {}", *current, mode);
            *current = mode;
        }
    }

    /// The one programmatic transition: the saved view's empty-state
    /// "create" action jumps to the create tab. No-op from other modes.
    pub async fn begin_create_from_saved(&self) {
        let mut current = self.mode.write().await;
        if *current == ActiveMode::Saved {
            tracing::debug!("[Mode] saved -> create (empty-state action)");
            *current = ActiveMode::Create;
        }
    }

    // ------------------------------------------------------------------
    // Saved outputs
    // ------------------------------------------------------------------

    /// Snapshot of the saved outputs, in server order.
    pub async fn saved_items(&self) -> Vec<SavedMessage> {
        self.saved.items().await
    }

    /// Count badge for the saved tab; hidden when the list is empty.
    pub async fn saved_badge(&self) -> Option<usize> {
        self.saved.badge().await
    }

    /// Saves a generated message. Failures surface through the notifier
    /// and leave the collection untouched.
    pub async fn save_message(&self, message_id: &str) -> Result<()> {
        self.saved.save(message_id).await.inspect_err(|e| {
            tracing::error!("[Saved] save failed for {}: {}", message_id, e);
            self.notifier.error(&e.to_string());
        })
    }

    /// Removes a saved message. Failures surface through the notifier
    /// and leave the collection untouched.
    pub async fn remove_message(&self, message_id: &str) -> Result<()> {
        self.saved.remove(message_id).await.inspect_err(|e| {
            tracing::error!("[Saved] remove failed for {}: {}", message_id, e);
            self.notifier.error(&e.to_string());
        })
    }

    // ------------------------------------------------------------------
    // Trigger channel
    // ------------------------------------------------------------------

    /// Signals the generation pipeline to run with the current inputs.
    /// Shared by the create and batch views.
    pub fn fire(&self) -> u64 {
        self.trigger.fire()
    }

    /// The latest trigger token (`0` before the first fire).
    pub fn trigger_token(&self) -> u64 {
        self.trigger.current()
    }

    /// Subscribes the result view / generation pipeline to trigger changes.
    pub fn subscribe_trigger(&self) -> watch::Receiver<u64> {
        self.trigger.subscribe()
    }

    // ------------------------------------------------------------------
    // Form inputs
    // ------------------------------------------------------------------

    /// Snapshot of the visitor's inputs.
    pub async fn inputs(&self) -> FormInputs {
        self.inputs.read().await.clone()
    }

    /// Replaces all inputs (create view binding).
    pub async fn set_inputs(&self, inputs: FormInputs) {
        *self.inputs.write().await = inputs;
    }

    /// Sets one variable value.
    pub async fn set_input(&self, key: &str, value: serde_json::Value) {
        self.inputs.write().await.set(key, value);
    }

    /// Sets the run-once query text.
    pub async fn set_query(&self, query: impl Into<String>) {
        self.inputs.write().await.query = query.into();
    }

    /// Current run-once query text.
    pub async fn query(&self) -> String {
        self.inputs.read().await.query.clone()
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// Recomputes the viewport class from a new width.
    pub async fn set_viewport_width(&self, width: u32) {
        self.presentation
            .write()
            .await
            .set_viewport(ViewportClass::from_width(width));
    }

    /// Current viewport class.
    pub async fn viewport(&self) -> ViewportClass {
        self.presentation.read().await.viewport()
    }

    /// Opens the result overlay (non-desktop "show result" control).
    pub async fn show_result(&self) {
        self.presentation.write().await.show_overlay();
    }

    /// Closes the result overlay (explicit close control).
    pub async fn hide_result(&self) {
        self.presentation.write().await.hide_overlay();
    }

    /// Records the overlay's rendered bounds for outside-click testing.
    pub async fn set_overlay_region(&self, region: Option<Region>) {
        self.presentation.write().await.set_overlay_region(region);
    }

    /// Feeds an input event; returns `true` when it dismissed the overlay.
    pub async fn pointer_event(&self, point: Point) -> bool {
        self.presentation.write().await.pointer_event(point)
    }

    /// Whether the result area is visible under the current viewport class
    /// and overlay state.
    pub async fn result_visible(&self) -> bool {
        self.presentation.read().await.result_visible()
    }
}
