//! End-to-end exercises of the session orchestrator against a mock gateway.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use sharegen_application::GenerationSession;
use sharegen_core::error::{Result, SharegenError};
use sharegen_core::gateway::{
    AppInfoResponse, AppParamsResponse, RemoteGateway, SavedMessagesResponse,
};
use sharegen_core::notify::NullNotifier;
use sharegen_core::presentation::{Point, Region, ViewportClass};
use sharegen_core::saved::SavedMessage;
use sharegen_core::session::{ActiveMode, AppAccess};
use sharegen_core::site::SiteMetadata;

struct MockGateway {
    saved: Mutex<Vec<SavedMessage>>,
    fail_params: bool,
}

impl MockGateway {
    fn new(saved: Vec<SavedMessage>) -> Self {
        Self {
            saved: Mutex::new(saved),
            fail_params: false,
        }
    }
}

#[async_trait]
impl RemoteGateway for MockGateway {
    async fn fetch_app_info(&self) -> Result<AppInfoResponse> {
        Ok(AppInfoResponse {
            app_id: "app-42".to_string(),
            site: SiteMetadata {
                title: "Poem Maker".to_string(),
                default_language: Some("en-US".to_string()),
                ..Default::default()
            },
        })
    }

    async fn fetch_app_params(&self, _access: &AppAccess) -> Result<AppParamsResponse> {
        if self.fail_params {
            return Err(SharegenError::gateway("params unavailable"));
        }
        Ok(serde_json::from_str(
            r#"{
                "user_input_form": [
                    {"text-input": {"label": "Subject", "variable": "subject", "required": true}},
                    {"select": {"label": "Style", "variable": "style", "options": ["haiku", "sonnet"]}}
                ]
            }"#,
        )
        .unwrap())
    }

    async fn fetch_saved_messages(&self, _access: &AppAccess) -> Result<SavedMessagesResponse> {
        Ok(SavedMessagesResponse {
            data: self.saved.lock().unwrap().clone(),
        })
    }

    async fn save_message(&self, message_id: &str, _access: &AppAccess) -> Result<()> {
        self.saved.lock().unwrap().push(SavedMessage {
            id: message_id.to_string(),
            answer: String::new(),
            created_at: None,
        });
        Ok(())
    }

    async fn remove_message(&self, message_id: &str, _access: &AppAccess) -> Result<()> {
        self.saved.lock().unwrap().retain(|m| m.id != message_id);
        Ok(())
    }
}

fn session_with(gateway: MockGateway, viewport: ViewportClass) -> GenerationSession {
    GenerationSession::new(
        Arc::new(gateway),
        Arc::new(NullNotifier),
        AppAccess::WebApp,
        viewport,
    )
}

fn saved(id: &str) -> SavedMessage {
    SavedMessage {
        id: id.to_string(),
        answer: String::new(),
        created_at: None,
    }
}

#[tokio::test]
async fn test_session_publishes_context_after_initialize() {
    let session = session_with(MockGateway::new(Vec::new()), ViewportClass::Desktop);
    assert!(!session.is_ready());
    assert!(session.prompt_config().is_none());

    session.initialize().await.unwrap();

    assert!(session.is_ready());
    let config = session.prompt_config().unwrap();
    let keys: Vec<_> = config.prompt_variables.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec!["subject", "style"]);
    assert_eq!(
        session.display_title().as_deref(),
        Some("Poem Maker - Powered by Sharegen")
    );
    assert_eq!(session.locale().as_deref(), Some("en-US"));
}

#[tokio::test]
async fn test_failed_initialize_keeps_session_loading() {
    let mut gateway = MockGateway::new(Vec::new());
    gateway.fail_params = true;
    let session = session_with(gateway, ViewportClass::Desktop);

    assert!(session.initialize().await.is_err());
    assert!(!session.is_ready());
    assert!(session.context().is_none());
}

#[tokio::test]
async fn test_initial_mode_and_tab_transitions() {
    let session = session_with(MockGateway::new(Vec::new()), ViewportClass::Desktop);
    assert_eq!(session.active_mode().await, ActiveMode::Batch);

    session.set_mode(ActiveMode::Saved).await;
    assert_eq!(session.active_mode().await, ActiveMode::Saved);

    // Programmatic transition only fires from the saved tab.
    session.begin_create_from_saved().await;
    assert_eq!(session.active_mode().await, ActiveMode::Create);
    session.begin_create_from_saved().await;
    assert_eq!(session.active_mode().await, ActiveMode::Create);
}

#[tokio::test]
async fn test_saved_badge_scenario_on_mobile() {
    // Viewport mobile, two saved items: badge shows 2.
    let session = session_with(
        MockGateway::new(vec![saved("m-1"), saved("m-2")]),
        ViewportClass::Mobile,
    );
    session.initialize().await.unwrap();
    session.set_mode(ActiveMode::Saved).await;
    assert_eq!(session.saved_badge().await, Some(2));

    // Remove both; the badge hides once the refreshed list is empty.
    session.remove_message("m-1").await.unwrap();
    session.remove_message("m-2").await.unwrap();
    assert_eq!(session.saved_badge().await, None);

    // Empty-state "create" action jumps to the create tab.
    session.begin_create_from_saved().await;
    assert_eq!(session.active_mode().await, ActiveMode::Create);
}

#[tokio::test]
async fn test_save_updates_badge_after_refresh() {
    let session = session_with(MockGateway::new(Vec::new()), ViewportClass::Desktop);
    session.initialize().await.unwrap();
    assert_eq!(session.saved_badge().await, None);

    session.save_message("m-7").await.unwrap();
    assert_eq!(session.saved_badge().await, Some(1));
}

#[tokio::test]
async fn test_trigger_reaches_subscribed_result_view() {
    let session = session_with(MockGateway::new(Vec::new()), ViewportClass::Desktop);
    session.set_query("a poem about rain").await;

    let mut rx = session.subscribe_trigger();
    assert_eq!(session.trigger_token(), 0);

    let first = session.fire();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), first);

    // A second submit in the same instant still observes a fresh token.
    let second = session.fire();
    assert!(second > first);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), second);

    let inputs = session.inputs().await;
    assert_eq!(inputs.query, "a poem about rain");
}

#[tokio::test]
async fn test_result_overlay_lifecycle_on_mobile() {
    let session = session_with(MockGateway::new(Vec::new()), ViewportClass::Mobile);
    assert!(!session.result_visible().await);

    session.show_result().await;
    session
        .set_overlay_region(Some(Region {
            x: 24.0,
            y: 0.0,
            width: 350.0,
            height: 700.0,
        }))
        .await;
    assert!(session.result_visible().await);

    // Tap inside keeps it, tap outside dismisses.
    assert!(!session.pointer_event(Point { x: 100.0, y: 50.0 }).await);
    assert!(session.result_visible().await);
    assert!(session.pointer_event(Point { x: 5.0, y: 50.0 }).await);
    assert!(!session.result_visible().await);

    // Growing to desktop renders inline regardless of overlay state.
    session.set_viewport_width(1280).await;
    assert_eq!(session.viewport().await, ViewportClass::Desktop);
    assert!(session.result_visible().await);
}
