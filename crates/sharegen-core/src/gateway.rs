//! Remote Gateway interface.
//!
//! The gateway is an external collaborator: four operations returning
//! structured data or failing. The HTTP implementation lives in the
//! infrastructure crate; tests substitute mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::prompt::UserInputField;
use crate::saved::SavedMessage;
use crate::session::{AppAccess, MoreLikeThisConfig};
use crate::site::SiteMetadata;

/// App-info payload (public share surface only; installed mode synthesizes
/// this locally and never calls the endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfoResponse {
    pub app_id: String,
    pub site: SiteMetadata,
}

/// App-params payload. A missing `user_input_form` is a fatal precondition
/// violation and surfaces as a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppParamsResponse {
    pub user_input_form: Vec<UserInputField>,
    #[serde(default)]
    pub more_like_this: Option<MoreLikeThisConfig>,
}

/// Saved-messages payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMessagesResponse {
    pub data: Vec<SavedMessage>,
}

/// Operations the session layer consumes from the backend.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Fetches app metadata for the public share surface.
    async fn fetch_app_info(&self) -> Result<AppInfoResponse>;

    /// Fetches the input-form schema and feature flags.
    async fn fetch_app_params(&self, access: &AppAccess) -> Result<AppParamsResponse>;

    /// Fetches the saved outputs for this app/session scope.
    async fn fetch_saved_messages(&self, access: &AppAccess) -> Result<SavedMessagesResponse>;

    /// Marks a generated message as saved.
    async fn save_message(&self, message_id: &str, access: &AppAccess) -> Result<()>;

    /// Removes a previously saved message.
    async fn remove_message(&self, message_id: &str, access: &AppAccess) -> Result<()>;
}
