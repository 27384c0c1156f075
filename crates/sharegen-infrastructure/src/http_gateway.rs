//! HTTP implementation of the Remote Gateway.
//!
//! Speaks the share-surface REST API: `site`, `parameters` and
//! `saved-messages` endpoints, with the `installed-apps/{id}/` path prefix
//! when the session runs against an installed app.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;

use sharegen_core::error::{Result, SharegenError};
use sharegen_core::gateway::{
    AppInfoResponse, AppParamsResponse, RemoteGateway, SavedMessagesResponse,
};
use sharegen_core::session::AppAccess;

use crate::config::GatewayConfig;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MUTATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote Gateway over HTTP.
#[derive(Clone)]
pub struct HttpRemoteGateway {
    client: Client,
    config: GatewayConfig,
}

#[derive(Debug, Serialize)]
struct SaveMessageRequest<'a> {
    message_id: &'a str,
}

impl HttpRemoteGateway {
    /// Creates a gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Builds the URL for an endpoint within the given access scope.
    ///
    /// Installed-app sessions address `installed-apps/{id}/{path}`; the
    /// public share surface addresses `{path}` directly.
    fn endpoint(&self, access: &AppAccess, path: &str) -> String {
        match access.installed_id() {
            Some(id) => format!("{}/installed-apps/{}/{}", self.config.base_url, id, path),
            None => format!("{}/{}", self.config.base_url, path),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Sends a request and checks for a success status.
    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| SharegenError::gateway(format!("{operation} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SharegenError::gateway_status(
                status.as_u16(),
                format!("{operation} failed: {error_text}"),
            ));
        }

        Ok(response)
    }
}

#[async_trait]
impl RemoteGateway for HttpRemoteGateway {
    async fn fetch_app_info(&self) -> Result<AppInfoResponse> {
        let url = format!("{}/site", self.config.base_url);
        let response = self
            .send(self.client.get(&url).timeout(FETCH_TIMEOUT), "fetch app info")
            .await?;
        response.json::<AppInfoResponse>().await.map_err(|e| {
            SharegenError::gateway(format!("failed to parse app info response: {e}"))
        })
    }

    async fn fetch_app_params(&self, access: &AppAccess) -> Result<AppParamsResponse> {
        let url = self.endpoint(access, "parameters");
        let response = self
            .send(
                self.client.get(&url).timeout(FETCH_TIMEOUT),
                "fetch app params",
            )
            .await?;
        response.json::<AppParamsResponse>().await.map_err(|e| {
            SharegenError::gateway(format!("failed to parse app params response: {e}"))
        })
    }

    async fn fetch_saved_messages(&self, access: &AppAccess) -> Result<SavedMessagesResponse> {
        let url = self.endpoint(access, "saved-messages");
        let response = self
            .send(
                self.client.get(&url).timeout(FETCH_TIMEOUT),
                "fetch saved messages",
            )
            .await?;
        response.json::<SavedMessagesResponse>().await.map_err(|e| {
            SharegenError::gateway(format!("failed to parse saved messages response: {e}"))
        })
    }

    async fn save_message(&self, message_id: &str, access: &AppAccess) -> Result<()> {
        let url = self.endpoint(access, "saved-messages");
        let body = SaveMessageRequest { message_id };
        self.send(
            self.client.post(&url).json(&body).timeout(MUTATION_TIMEOUT),
            "save message",
        )
        .await?;
        tracing::debug!("[Gateway] saved message {}", message_id);
        Ok(())
    }

    async fn remove_message(&self, message_id: &str, access: &AppAccess) -> Result<()> {
        let url = self.endpoint(access, &format!("saved-messages/{message_id}"));
        self.send(
            self.client.delete(&url).timeout(MUTATION_TIMEOUT),
            "remove message",
        )
        .await?;
        tracing::debug!("[Gateway] removed message {}", message_id);
        Ok(())
    }
}
