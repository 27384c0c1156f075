//! Session startup sequencing.
//!
//! Resolves app info and app params concurrently and assembles the
//! `SessionContext`. Both fetches must succeed before anything is
//! published; a failure of either leaves the session in its loading state.

use std::sync::Arc;

use sharegen_core::error::Result;
use sharegen_core::gateway::{AppInfoResponse, RemoteGateway};
use sharegen_core::locale::LocaleState;
use sharegen_core::prompt::PromptConfig;
use sharegen_core::session::{AppAccess, SessionContext};
use sharegen_core::site::SiteMetadata;

/// Performs the startup sequence that produces a ready-to-render context.
pub struct SessionInitializer {
    gateway: Arc<dyn RemoteGateway>,
    access: AppAccess,
}

impl SessionInitializer {
    /// Creates an initializer for the given gateway and access scope.
    pub fn new(gateway: Arc<dyn RemoteGateway>, access: AppAccess) -> Self {
        Self { gateway, access }
    }

    /// Runs both startup fetches and builds the session context.
    ///
    /// The fetches run concurrently and may complete in either order; the
    /// context is assembled only after both resolve (join, not race). The
    /// site's default language is applied to the session locale exactly
    /// once, from this success continuation.
    ///
    /// # Errors
    ///
    /// Returns the first fetch failure; no context is produced then and
    /// nothing is retried.
    pub async fn initialize(&self, locale: &LocaleState) -> Result<SessionContext> {
        let (info, params) = tokio::try_join!(
            self.app_info(),
            self.gateway.fetch_app_params(&self.access)
        )?;

        if let Some(language) = info
            .site
            .default_language
            .as_deref()
            .filter(|l| !l.is_empty())
        {
            locale.apply(language);
        }

        let prompt_config = PromptConfig::from_form(&params.user_input_form);
        tracing::info!(
            "[Init] session ready for app {} ({} variables)",
            info.app_id,
            prompt_config.prompt_variables.len()
        );

        Ok(SessionContext {
            app_id: info.app_id,
            site: info.site,
            prompt_config,
            more_like_this: params.more_like_this,
        })
    }

    /// App info comes from the local descriptor in installed mode; the
    /// gateway endpoint is only hit for the public share surface.
    async fn app_info(&self) -> Result<AppInfoResponse> {
        match &self.access {
            AppAccess::Installed(app) => Ok(AppInfoResponse {
                app_id: app.id.clone(),
                site: SiteMetadata {
                    title: app.name.clone(),
                    copyright: Some(String::new()),
                    prompt_public: false,
                    ..Default::default()
                },
            }),
            AppAccess::WebApp => self.gateway.fetch_app_info().await,
        }
    }
}
