//! Ready-to-render session context.
//!
//! The context is assembled exactly once by the session initializer after
//! both startup fetches resolve. While it is absent the dependent views must
//! not render (loading state).

use serde::{Deserialize, Serialize};

use crate::prompt::PromptConfig;
use crate::site::SiteMetadata;

/// Everything the mode views need to render, published once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Identifier of the shared app this session runs against.
    pub app_id: String,
    /// Display metadata of the app.
    pub site: SiteMetadata,
    /// Derived prompt configuration (variables in schema order).
    pub prompt_config: PromptConfig,
    /// "More like this" feature flag, when the app enables it.
    pub more_like_this: Option<MoreLikeThisConfig>,
}

impl SessionContext {
    /// Whether downstream views may offer the "more like this" action.
    pub fn more_like_this_enabled(&self) -> bool {
        self.more_like_this.as_ref().is_some_and(|c| c.enabled)
    }
}

/// Server-side "more like this" configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MoreLikeThisConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// Descriptor of an app installed into the visitor's own workspace.
///
/// In installed mode the app info is known locally and the app-info
/// endpoint is never called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    /// Installed-app identifier, also used as the gateway path scope.
    pub id: String,
    /// App name, used as the site title.
    pub name: String,
}

/// How this session reaches the shared app: through the public web-app
/// surface or through an installed-app scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAccess {
    /// Public share link; app info comes from the gateway.
    WebApp,
    /// Installed app; app info comes from the local descriptor.
    Installed(InstalledApp),
}

impl AppAccess {
    /// Returns the installed-app ID when running in installed mode.
    pub fn installed_id(&self) -> Option<&str> {
        match self {
            Self::WebApp => None,
            Self::Installed(app) => Some(&app.id),
        }
    }

    /// Whether this session runs in installed mode.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_like_this_enabled() {
        let mut context = SessionContext {
            app_id: "app-1".to_string(),
            site: SiteMetadata::default(),
            prompt_config: PromptConfig::default(),
            more_like_this: None,
        };
        assert!(!context.more_like_this_enabled());

        context.more_like_this = Some(MoreLikeThisConfig { enabled: false });
        assert!(!context.more_like_this_enabled());

        context.more_like_this = Some(MoreLikeThisConfig { enabled: true });
        assert!(context.more_like_this_enabled());
    }

    #[test]
    fn test_access_scope() {
        assert!(AppAccess::WebApp.installed_id().is_none());
        let access = AppAccess::Installed(InstalledApp {
            id: "inst-9".to_string(),
            name: "Writer".to_string(),
        });
        assert_eq!(access.installed_id(), Some("inst-9"));
        assert!(access.is_installed());
    }
}
