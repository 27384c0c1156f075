//! Site metadata for a shared app.
//!
//! Mirrors the display-facing part of the app-info payload: title, icon,
//! copyright and the default language the session should switch to.

use serde::{Deserialize, Serialize};

/// Display metadata of a shared app, as returned by the app-info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteMetadata {
    /// Human-readable app title shown in the header and window title.
    pub title: String,
    /// Icon identifier (emoji or asset key), resolved by the rendering layer.
    #[serde(default)]
    pub icon: Option<String>,
    /// Background color behind the icon.
    #[serde(default)]
    pub icon_background: Option<String>,
    /// Short description shown under the title.
    #[serde(default)]
    pub description: Option<String>,
    /// Copyright holder for the footer line; falls back to the title.
    #[serde(default)]
    pub copyright: Option<String>,
    /// Link to the operator's privacy policy, if published.
    #[serde(default)]
    pub privacy_policy: Option<String>,
    /// Language the session locale is switched to once on startup.
    #[serde(default)]
    pub default_language: Option<String>,
    /// Whether the app's prompt is publicly visible.
    #[serde(default)]
    pub prompt_public: bool,
}

impl SiteMetadata {
    /// Derives the window/document title for this site.
    ///
    /// Re-derived whenever the title changes; in practice the title is
    /// stable after the initial fetch.
    pub fn display_title(&self) -> String {
        format!("{} - Powered by Sharegen", self.title)
    }

    /// Derives the footer copyright line for the given year.
    ///
    /// Falls back to the app title when no explicit copyright holder is set.
    pub fn copyright_line(&self, year: i32) -> String {
        let holder = self
            .copyright
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.title);
        format!("© {holder} {year}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title() {
        let site = SiteMetadata {
            title: "Story Writer".to_string(),
            ..Default::default()
        };
        assert_eq!(site.display_title(), "Story Writer - Powered by Sharegen");
    }

    #[test]
    fn test_copyright_falls_back_to_title() {
        let site = SiteMetadata {
            title: "Story Writer".to_string(),
            copyright: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(site.copyright_line(2026), "© Story Writer 2026");

        let site = SiteMetadata {
            title: "Story Writer".to_string(),
            copyright: Some("Acme Inc".to_string()),
            ..Default::default()
        };
        assert_eq!(site.copyright_line(2026), "© Acme Inc 2026");
    }

    #[test]
    fn test_deserializes_minimal_payload() {
        let site: SiteMetadata = serde_json::from_str(r#"{"title": "Demo"}"#).unwrap();
        assert_eq!(site.title, "Demo");
        assert!(site.default_language.is_none());
        assert!(!site.prompt_public);
    }
}
