//! App Configuration
//!
//! Defaults, optionally overridden by `<meta>` tags in the host page:
//!
//! ```html
//! <meta name="notes-api-base-url" content="http://localhost:5000/v2">
//! <meta name="notes-app-title" content="My Notes">
//! ```

use crate::transition::EntranceTiming;

pub const DEFAULT_API_BASE_URL: &str = "https://notes-api.dicoding.dev/v2";
pub const DEFAULT_TITLE: &str = "Notes App";

const META_API_BASE_URL: &str = "notes-api-base-url";
const META_TITLE: &str = "notes-app-title";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Label of the header bar
    pub title: String,
    /// How long success notices stay on screen
    pub notice_timeout_ms: u32,
    pub entrance: EntranceTiming,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            notice_timeout_ms: 2500,
            entrance: EntranceTiming::default(),
        }
    }
}

impl AppConfig {
    /// Defaults with overrides from the current document
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::with_overrides(|name| {
            let selector = format!("meta[name=\"{}\"]", name);
            document
                .as_ref()?
                .query_selector(&selector)
                .ok()
                .flatten()?
                .get_attribute("content")
        })
    }

    /// Defaults with overrides from `lookup(meta name)`; blank values are ignored
    pub fn with_overrides(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |name: &str| {
            lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };

        if let Some(url) = read(META_API_BASE_URL) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(title) = read(META_TITLE) {
            config.title = title;
        }
        config
    }
}
