use serde::Deserialize;

use crate::infrastructure::api::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chat: ChatSettings::default(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `PALAVER_BASE_URL`, `PALAVER_MODEL` and
    /// `PALAVER_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(base_url) = std::env::var("PALAVER_BASE_URL") {
            settings.chat.base_url = base_url;
        }
        if let Ok(model) = std::env::var("PALAVER_MODEL") {
            settings.chat.model = model;
        }
        if let Some(timeout) = std::env::var("PALAVER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            settings.chat.request_timeout_secs = timeout;
        }

        settings
    }
}
