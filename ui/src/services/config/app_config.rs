//! Application configuration
//!
//! Defaults are compiled in. A JSON override can be placed in the browser's
//! LocalStorage under [`CONFIG_STORAGE_KEY`] to point the form at another backend.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::{console_info, console_warn};

pub const CONFIG_STORAGE_KEY: &str = "registration_config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend endpoint configuration
    pub api: ApiConfig,

    /// Presentation settings
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the backend; empty means same origin as the page
    pub base_url: String,

    /// Path of the registration endpoint
    pub register_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,

    /// Where to navigate after a successful registration
    pub home_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            register_path: "/api/users/register".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            home_route: "/".to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the registration endpoint
    pub fn register_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.register_path.trim_start_matches('/')
        )
    }
}

impl AppConfig {
    /// Load defaults, apply the LocalStorage override if present, then resolve the origin
    pub fn load() -> Self {
        let mut config = config_from_storage(LocalStorage::get::<AppConfig>(CONFIG_STORAGE_KEY));

        if config.api.base_url.is_empty() {
            config.api.base_url = page_origin().unwrap_or_default();
        }

        let problems = config.validate();
        if problems.is_empty() {
            config
        } else {
            for problem in &problems {
                console_warn!("[Config] {}", problem);
            }
            console_warn!("[Config] Falling back to defaults");
            let mut fallback = AppConfig::default();
            fallback.api.base_url = page_origin().unwrap_or_default();
            fallback
        }
    }

    /// Returns every problem found, empty when the config is usable
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.api.base_url.is_empty()
            && !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
        {
            errors.push(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            ));
        }

        if self.api.register_path.trim().is_empty() {
            errors.push("api.register_path must not be empty".to_string());
        }

        if self.ui.toast_duration_ms == 0 {
            errors.push("ui.toast_duration_ms must be greater than 0".to_string());
        }

        if !self.ui.home_route.starts_with('/') {
            errors.push(format!(
                "ui.home_route must start with '/', got '{}'",
                self.ui.home_route
            ));
        }

        errors
    }
}

/// A missing key means no override; anything else unreadable is logged and ignored
fn config_from_storage(stored: Result<AppConfig, StorageError>) -> AppConfig {
    match stored {
        Ok(config) => {
            console_info!("[Config] Loaded override from LocalStorage");
            config
        }
        Err(StorageError::KeyNotFound(_)) => AppConfig::default(),
        Err(e) => {
            console_warn!("[Config] Ignoring unreadable override: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
