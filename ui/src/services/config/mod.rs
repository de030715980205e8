mod app_config;

pub use app_config::*;

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration, loaded on first access
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load).clone()
}
