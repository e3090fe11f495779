//! Application-level configuration shared through the Dioxus context.

use dioxus::prelude::*;

use crate::catalog::{UserId, DEMO_VIEWER};

/// Fallback UI language.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Provided once by each launcher via `use_context_provider`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// The signed-in viewer. Progress, logs and personal charts resolve
    /// against this id, never against a display name.
    pub current_user: UserId,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_user: DEMO_VIEWER,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Reads the launcher-provided config, falling back to the demo viewer when a
/// component renders outside an app shell (tests, previews).
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_embedded() {
        let config = AppConfig::default();
        assert_eq!(config.current_user, DEMO_VIEWER);
        assert!(crate::i18n::available_languages().contains(&config.locale));
    }
}
