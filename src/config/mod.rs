//! Configuration module for the add-in locale engine.
//!
//! Loads configuration from environment variables.

use std::env;

use thiserror::Error;

/// Default locale used when `DEFAULT_LOCALE` is not set.
pub const FALLBACK_DEFAULT_LOCALE: &str = "en-US";

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DEFAULT_LOCALE must not be blank")]
    BlankDefaultLocale,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale used when neither the host nor the user agent names a
    /// supported one.
    pub default_locale: String,

    /// Display language reported by the Office host, if any.
    pub display_language: Option<String>,

    /// Overrides the OS language as the user agent preference.
    pub ui_language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: FALLBACK_DEFAULT_LOCALE.to_string(),
            display_language: None,
            ui_language: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_locale = match lookup("DEFAULT_LOCALE") {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::BlankDefaultLocale);
                }
                trimmed.to_string()
            }
            None => FALLBACK_DEFAULT_LOCALE.to_string(),
        };

        Ok(Self {
            default_locale,
            display_language: non_blank(lookup("OFFICE_DISPLAY_LANGUAGE")),
            ui_language: non_blank(lookup("UI_LANGUAGE")),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
