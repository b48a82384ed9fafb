//! Internationalization (i18n) module.
//!
//! Handles the bundled translations, startup locale detection and key
//! lookup for the active locale.
//!
//! ## Architecture
//!
//! - `LocaleRegistry` - every supported locale and its flat dictionary
//! - `detect_locale` - picks the startup locale from environment hints
//! - `Translator` - holds the active locale and renders keys
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use addin_locale::i18n::{LocaleHints, LocaleRegistry, Translator};
//! use serde_json::json;
//!
//! let registry = Arc::new(LocaleRegistry::builtin().unwrap());
//! let hints = LocaleHints {
//!     display_language: Some("fr-FR".to_string()),
//!     user_agent_language: None,
//!     default_locale: "en-US".to_string(),
//! };
//! let translator = Translator::detect(registry, &hints);
//!
//! assert_eq!(translator.t("auth.login"), "Se connecter");
//! assert_eq!(translator.t_with("auth.welcome", &json!({"name": "Ada"})), "Bienvenue, Ada !");
//! assert_eq!(translator.t("no.such.key"), "no.such.key");
//! ```

mod registry;
mod resolver;
mod template;
mod translator;

pub use registry::{Dictionary, LocaleRegistry, REFERENCE_LOCALE, RegistryError};
pub use resolver::{LocaleEnvironment, LocaleHints, LocaleSource, SystemEnvironment, detect_locale};
pub use template::{interpolate, render};
pub use translator::Translator;
