//! Addin Locale - localization engine for the Office add-in.
//!
//! Resolves the active locale for a session and renders translated strings.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `i18n` - Locale registry, detection and translation lookup

pub mod config;
pub mod i18n;

pub use config::{Config, ConfigError};
pub use i18n::{LocaleRegistry, Translator};
