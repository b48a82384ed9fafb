//! Translator - the active locale plus lookups against it.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::resolver::{LocaleEnvironment, detect_locale};
use super::template;
use super::{Dictionary, LocaleRegistry};

/// Resolves translation keys for one session.
///
/// Construct once at startup and share through an `Arc`. The active locale
/// is swapped as a whole, so concurrent lookups always see either the old
/// or the new locale.
#[derive(Debug)]
pub struct Translator {
    registry: Arc<LocaleRegistry>,
    active: RwLock<String>,
}

impl Translator {
    /// Create a translator with `locale` active, without validation.
    pub fn new(registry: Arc<LocaleRegistry>, locale: impl Into<String>) -> Self {
        Self {
            registry,
            active: RwLock::new(locale.into()),
        }
    }

    /// Create a translator whose locale is detected from `env`.
    pub fn detect<E>(registry: Arc<LocaleRegistry>, env: &E) -> Self
    where
        E: LocaleEnvironment + ?Sized,
    {
        let (locale, source) = detect_locale(&registry, env);
        info!("Active locale: {} (from {:?})", locale, source);
        Self::new(registry, locale)
    }

    /// Re-run detection and make the result active.
    pub fn detect_locale<E>(&self, env: &E) -> String
    where
        E: LocaleEnvironment + ?Sized,
    {
        let (locale, _) = detect_locale(&self.registry, env);
        *self.active.write() = locale.clone();
        locale
    }

    /// Currently active locale tag.
    pub fn locale(&self) -> String {
        self.active.read().clone()
    }

    pub fn registry(&self) -> &Arc<LocaleRegistry> {
        &self.registry
    }

    /// Switch to `locale` if it is supported.
    ///
    /// Returns `false` and keeps the current locale otherwise.
    pub fn set_locale(&self, locale: &str) -> bool {
        if !self.registry.contains(locale) {
            warn!("Rejected unsupported locale {}", locale);
            return false;
        }
        *self.active.write() = locale.to_string();
        debug!("Locale changed to {}", locale);
        true
    }

    /// Translate `key` without parameters.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &Value::Null)
    }

    /// Translate `key`, filling placeholders from a JSON object.
    ///
    /// Unknown keys render as the key itself. Placeholders without a value
    /// are left in place.
    pub fn t_with(&self, key: &str, params: &Value) -> String {
        let active = self.active.read();
        let entry = self
            .registry
            .dictionary(&active)
            .and_then(|dict| dict.get(key));

        match entry {
            Some(text) => template::render(text, params),
            None => {
                debug!("Missing translation for {} in {}", key, *active);
                template::render(key, params)
            }
        }
    }

    /// Whether the active locale defines `key`.
    pub fn has_key(&self, key: &str) -> bool {
        let active = self.active.read();
        self.registry
            .dictionary(&active)
            .is_some_and(|dict| dict.contains_key(key))
    }

    /// Copy of the active locale's dictionary.
    ///
    /// Empty when the active locale is not registered.
    pub fn get_all(&self) -> Dictionary {
        let active = self.active.read();
        self.registry
            .dictionary(&active)
            .cloned()
            .unwrap_or_default()
    }
}
