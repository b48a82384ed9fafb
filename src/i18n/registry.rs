//! Locale registry - every supported locale and its dictionary.
//!
//! Bundles are nested JSON objects. They are flattened into dot-separated
//! keys at load time so a lookup is a single hash probe.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Flat key -> template mapping for one locale.
pub type Dictionary = HashMap<String, String>;

/// Locale every built-in bundle is checked against.
pub const REFERENCE_LOCALE: &str = "en-US";

/// Bundles compiled into the binary: (locale tag, JSON source).
const BUILTIN_BUNDLES: &[(&str, &str)] = &[
    ("en-US", include_str!("locales/en-US.json")),
    ("fr-FR", include_str!("locales/fr-FR.json")),
    ("de-DE", include_str!("locales/de-DE.json")),
    ("ja-JP", include_str!("locales/ja-JP.json")),
];

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("bundle for '{locale}' is not valid JSON: {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("bundle for '{locale}' must be a JSON object")]
    NotAnObject { locale: String },

    #[error("key '{key}' in '{locale}' must map to a string")]
    NonStringValue { locale: String, key: String },

    #[error("key '{key}' is defined twice in '{locale}'")]
    DuplicateKey { locale: String, key: String },

    #[error("locale '{locale}' is registered twice")]
    DuplicateLocale { locale: String },

    #[error("locale '{locale}' has no translations")]
    EmptyDictionary { locale: String },

    #[error("registry has no locales")]
    NoLocales,
}

/// Read-only set of dictionaries, one per supported locale tag.
///
/// The set of locales is fixed at construction. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    dictionaries: HashMap<String, Dictionary>,
}

impl LocaleRegistry {
    /// Load the bundles shipped with the add-in.
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = Self::from_json(BUILTIN_BUNDLES.iter().copied())?;
        registry.check_coverage(REFERENCE_LOCALE);
        info!("Loaded {} locales", registry.len());
        Ok(registry)
    }

    /// Build a registry from `(locale, json)` pairs.
    pub fn from_json<'a, I>(bundles: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = Vec::new();
        for (locale, source) in bundles {
            let value: Value =
                serde_json::from_str(source).map_err(|source| RegistryError::Parse {
                    locale: locale.to_string(),
                    source,
                })?;
            parsed.push((locale.to_string(), flatten_bundle(locale, &value)?));
        }
        Self::from_dictionaries(parsed)
    }

    /// Build a registry from already flat dictionaries.
    pub fn from_dictionaries<I>(dictionaries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (String, Dictionary)>,
    {
        let mut map = HashMap::new();
        for (locale, dictionary) in dictionaries {
            if dictionary.is_empty() {
                return Err(RegistryError::EmptyDictionary { locale });
            }
            if map.contains_key(&locale) {
                return Err(RegistryError::DuplicateLocale { locale });
            }
            debug!("Registering locale {} ({} keys)", locale, dictionary.len());
            map.insert(locale, dictionary);
        }

        if map.is_empty() {
            return Err(RegistryError::NoLocales);
        }

        Ok(Self { dictionaries: map })
    }

    /// Whether `locale` is a supported tag. Exact, case-sensitive match.
    pub fn contains(&self, locale: &str) -> bool {
        self.dictionaries.contains_key(locale)
    }

    /// Dictionary for `locale`, if supported.
    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        self.dictionaries.get(locale)
    }

    /// All supported tags, sorted.
    pub fn supported_locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// Keys present in `reference` but absent from `other`, sorted.
    ///
    /// Returns an empty list when either locale is unknown.
    pub fn missing_keys(&self, reference: &str, other: &str) -> Vec<String> {
        let (Some(reference), Some(other)) = (self.dictionary(reference), self.dictionary(other))
        else {
            return Vec::new();
        };

        let mut missing: Vec<String> = reference
            .keys()
            .filter(|key| !other.contains_key(*key))
            .cloned()
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Warn about every locale lacking keys that `reference` defines.
    /// Returns the number of locales with gaps.
    pub fn check_coverage(&self, reference: &str) -> usize {
        let mut incomplete = 0;
        for locale in self.supported_locales() {
            if locale == reference {
                continue;
            }
            let missing = self.missing_keys(reference, locale);
            if !missing.is_empty() {
                warn!(
                    "Locale {} is missing {} keys from {}: {:?}",
                    locale,
                    missing.len(),
                    reference,
                    missing
                );
                incomplete += 1;
            }
        }
        incomplete
    }
}

/// Flatten a nested bundle into dot-separated keys.
fn flatten_bundle(locale: &str, value: &Value) -> Result<Dictionary, RegistryError> {
    let Value::Object(root) = value else {
        return Err(RegistryError::NotAnObject {
            locale: locale.to_string(),
        });
    };

    let mut dictionary = Dictionary::new();
    let mut stack: Vec<(String, &Value)> = root
        .iter()
        .map(|(key, value)| (key.clone(), value))
        .collect();

    while let Some((key, value)) = stack.pop() {
        match value {
            Value::String(text) => {
                if dictionary.insert(key.clone(), text.clone()).is_some() {
                    return Err(RegistryError::DuplicateKey {
                        locale: locale.to_string(),
                        key,
                    });
                }
            }
            Value::Object(children) => {
                for (child, value) in children {
                    stack.push((format!("{}.{}", key, child), value));
                }
            }
            _ => {
                return Err(RegistryError::NonStringValue {
                    locale: locale.to_string(),
                    key,
                });
            }
        }
    }

    Ok(dictionary)
}
