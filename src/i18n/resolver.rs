//! Startup locale detection.
//!
//! Priority: host display language -> user agent language -> configured
//! default. A hint only wins if the registry supports it.

use tracing::{debug, warn};

use super::LocaleRegistry;
use crate::config::Config;

/// Where a detected locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Host,
    UserAgent,
    Default,
}

/// Language hints read from the running environment.
pub trait LocaleEnvironment {
    /// Display language reported by the Office host, if any.
    fn display_language(&self) -> Option<String>;

    /// Language configured for the user agent.
    fn user_agent_language(&self) -> Option<String>;

    /// Locale to use when no hint is supported.
    fn default_locale(&self) -> String;
}

/// Environment backed by [`Config`], falling back to the OS language.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    config: Config,
}

impl SystemEnvironment {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl LocaleEnvironment for SystemEnvironment {
    fn display_language(&self) -> Option<String> {
        self.config.display_language.clone()
    }

    fn user_agent_language(&self) -> Option<String> {
        self.config
            .ui_language
            .clone()
            .or_else(sys_locale::get_locale)
    }

    fn default_locale(&self) -> String {
        self.config.default_locale.clone()
    }
}

/// Fixed set of hints. Useful for embedding hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleHints {
    pub display_language: Option<String>,
    pub user_agent_language: Option<String>,
    pub default_locale: String,
}

impl LocaleEnvironment for LocaleHints {
    fn display_language(&self) -> Option<String> {
        self.display_language.clone()
    }

    fn user_agent_language(&self) -> Option<String> {
        self.user_agent_language.clone()
    }

    fn default_locale(&self) -> String {
        self.default_locale.clone()
    }
}

/// Pick the startup locale.
///
/// The default is returned even when it is not registered; lookups then
/// fall back to rendering keys verbatim.
pub fn detect_locale<E>(registry: &LocaleRegistry, env: &E) -> (String, LocaleSource)
where
    E: LocaleEnvironment + ?Sized,
{
    if let Some(lang) = env.display_language() {
        if registry.contains(&lang) {
            debug!("Using host display language {}", lang);
            return (lang, LocaleSource::Host);
        }
        debug!("Host display language {} is not supported", lang);
    }

    if let Some(lang) = env.user_agent_language() {
        if registry.contains(&lang) {
            debug!("Using user agent language {}", lang);
            return (lang, LocaleSource::UserAgent);
        }
        debug!("User agent language {} is not supported", lang);
    }

    let fallback = env.default_locale();
    if !registry.contains(&fallback) {
        warn!("Default locale {} is not registered", fallback);
    }
    debug!("Using default locale {}", fallback);
    (fallback, LocaleSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::from_json([
            ("en-US", r#"{"k": "en"}"#),
            ("fr-FR", r#"{"k": "fr"}"#),
            ("de-DE", r#"{"k": "de"}"#),
        ])
        .unwrap()
    }

    fn hints(host: Option<&str>, agent: Option<&str>, default: &str) -> LocaleHints {
        LocaleHints {
            display_language: host.map(str::to_string),
            user_agent_language: agent.map(str::to_string),
            default_locale: default.to_string(),
        }
    }

    #[rstest]
    #[case(Some("fr-FR"), Some("de-DE"), "fr-FR", LocaleSource::Host)]
    #[case(Some("fr-FR"), None, "fr-FR", LocaleSource::Host)]
    #[case(None, Some("de-DE"), "de-DE", LocaleSource::UserAgent)]
    #[case(Some("xx-XX"), Some("de-DE"), "de-DE", LocaleSource::UserAgent)]
    #[case(Some("fr-fr"), Some("de-DE"), "de-DE", LocaleSource::UserAgent)]
    #[case(Some("xx-XX"), Some("yy-YY"), "en-US", LocaleSource::Default)]
    #[case(None, None, "en-US", LocaleSource::Default)]
    fn test_detection_priority(
        #[case] host: Option<&str>,
        #[case] agent: Option<&str>,
        #[case] expected: &str,
        #[case] source: LocaleSource,
    ) {
        let detected = detect_locale(&registry(), &hints(host, agent, "en-US"));
        assert_eq!(detected, (expected.to_string(), source));
    }

    #[test]
    fn test_unregistered_default_is_still_returned() {
        let detected = detect_locale(&registry(), &hints(None, Some("xx"), "zz-ZZ"));
        assert_eq!(detected, ("zz-ZZ".to_string(), LocaleSource::Default));
    }

    #[test]
    fn test_system_environment_prefers_configured_hints() {
        let env = SystemEnvironment::new(Config {
            default_locale: "de-DE".to_string(),
            display_language: Some("fr-FR".to_string()),
            ui_language: Some("en-US".to_string()),
        });

        assert_eq!(env.display_language().as_deref(), Some("fr-FR"));
        assert_eq!(env.user_agent_language().as_deref(), Some("en-US"));
        assert_eq!(env.default_locale(), "de-DE");
        assert_eq!(
            detect_locale(&registry(), &env),
            ("fr-FR".to_string(), LocaleSource::Host)
        );
    }
}
