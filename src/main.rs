//! Command line front end for the add-in localization engine.
//!
//! ```text
//! addin-locale [--locale TAG] [--list | --locales] [KEY [NAME=VALUE ...]]
//! ```

use std::sync::Arc;

use anyhow::{Context, bail};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use addin_locale::i18n::SystemEnvironment;
use addin_locale::{Config, LocaleRegistry, Translator};

const HELP: &str = "\
addin-locale

USAGE:
  addin-locale [OPTIONS] [KEY [NAME=VALUE ...]]

OPTIONS:
  --locale TAG   Switch to TAG after detection
  --list         Print every translation of the active locale as JSON
  --locales      Print the supported locales as JSON
  -h, --help     Print help
";

#[derive(Serialize)]
struct LocaleSummary<'a> {
    tag: &'a str,
    keys: usize,
    active: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("addin_locale=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }
    let list = args.contains("--list");
    let locales = args.contains("--locales");
    let requested: Option<String> = args.opt_value_from_str("--locale")?;
    let rest = args
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("argument is not valid UTF-8: {:?}", arg))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    let config = Config::from_env()?;
    info!("Configuration loaded, default locale {}", config.default_locale);

    let registry = Arc::new(LocaleRegistry::builtin().context("failed to load translations")?);
    let translator = Translator::detect(registry, &SystemEnvironment::new(config));

    if let Some(tag) = requested {
        if !translator.set_locale(&tag) {
            bail!(
                "{}",
                translator.t_with("settings.language_unsupported", &json!({ "language": tag }))
            );
        }
    }

    if locales {
        let active = translator.locale();
        let registry = translator.registry();
        let summary: Vec<LocaleSummary<'_>> = registry
            .supported_locales()
            .into_iter()
            .map(|tag| LocaleSummary {
                tag,
                keys: registry.dictionary(tag).map_or(0, |dict| dict.len()),
                active: tag == active,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if list {
        let all: std::collections::BTreeMap<_, _> = translator.get_all().into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let Some((key, pairs)) = rest.split_first() else {
        println!("{}", translator.t("app.title"));
        return Ok(());
    };

    let params = parse_params(pairs)?;
    println!("{}", translator.t_with(key, &params));

    Ok(())
}

/// Turn `name=value` arguments into a JSON object.
fn parse_params(pairs: &[String]) -> anyhow::Result<Value> {
    let mut params = Map::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("expected NAME=VALUE, got '{}'", pair);
        };
        params.insert(name.to_string(), Value::String(value.to_string()));
    }
    Ok(Value::Object(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let pairs = vec!["name=Ada".to_string(), "expr=a=b".to_string()];
        assert_eq!(
            parse_params(&pairs).unwrap(),
            json!({"name": "Ada", "expr": "a=b"})
        );
    }

    #[test]
    fn test_parse_params_rejects_bare_words() {
        assert!(parse_params(&["oops".to_string()]).is_err());
    }
}
