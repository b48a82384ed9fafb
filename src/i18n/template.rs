//! Template rendering.
//!
//! Placeholders are written `{identifier}` where the identifier is made of
//! ASCII letters, digits and `_`. Rendering is a single left-to-right pass;
//! substituted text is never scanned again.
//!
//! - A placeholder with no value is kept verbatim.
//! - `{{` and `}}` render as literal `{` and `}`.
//! - Any other brace is copied as-is.

use serde_json::Value;

/// Render `template`, asking `resolve` for the value of each placeholder.
pub fn interpolate<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{') {
            if let Some(end) = tail[1..].find('}') {
                let name = &tail[1..1 + end];
                if is_identifier(name) {
                    match resolve(name) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(&tail[..end + 2]),
                    }
                    rest = &tail[end + 2..];
                    continue;
                }
            }
        }

        // Lone brace
        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

/// Render `template` with values taken from a JSON object.
///
/// Strings are inserted raw, every other JSON value as its JSON text.
/// A `params` value that is not an object supplies nothing.
pub fn render(template: &str, params: &Value) -> String {
    interpolate(template, |name| params.get(name).map(param_text))
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Hello {name}", json!({"name": "Ada"}), "Hello Ada")]
    #[case("Hello {name}", json!({}), "Hello {name}")]
    #[case("Hello {name}", Value::Null, "Hello {name}")]
    #[case("{a}{b}{a}", json!({"a": "1", "b": "2"}), "121")]
    #[case("{done} of {total}", json!({"done": 3, "total": 10}), "3 of 10")]
    #[case("flag={on}", json!({"on": true}), "flag=true")]
    #[case("x={v}", json!({"v": null}), "x=null")]
    #[case("{first} {missing}", json!({"first": "A"}), "A {missing}")]
    #[case("no placeholders", json!({"name": "Ada"}), "no placeholders")]
    #[case("", json!({"name": "Ada"}), "")]
    fn test_render(#[case] template: &str, #[case] params: Value, #[case] expected: &str) {
        assert_eq!(render(template, &params), expected);
    }

    #[test]
    fn test_substitution_is_not_rescanned() {
        let params = json!({"a": "{b}", "b": "nope"});
        assert_eq!(render("{a}", &params), "{b}");
    }

    #[rstest]
    #[case("{{name}}", "{name}")]
    #[case("{{ literal }}", "{ literal }")]
    #[case("a {{ b", "a { b")]
    #[case("a }} b", "a } b")]
    #[case("{{{name}}}", "{Ada}")]
    fn test_double_braces_are_literal(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &json!({"name": "Ada"})), expected);
    }

    #[rstest]
    #[case("{ name }")]
    #[case("{}")]
    #[case("{user-name}")]
    #[case("open { only")]
    #[case("close } only")]
    #[case("{unterminated")]
    fn test_malformed_placeholders_are_copied(#[case] template: &str) {
        let params = json!({"name": "Ada", "user-name": "Ada", "unterminated": "x"});
        assert_eq!(render(template, &params), template);
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let params = json!({"name": "Ada"});
        assert_eq!(render("ようこそ、{name} さん！", &params), "ようこそ、Ada さん！");
    }

    #[test]
    fn test_interpolate_with_closure() {
        let mut seen = Vec::new();
        let out = interpolate("{x}-{y}", |name| {
            seen.push(name.to_string());
            (name == "x").then(|| "1".to_string())
        });

        assert_eq!(out, "1-{y}");
        assert_eq!(seen, vec!["x", "y"]);
    }
}
