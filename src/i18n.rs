use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

const ENGLISH_CATALOG: &str = include_str!("../locales/en.json");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").expect("placeholder pattern"));
static STYLED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a>(.*?)</a>").expect("styled tag pattern"));

/// Message keys used by the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ExportProgress,
    Close,
    StopExport,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ExportProgress => "EXPORT_PROGRESS",
            MessageKey::Close => "CLOSE",
            MessageKey::StopExport => "STOP_EXPORT",
        }
    }
}

impl Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a resolved message. `Styled` is the text that was wrapped in
/// `<a>...</a>` in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Styled(String),
}

/// Resolves message keys to localized text for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    locale: String,
    messages: Arc<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

impl Translator {
    /// The catalog bundled with the binary.
    pub fn english() -> Self {
        match Self::from_json("en", ENGLISH_CATALOG) {
            Ok(translator) => translator,
            Err(e) => {
                warn!("Bundled English catalog is invalid: {}", e);
                Self {
                    locale: "en".to_string(),
                    messages: Arc::new(HashMap::new()),
                }
            }
        }
    }

    pub fn from_json(locale: &str, json: &str) -> serde_json::Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.to_string(),
            messages: Arc::new(messages),
        })
    }

    /// Reads a catalog file. Keys it does not define come from English.
    pub async fn load(locale: &str, path: &Path) -> std::io::Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        let translator = Self::from_json(locale, &json)?;
        Ok(translator.with_fallback(&Self::english()))
    }

    pub fn with_fallback(self, fallback: &Translator) -> Self {
        let mut messages = (*fallback.messages).clone();
        messages.extend(
            self.messages
                .iter()
                .map(|(key, text)| (key.clone(), text.clone())),
        );
        Self {
            locale: self.locale,
            messages: Arc::new(messages),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Looks up `key` and fills its `{{ path }}` placeholders from `params`.
    /// Unknown keys resolve to the key itself.
    pub fn resolve(&self, key: MessageKey, params: &Value) -> String {
        let Some(template) = self.messages.get(key.as_str()) else {
            warn!("Missing translation for {} in locale {}", key, self.locale);
            return key.as_str().to_string();
        };

        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let path = &caps[1];
                match lookup(params, path) {
                    Some(value) => value,
                    None => {
                        debug!("No value for placeholder {} in {}", path, key);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    pub fn resolve_markup(&self, key: MessageKey, params: &Value) -> Vec<Segment> {
        split_markup(&self.resolve(key, params))
    }
}

fn lookup(params: &Value, path: &str) -> Option<String> {
    let pointer = format!("/{}", path.replace('.', "/"));
    params.pointer(&pointer).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Splits resolved text around `<a>...</a>`. A tag without its closing pair
/// stays in the plain text.
pub fn split_markup(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in STYLED_TAG.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Text(text[last..whole.start()].to_string()));
        }
        segments.push(Segment::Styled(caps[1].to_string()));
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportProgress;
    use serde_json::json;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn progress_params(current: u64, total: u64) -> Value {
        json!({ "progress": ExportProgress::new(current, total) })
    }

    #[test]
    fn test_english_catalog_has_dialog_keys() {
        let translator = Translator::english();
        assert_eq!(translator.locale(), "en");
        assert_eq!(translator.resolve(MessageKey::Close, &Value::Null), "Close");
        assert_eq!(
            translator.resolve(MessageKey::StopExport, &Value::Null),
            "Stop"
        );
    }

    #[test]
    fn test_resolve_interpolates_progress() {
        let translator = Translator::english();
        let text = translator.resolve(MessageKey::ExportProgress, &progress_params(50, 200));
        assert_eq!(text, "<a>50 / 200</a> files exported");
    }

    #[test]
    fn test_resolve_markup_splits_styled_span() {
        let translator = Translator::english();
        let segments =
            translator.resolve_markup(MessageKey::ExportProgress, &progress_params(3, 9));
        assert_eq!(
            segments,
            vec![
                Segment::Styled("3 / 9".to_string()),
                Segment::Text(" files exported".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_key_resolves_to_key() {
        let translator = Translator::from_json("xx", "{}").unwrap();
        assert_eq!(translator.resolve(MessageKey::Close, &Value::Null), "CLOSE");
    }

    #[test]
    fn test_missing_placeholder_value_is_kept() {
        let translator =
            Translator::from_json("en", r#"{"CLOSE": "Close {{ who }} now"}"#).unwrap();
        assert_eq!(
            translator.resolve(MessageKey::Close, &json!({})),
            "Close {{ who }} now"
        );
        assert_eq!(
            translator.resolve(MessageKey::Close, &json!({ "who": "it" })),
            "Close it now"
        );
    }

    #[test]
    fn test_split_markup_edge_cases() {
        assert_eq!(
            split_markup("plain"),
            vec![Segment::Text("plain".to_string())]
        );
        assert_eq!(
            split_markup("a <a>b</a> c <a>d</a>"),
            vec![
                Segment::Text("a ".to_string()),
                Segment::Styled("b".to_string()),
                Segment::Text(" c ".to_string()),
                Segment::Styled("d".to_string()),
            ]
        );
        assert_eq!(
            split_markup("broken <a>tag"),
            vec![Segment::Text("broken <a>tag".to_string())]
        );
        assert!(split_markup("").is_empty());
    }

    #[tokio::test]
    async fn test_load_falls_back_to_english() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("fr.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(r#"{"CLOSE": "Fermer"}"#.as_bytes()).unwrap();

        let translator = Translator::load("fr", &path).await.unwrap();
        assert_eq!(translator.locale(), "fr");
        assert_eq!(translator.resolve(MessageKey::Close, &Value::Null), "Fermer");
        assert_eq!(
            translator.resolve(MessageKey::StopExport, &Value::Null),
            "Stop"
        );
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_catalog() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not json").unwrap();

        let err = Translator::load("bad", &path).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
