//! Menu label lookup.
//!
//! Label keys use the front-end's `Namespace["text"]` form, for example
//! `Nav["模型拓扑"]`. When no translation is known for the requested
//! locale the quoted text is shown as-is.

use std::collections::HashMap;

pub trait LabelResolver: Send + Sync {
    fn resolve(&self, key: &str, locale: &str) -> String;
}

/// Splits `Nav["模型拓扑"]` into `("Nav", "模型拓扑")`.
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    let (namespace, rest) = key.split_once('[')?;
    let text = rest.strip_suffix(']')?;
    let text = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))?;
    if namespace.is_empty() {
        return None;
    }
    Some((namespace, text))
}

/// Text shown when a key has no translation.
pub fn fallback(key: &str) -> String {
    split_key(key)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// In-memory translation table keyed by `(locale, label key)`.
#[derive(Debug, Clone, Default)]
pub struct StaticLabels {
    table: HashMap<(String, String), String>,
}

impl StaticLabels {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Translations for the navigation labels the application ships with.
    pub fn builtin() -> Self {
        let mut labels = Self::empty();
        for (key, zh, en) in [
            (r#"Nav["模型管理"]"#, "模型管理", "Model Management"),
            (r#"Nav["模型拓扑"]"#, "模型拓扑", "Model Topology"),
        ] {
            labels.insert("zh_CN", key, zh);
            labels.insert("en", key, en);
        }
        labels
    }

    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        self.table
            .insert((locale.to_string(), key.to_string()), text.to_string());
    }
}

impl LabelResolver for StaticLabels {
    fn resolve(&self, key: &str, locale: &str) -> String {
        match self.table.get(&(locale.to_string(), key.to_string())) {
            Some(text) => text.clone(),
            None => {
                tracing::debug!(key, locale, "no translation, using fallback");
                fallback(key)
            }
        }
    }
}
