//! JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English (default, unprefixed routes).
    En,
    /// Chinese (Simplified).
    Zh,
    /// Arabic, rendered right-to-left.
    Ar,
}

impl LocaleCode {
    /// All supported locales in switcher order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Zh, Self::Ar]
    }

    /// Two-letter code, also used as the route prefix.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ar => "ar",
        }
    }

    /// Native language name for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ar => "العربية",
        }
    }

    /// Short tag shown on the switcher trigger.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Zh => "中文",
            Self::Ar => "عربي",
        }
    }

    /// Whether text in this language runs right-to-left.
    #[must_use]
    pub const fn rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Map an arbitrary language tag (`zh-CN`, `ar_SA`, `en`) to a supported
    /// locale. Unsupported or legacy tags (`ch`, `fr`) yield `None`.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English, then to the key itself.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted path (`section.key`).
    ///
    /// An unknown key is returned verbatim so the gap is visible on the page.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| path.to_string())
    }

    /// Resolve `path` and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn format(&self, path: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(path), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Whether the locale prefers RTL layout (bidi).
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("zh-CN"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("ar_SA"), Some(LocaleCode::Ar));
        assert_eq!(LocaleCode::from_lang_tag(" EN "), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("ch"), None);
        assert_eq!(LocaleCode::from_lang_tag("fr-FR"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn missing_key_is_returned_verbatim() {
        let bundle = TranslationBundle::new(LocaleCode::Ar);
        assert_eq!(bundle.text("nonexistent.key"), "nonexistent.key");
        assert_eq!(bundle.text("nav"), "nav");
    }

    #[test]
    fn format_substitutes_named_placeholders() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.format("rooms.available", &[("count", "4")]),
            "4 rooms available"
        );
        assert_eq!(
            bundle.format("rooms.card.guests", &[("count", "2")]),
            "2 Guest(s)"
        );
    }

    #[test]
    fn every_locale_carries_the_english_keys() {
        let english: Value = serde_json::from_str(raw_locale(LocaleCode::En)).unwrap_or_default();
        let mut keys = Vec::new();
        collect_keys(&english, String::new(), &mut keys);
        assert!(!keys.is_empty());
        for locale in [LocaleCode::Zh, LocaleCode::Ar] {
            let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or_default();
            for key in &keys {
                assert!(
                    resolve(&tree, key).is_some(),
                    "{} is missing {key}",
                    locale.code()
                );
            }
        }
    }

    fn collect_keys(node: &Value, prefix: String, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (name, child) in map {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    collect_keys(child, path, out);
                }
            }
            Value::String(_) => out.push(prefix),
            _ => {}
        }
    }
}
