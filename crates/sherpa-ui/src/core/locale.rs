//! Active-language resolution from paths, stored values and the browser.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Locale named by the path's first segment when it is a supported,
/// non-default code; otherwise [`DEFAULT_LOCALE`].
///
/// Unknown or legacy prefixes (`/ch`, `/fr`) are treated as no prefix.
#[must_use]
pub fn resolve(path: &str) -> LocaleCode {
    split_prefix(path).0.unwrap_or(DEFAULT_LOCALE)
}

/// Split a known locale prefix off `path`.
///
/// Returns the prefix locale (if any) and the remainder, which always starts
/// with `/` or is empty.
#[must_use]
pub fn split_prefix(path: &str) -> (Option<LocaleCode>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (head, rest) = trimmed
        .find('/')
        .map_or((trimmed, ""), |idx| (&trimmed[..idx], &trimmed[idx..]));
    match prefix_locale(head) {
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

/// Route prefix for `locale`: empty for the default language.
#[must_use]
pub fn prefix(locale: LocaleCode) -> String {
    if locale == DEFAULT_LOCALE {
        String::new()
    } else {
        format!("/{}", locale.code())
    }
}

/// Preferred locale at boot: stored value, then URL prefix, then browser
/// language, then the default.
#[must_use]
pub fn initial_preference(stored: Option<&str>, path: &str, browser: Option<&str>) -> LocaleCode {
    stored
        .and_then(LocaleCode::from_lang_tag)
        .or_else(|| split_prefix(path).0)
        .or_else(|| browser.and_then(LocaleCode::from_lang_tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Whether a stored preference is present but names no supported language
/// (e.g. the retired `ch`), so it should be overwritten with the default.
#[must_use]
pub fn is_stale_preference(stored: Option<&str>) -> bool {
    stored.is_some_and(|value| LocaleCode::from_lang_tag(value).is_none())
}

fn prefix_locale(segment: &str) -> Option<LocaleCode> {
    LocaleCode::all()
        .into_iter()
        .find(|locale| *locale != DEFAULT_LOCALE && locale.code() == segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_stored_values_are_stale() {
        assert!(is_stale_preference(Some("ch")));
        assert!(is_stale_preference(Some("")));
        assert!(!is_stale_preference(Some("zh-CN")));
        assert!(!is_stale_preference(None));
    }

    #[test]
    fn resolve_reads_known_prefixes_only() {
        assert_eq!(resolve("/zh/rooms"), LocaleCode::Zh);
        assert_eq!(resolve("/ar"), LocaleCode::Ar);
        assert_eq!(resolve("/ar/"), LocaleCode::Ar);
        assert_eq!(resolve("/rooms"), LocaleCode::En);
        assert_eq!(resolve("/ch/rooms"), LocaleCode::En);
        assert_eq!(resolve("/en/rooms"), LocaleCode::En);
        assert_eq!(resolve("/zhx"), LocaleCode::En);
        assert_eq!(resolve(""), LocaleCode::En);
    }

    #[test]
    fn split_prefix_keeps_remainder() {
        assert_eq!(split_prefix("/zh/room/3"), (Some(LocaleCode::Zh), "/room/3"));
        assert_eq!(split_prefix("/ar"), (Some(LocaleCode::Ar), ""));
        assert_eq!(split_prefix("/about"), (None, "/about"));
        assert_eq!(split_prefix("/"), (None, "/"));
    }

    #[test]
    fn initial_preference_order() {
        assert_eq!(
            initial_preference(Some("ar"), "/zh/rooms", Some("zh-CN")),
            LocaleCode::Ar
        );
        assert_eq!(
            initial_preference(Some("ch"), "/zh/rooms", Some("ar")),
            LocaleCode::Zh
        );
        assert_eq!(initial_preference(None, "/rooms", Some("ar-EG")), LocaleCode::Ar);
        assert_eq!(initial_preference(None, "/rooms", Some("de")), LocaleCode::En);
        assert_eq!(initial_preference(None, "/", None), LocaleCode::En);
    }

    #[test]
    fn prefix_is_empty_for_default() {
        assert_eq!(prefix(LocaleCode::En), "");
        assert_eq!(prefix(LocaleCode::Ar), "/ar");
    }
}
