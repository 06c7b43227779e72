//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};

use crate::core::config::{API_BASE_META, SiteConfig};
use crate::core::locale::is_stale_preference;
use crate::core::store::{LOCALE_STORAGE_KEY, stored_value};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Stored language preference; an unsupported value is reset to the default.
pub(crate) fn stored_locale() -> Option<String> {
    let stored = LocalStorage::get::<String>(LOCALE_STORAGE_KEY).ok();
    if is_stale_preference(stored.as_deref()) {
        persist_locale(DEFAULT_LOCALE);
        return None;
    }
    stored
}

pub(crate) fn browser_language() -> Option<String> {
    window().navigator().language()
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_STORAGE_KEY, stored_value(locale)) {
        log_storage_error("set", LOCALE_STORAGE_KEY, &err.to_string());
    }
}

pub(crate) fn site_config() -> SiteConfig {
    let selector = format!("meta[name=\"{API_BASE_META}\"]");
    let meta = document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"));
    SiteConfig::resolve(meta.as_deref(), option_env!("SHERPA_API_BASE_URL"))
}

pub(crate) fn apply_direction(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("dir", if locale.rtl() { "rtl" } else { "ltr" });
        let _ = root.set_attribute("lang", locale.code());
    }
}

pub(crate) fn apply_scroll_lock(locked: bool) {
    if let Some(body) = document().body() {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            console::error!("body overflow update failed");
        }
    }
}

pub(crate) fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
