//! App-wide yewdux store.
//!
//! # Design
//! - Holds only cross-component state: the active locale and the scroll lock.
//! - Reducers are plain functions so they can be tested without a renderer.

use yewdux::store::Store;

use crate::core::shell::{ScrollHolder, ScrollLock};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Active display language.
    pub locale: LocaleCode,
    /// Surfaces currently suspending page scroll.
    pub scroll: ScrollLock,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            scroll: ScrollLock::default(),
        }
    }
}

/// `localStorage` key of the language preference.
pub const LOCALE_STORAGE_KEY: &str = "sherpa.locale";

/// Value written under [`LOCALE_STORAGE_KEY`] for `locale`.
#[must_use]
pub const fn stored_value(locale: LocaleCode) -> &'static str {
    locale.code()
}

/// Apply a language selection. Unsupported tags leave the store untouched.
///
/// Returns the selected locale so the caller can persist it and rewrite the
/// path prefix.
pub fn select_locale(store: &mut AppStore, tag: &str) -> Option<LocaleCode> {
    let locale = LocaleCode::from_lang_tag(tag)?;
    store.locale = locale;
    Some(locale)
}

/// Add or remove a scroll holder.
pub fn set_scroll_hold(store: &mut AppStore, holder: ScrollHolder, held: bool) {
    if held {
        store.scroll.acquire(holder);
    } else {
        store.scroll.release(holder);
    }
}

/// Effect cleanup of a scroll hold: drop the hold taken by this render, if any.
pub fn release_scroll_hold(store: &mut AppStore, holder: ScrollHolder, was_held: bool) {
    if was_held {
        set_scroll_hold(store, holder, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::{initial_preference, is_stale_preference};

    #[test]
    fn invalid_locale_selection_is_a_no_op() {
        let mut store = AppStore::default();
        assert_eq!(select_locale(&mut store, "ar"), Some(LocaleCode::Ar));
        assert_eq!(select_locale(&mut store, "ch"), None);
        assert_eq!(select_locale(&mut store, "klingon"), None);
        assert_eq!(store.locale, LocaleCode::Ar);
    }

    #[test]
    fn selected_language_is_what_the_next_boot_reads() {
        let mut store = AppStore::default();
        let chosen = select_locale(&mut store, "ar-SA").expect("supported");
        let persisted = stored_value(chosen);
        assert_eq!(persisted, "ar");
        assert!(!is_stale_preference(Some(persisted)));
        assert_eq!(initial_preference(Some(persisted), "/rooms", Some("zh-CN")), LocaleCode::Ar);
        assert_eq!(LOCALE_STORAGE_KEY, "sherpa.locale");
    }

    #[test]
    fn unmounting_the_open_menu_releases_its_lock() {
        let mut store = AppStore::default();
        set_scroll_hold(&mut store, ScrollHolder::MobileMenu, true);
        set_scroll_hold(&mut store, ScrollHolder::BookingModal, true);
        release_scroll_hold(&mut store, ScrollHolder::MobileMenu, true);
        assert!(store.scroll.is_locked());
        release_scroll_hold(&mut store, ScrollHolder::BookingModal, true);
        assert!(!store.scroll.is_locked());
        release_scroll_hold(&mut store, ScrollHolder::BookingModal, true);
        assert!(!store.scroll.is_locked());
    }

    #[test]
    fn cleanup_of_an_inactive_hold_keeps_other_holders() {
        let mut store = AppStore::default();
        set_scroll_hold(&mut store, ScrollHolder::GalleryLightbox, true);
        release_scroll_hold(&mut store, ScrollHolder::GalleryLightbox, false);
        assert!(store.scroll.is_locked());
    }

    #[test]
    fn scroll_holds_are_tracked_per_surface() {
        let mut store = AppStore::default();
        set_scroll_hold(&mut store, ScrollHolder::GalleryLightbox, true);
        assert!(store.scroll.is_locked());
        set_scroll_hold(&mut store, ScrollHolder::GalleryLightbox, false);
        assert!(!store.scroll.is_locked());
    }
}
