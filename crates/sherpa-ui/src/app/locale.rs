//! Language selection: the only writer of the stored preference.

use gloo::console;
use yew_router::prelude::Navigator;
use yew_router::AnyRoute;
use yewdux::prelude::Dispatch;

use crate::app::preferences::persist_locale;
use crate::core::routing::switch_locale;
use crate::core::store::{AppStore, select_locale};

/// Select a language by tag, persist it and move to the same page under the
/// new prefix. Unsupported tags are ignored.
pub(crate) fn set_language(navigator: Option<&Navigator>, current_path: &str, tag: &str) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut chosen = None;
    dispatch.reduce_mut(|store| {
        chosen = select_locale(store, tag);
    });
    let Some(locale) = chosen else {
        console::warn!("ignored unsupported language", tag.to_string());
        return;
    };
    persist_locale(locale);
    let target = switch_locale(current_path, locale);
    if let Some(navigator) = navigator {
        if target != current_path {
            navigator.push(&AnyRoute::new(target));
        }
    }
}
