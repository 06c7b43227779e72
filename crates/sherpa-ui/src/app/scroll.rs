//! Scroll-lock participation for overlay surfaces.

use yew::prelude::*;
use yewdux::prelude::Dispatch;

use crate::core::shell::ScrollHolder;
use crate::core::store::{AppStore, release_scroll_hold, set_scroll_hold};

/// Hold the page scroll lock while `active`; released on change and unmount.
#[hook]
pub(crate) fn use_scroll_hold(holder: ScrollHolder, active: bool) {
    use_effect_with_deps(
        move |active| {
            let dispatch = Dispatch::<AppStore>::new();
            let held = *active;
            dispatch.reduce_mut(|store| set_scroll_hold(store, holder, held));
            move || dispatch.reduce_mut(|store| release_scroll_hold(store, holder, held))
        },
        active,
    );
}
