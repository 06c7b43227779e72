//! Reusable view components.

pub(crate) mod booking_form;
pub(crate) mod carousel;
pub(crate) mod empty_state;
pub(crate) mod footer;
pub(crate) mod locale_menu;
pub(crate) mod modal;
pub(crate) mod navbar;
pub(crate) mod pagination;
pub(crate) mod room_card;

use yew::prelude::*;
use yew_router::AnyRoute;

use crate::app::ROUTES;
use crate::core::routing::Page;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};

/// Router target for `page` in `locale`.
pub(crate) fn route_to(locale: LocaleCode, page: &Page) -> AnyRoute {
    AnyRoute::new(ROUTES.href(locale, page))
}

/// Active translation bundle from context.
#[hook]
pub(crate) fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}
