//! Application root: routing, locale context and document-level effects.

use std::sync::LazyLock;

use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::core::locale::{initial_preference, split_prefix};
use crate::core::routing::{LocalizedRoute, Page, RouteMatch, RouteTable, switch_locale};
use crate::core::store::AppStore;
use crate::features::about::AboutPage;
use crate::features::book_now::BookNowPage;
use crate::features::contact::ContactPage;
use crate::features::gallery::GalleryPage;
use crate::features::home::HomePage;
use crate::features::rooms::{RoomDetailPage, RoomsPage};
use crate::features::services::ServicesPage;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use api::ApiCtx;
use preferences::{apply_direction, apply_scroll_lock, browser_language, scroll_to_top, stored_locale};

pub(crate) mod api;
pub(crate) mod locale;
mod preferences;
pub(crate) mod scroll;

pub(crate) static ROUTES: LazyLock<RouteTable> = LazyLock::new(RouteTable::new);

#[function_component(SherpaApp)]
fn sherpa_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(&preferences::site_config()), ());
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <SiteRoot />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[function_component(SiteRoot)]
fn site_root() -> Html {
    let navigator = use_navigator();
    let path = use_location().map_or_else(|| "/".to_string(), |location| location.path().to_string());
    let route = ROUTES.parse(&path);
    let locale = match &route {
        RouteMatch::Matched(matched) => matched.locale,
        RouteMatch::Redirect(_) => DEFAULT_LOCALE,
    };
    let bundle = use_memo(|locale| TranslationBundle::new(*locale), locale);
    let scroll_locked = use_selector(|store: &AppStore| store.scroll.is_locked());

    {
        // Unprefixed entry paths follow the saved or browser preference once.
        let navigator = navigator.clone();
        let path = path.clone();
        use_effect_with_deps(
            move |_| {
                let preferred = initial_preference(
                    stored_locale().as_deref(),
                    &path,
                    browser_language().as_deref(),
                );
                if split_prefix(&path).0.is_none() && preferred != DEFAULT_LOCALE {
                    if let Some(navigator) = navigator {
                        navigator.replace(&AnyRoute::new(switch_locale(&path, preferred)));
                    }
                }
                || ()
            },
            (),
        );
    }
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |route| {
                if let RouteMatch::Redirect(target) = route {
                    if let Some(navigator) = navigator {
                        navigator.replace(&AnyRoute::new(target.clone()));
                    }
                }
                || ()
            },
            route.clone(),
        );
    }
    use_effect_with_deps(
        move |locale| {
            let locale = *locale;
            Dispatch::<AppStore>::new().reduce_mut(|store| store.locale = locale);
            apply_direction(locale);
            || ()
        },
        locale,
    );
    use_effect_with_deps(
        |locked| {
            apply_scroll_lock(*locked);
            || ()
        },
        *scroll_locked,
    );
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        path.clone(),
    );

    let content = match route {
        RouteMatch::Matched(LocalizedRoute { page, .. }) => {
            let shell = page.shows_shell();
            let body = render_page(page);
            if shell {
                html! {
                    <>
                        <Navbar path={AttrValue::from(path)} />
                        <main class="site-main">{body}</main>
                        <Footer />
                    </>
                }
            } else {
                body
            }
        }
        RouteMatch::Redirect(_) => Html::default(),
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            {content}
        </ContextProvider<TranslationBundle>>
    }
}

fn render_page(page: Page) -> Html {
    match page {
        Page::Home => html! { <HomePage /> },
        Page::About => html! { <AboutPage /> },
        Page::Services => html! { <ServicesPage /> },
        Page::Rooms => html! { <RoomsPage /> },
        Page::RoomDetail { id } => html! { <RoomDetailPage id={AttrValue::from(id)} /> },
        Page::Contact => html! { <ContactPage /> },
        Page::Gallery => html! { <GalleryPage /> },
        Page::BookNow => html! { <BookNowPage /> },
    }
}

/// Mount the application on `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SherpaApp>::with_root(root).render();
    } else {
        yew::Renderer::<SherpaApp>::new().render();
    }
}
