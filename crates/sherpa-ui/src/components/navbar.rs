//! Site header: navigation, language switcher and booking trigger.
//!
//! # Design
//! - Header state transitions live in [`HeaderState::apply`]; this component
//!   only wires window events into it.
//! - The mobile panel and the booking modal each hold their own scroll lock.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::{Link, use_navigator};

use crate::app::ROUTES;
use crate::app::locale::set_language;
use crate::app::scroll::use_scroll_hold;
use crate::components::booking_form::BookingForm;
use crate::components::locale_menu::{LocaleMenu, LocaleMenuLayout};
use crate::components::modal::Modal;
use crate::components::{route_to, use_bundle};
use crate::core::routing::Page;
use crate::core::shell::{HeaderAction, HeaderState, ScrollHolder, is_active_link, nav_items};
use crate::i18n::LocaleCode;

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub path: AttrValue,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let bundle = use_bundle();
    let navigator = use_navigator();
    let header = use_reducer(HeaderState::default);
    let booking_open = use_state(|| false);

    {
        let dispatch = header.dispatcher();
        use_effect_with_deps(
            move |_| {
                let win = window();
                if let Ok(y) = win.scroll_y() {
                    dispatch.dispatch(HeaderAction::Scrolled(y));
                }
                let on_scroll = {
                    let dispatch = dispatch.clone();
                    EventListener::new(&win, "scroll", move |_| {
                        if let Ok(y) = window().scroll_y() {
                            dispatch.dispatch(HeaderAction::Scrolled(y));
                        }
                    })
                };
                let on_resize = EventListener::new(&win, "resize", move |_| {
                    if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                        dispatch.dispatch(HeaderAction::Resized(width));
                    }
                });
                move || drop((on_scroll, on_resize))
            },
            (),
        );
    }
    {
        let dispatch = header.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatch.dispatch(HeaderAction::CloseMenu);
                || ()
            },
            props.path.clone(),
        );
    }
    use_scroll_hold(ScrollHolder::MobileMenu, header.menu_open);

    let on_locale = {
        let path = props.path.clone();
        Callback::from(move |code: LocaleCode| {
            set_language(navigator.as_ref(), &path, code.code());
        })
    };
    let toggle_menu = {
        let dispatch = header.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(HeaderAction::ToggleMenu))
    };
    let open_booking = {
        let booking_open = booking_open.clone();
        let dispatch = header.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatch.dispatch(HeaderAction::CloseMenu);
            booking_open.set(true);
        })
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |()| booking_open.set(false))
    };

    let links = |class: &'static str| {
        nav_items()
            .into_iter()
            .map(|item| {
                let href = ROUTES.href(bundle.locale, &item.page);
                let active = is_active_link(&props.path, &href);
                html! {
                    <Link<AnyRoute> to={AnyRoute::new(href)} classes={classes!(class, active.then_some("active"))}>
                        {bundle.text(item.label_key)}
                    </Link<AnyRoute>>
                }
            })
            .collect::<Html>()
    };
    let language_label = AttrValue::from(bundle.text("nav.language"));

    html! {
        <header class={classes!("site-header", header.scrolled.then_some("scrolled"))}>
            <div class="header-inner">
                <Link<AnyRoute> to={route_to(bundle.locale, &Page::Home)} classes="brand">
                    <span class="brand-mark">{"⛰"}</span>
                    <span class="brand-name">{bundle.text("brand.name")}</span>
                </Link<AnyRoute>>
                <nav class="desktop-nav" aria-label={bundle.text("nav.label")}>
                    {links("nav-link")}
                </nav>
                <div class="header-actions">
                    <LocaleMenu
                        locale={bundle.locale}
                        on_select={on_locale.clone()}
                        layout={LocaleMenuLayout::Dropdown}
                        label={language_label.clone()}
                    />
                    <button type="button" class="btn btn-primary desktop-only" onclick={open_booking.clone()}>
                        {bundle.text("nav.book_now")}
                    </button>
                    <button
                        type="button"
                        class="hamburger mobile-only"
                        aria-label={bundle.text("nav.menu")}
                        aria-expanded={header.menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        {if header.menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {if header.menu_open {
                html! {
                    <div class="mobile-panel">
                        <nav class="mobile-nav">{links("mobile-link")}</nav>
                        <LocaleMenu
                            locale={bundle.locale}
                            on_select={on_locale}
                            layout={LocaleMenuLayout::Grid}
                            label={language_label}
                        />
                        <button type="button" class="btn btn-primary" onclick={open_booking}>
                            {bundle.text("nav.book_now")}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
            <Modal
                open={*booking_open}
                holder={ScrollHolder::BookingModal}
                on_close={close_booking}
                title={AttrValue::from(bundle.text("booking.title"))}
                close_label={AttrValue::from(bundle.text("common.close"))}
            >
                <BookingForm />
            </Modal>
        </header>
    }
}
