//! Language switcher used in the header.
//!
//! # Design
//! - Selection state is owned by the caller; the menu only emits the choice.
//! - Desktop shows a dropdown, the mobile menu a flat grid of badges.

use yew::prelude::*;

use crate::i18n::LocaleCode;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocaleMenuLayout {
    Dropdown,
    Grid,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub on_select: Callback<LocaleCode>,
    pub layout: LocaleMenuLayout,
    pub label: AttrValue,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let open = use_state(|| false);
    let option = |code: LocaleCode, close: Option<UseStateHandle<bool>>| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(open) = &close {
                open.set(false);
            }
            on_select.emit(code);
        });
        let active = code == props.locale;
        html! {
            <button
                type="button"
                class={classes!("locale-option", active.then_some("active"))}
                lang={code.code()}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                <span class="locale-badge">{code.badge()}</span>
                <span class="locale-label">{code.label()}</span>
            </button>
        }
    };

    match props.layout {
        LocaleMenuLayout::Grid => html! {
            <div class="locale-grid" role="group" aria-label={props.label.clone()}>
                {for LocaleCode::all().into_iter().map(|code| option(code, None))}
            </div>
        },
        LocaleMenuLayout::Dropdown => {
            let toggle = {
                let open = open.clone();
                Callback::from(move |_: MouseEvent| open.set(!*open))
            };
            html! {
                <div class={classes!("locale-dropdown", open.then_some("open"))}>
                    <button
                        type="button"
                        class="locale-trigger"
                        aria-label={props.label.clone()}
                        aria-expanded={open.to_string()}
                        onclick={toggle}
                    >
                        {props.locale.badge()}
                    </button>
                    {if *open {
                        html! {
                            <div class="locale-options">
                                {for LocaleCode::all().into_iter().map(|code| option(code, Some(open.clone())))}
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            }
        }
    }
}
