//! Overlay dialog that holds the scroll lock while open.

use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::app::scroll::use_scroll_hold;
use crate::core::shell::ScrollHolder;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub holder: ScrollHolder,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub close_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    use_scroll_hold(props.holder, props.open);
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    })
                });
                move || drop(listener)
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class={classes!("modal-panel", props.class.clone())}
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <button type="button" class="modal-close" aria-label={props.close_label.clone()} onclick={close}>
                    {"✕"}
                </button>
                {props.title.clone().map(|title| html! { <h2 class="modal-title">{title}</h2> }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
        </div>
    }
}
