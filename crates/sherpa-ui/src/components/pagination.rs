use yew::prelude::*;

use crate::core::room_view::PageControls;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub controls: PageControls,
    pub prev_label: AttrValue,
    pub next_label: AttrValue,
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let controls = props.controls;
    if !controls.visible() {
        return html! {};
    }
    let step = |target: Option<usize>| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = target {
                on_change.emit(page);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="pagination">
            <button type="button" class="page-step" disabled={controls.prev().is_none()} onclick={step(controls.prev())}>
                {props.prev_label.clone()}
            </button>
            {for controls.pages().map(|page| {
                let active = page == controls.current;
                html! {
                    <button
                        type="button"
                        class={classes!("page-number", active.then_some("active"))}
                        aria-current={active.then_some("page")}
                        onclick={step(Some(page))}
                    >
                        {page}
                    </button>
                }
            })}
            <button type="button" class="page-step" disabled={controls.next().is_none()} onclick={step(controls.next())}>
                {props.next_label.clone()}
            </button>
        </nav>
    }
}
