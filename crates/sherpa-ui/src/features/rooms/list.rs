use web_sys::Element;
use yew::prelude::*;

use crate::app::api::use_catalog;
use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::room_card::RoomCard;
use crate::components::use_bundle;
use crate::core::catalog::{CatalogState, LIST_PAGE_SIZE, paginate};
use crate::core::room_view::{CardSummary, PageControls};
use crate::features::PageHero;

#[function_component(RoomsPage)]
pub(crate) fn rooms_page() -> Html {
    let bundle = use_bundle();
    let catalog = use_catalog();
    let page = use_state(|| 1_usize);
    let grid_ref = use_node_ref();

    let on_page = {
        let page = page.clone();
        let grid_ref = grid_ref.clone();
        Callback::from(move |next: usize| {
            page.set(next);
            if let Some(grid) = grid_ref.cast::<Element>() {
                grid.scroll_into_view();
            }
        })
    };

    let body = match &catalog {
        CatalogState::Loading => html! { <p class="muted">{bundle.text("common.loading")}</p> },
        CatalogState::Ready(rooms) if rooms.is_empty() => html! {
            <EmptyState
                title={AttrValue::from(bundle.format("rooms.available", &[("count", "0")]))}
                description={AttrValue::from(bundle.text("rooms.empty"))}
            />
        },
        CatalogState::Ready(rooms) => {
            let slice = paginate(rooms, LIST_PAGE_SIZE, *page);
            let controls = PageControls::new(slice.current, slice.total_pages);
            let count = rooms.len().to_string();
            html! {
                <>
                    <p class="rooms-count">{bundle.format("rooms.available", &[("count", &count)])}</p>
                    <div class="room-grid">
                        {for slice.rooms.iter().map(|room| {
                            let summary = CardSummary::from_room(room);
                            html! { <RoomCard key={summary.id.clone()} summary={summary} /> }
                        })}
                    </div>
                    <Pagination
                        controls={controls}
                        prev_label={AttrValue::from(bundle.text("common.prev"))}
                        next_label={AttrValue::from(bundle.text("common.next"))}
                        on_change={on_page}
                    />
                </>
            }
        }
    };

    html! {
        <>
            <PageHero title={bundle.text("rooms.title")} subtitle={AttrValue::from(bundle.text("rooms.subtitle"))} />
            <section class="section rooms" ref={grid_ref}>{body}</section>
        </>
    }
}
