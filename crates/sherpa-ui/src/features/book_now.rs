use std::rc::Rc;

use yew::prelude::*;

use crate::app::api::use_catalog;
use crate::components::booking_form::BookingForm;
use crate::components::use_bundle;
use crate::core::catalog::CatalogState;
use crate::features::PageHero;

#[function_component(BookNowPage)]
pub(crate) fn book_now_page() -> Html {
    let bundle = use_bundle();
    let catalog = use_catalog();
    let body = match catalog {
        CatalogState::Loading => html! { <p class="muted">{bundle.text("common.loading")}</p> },
        CatalogState::Ready(rooms) => html! { <BookingForm rooms={Some(Rc::clone(&rooms))} /> },
    };
    html! {
        <>
            <PageHero title={bundle.text("book_now.title")} subtitle={AttrValue::from(bundle.text("book_now.subtitle"))} />
            <section class="section narrow">{body}</section>
        </>
    }
}
