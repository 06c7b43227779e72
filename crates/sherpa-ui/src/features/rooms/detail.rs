//! Single room page.
//!
//! # Design
//! - Rendered without the site header and footer.
//! - The identifier comes straight from the path and is matched after
//!   numeric/string coercion; unknown ids show a not-found state.

use sherpa_api_models::Room;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::{Link, use_navigator};

use crate::app::api::use_catalog;
use crate::components::booking_form::BookingForm;
use crate::components::carousel::ImageCarousel;
use crate::components::empty_state::EmptyState;
use crate::components::{route_to, use_bundle};
use crate::core::catalog::{CatalogState, find_by_id};
use crate::core::room_view::{
    AmenityIcon, CHECK_IN_TIME, CHECK_OUT_TIME, DetailTab, HOUSE_NOTE_KEYS, format_price,
};
use crate::core::routing::Page;
use crate::i18n::TranslationBundle;

#[derive(Properties, PartialEq)]
pub(crate) struct RoomDetailProps {
    pub id: AttrValue,
}

#[function_component(RoomDetailPage)]
pub(crate) fn room_detail_page(props: &RoomDetailProps) -> Html {
    let bundle = use_bundle();
    let catalog = use_catalog();
    let navigator = use_navigator();
    let tab = use_state(DetailTab::default);

    let back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let body = match &catalog {
        CatalogState::Loading => html! { <p class="muted">{bundle.text("common.loading")}</p> },
        CatalogState::Ready(rooms) => match find_by_id(rooms, &props.id) {
            Ok(room) => room_view(room, &bundle, &tab),
            Err(_) => html! {
                <EmptyState
                    title={AttrValue::from(bundle.text("room.detail.not_found"))}
                    description={AttrValue::from(bundle.text("room.detail.not_found_body"))}
                >
                    <Link<AnyRoute> to={route_to(bundle.locale, &Page::Rooms)} classes="btn btn-primary">
                        {bundle.text("room.detail.back_to_rooms")}
                    </Link<AnyRoute>>
                </EmptyState>
            },
        },
    };

    html! {
        <div class="room-detail">
            <button type="button" class="back-button" onclick={back}>
                {bundle.text("room.detail.back")}
            </button>
            {body}
        </div>
    }
}

fn room_view(room: &Room, bundle: &TranslationBundle, tab: &UseStateHandle<DetailTab>) -> Html {
    let guests = room.guests.to_string();
    let tabs = DetailTab::all().into_iter().map(|candidate| {
        let active = candidate == **tab;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(candidate))
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", active.then_some("active"))}
                aria-selected={active.to_string()}
                onclick={onclick}
            >
                {bundle.text(candidate.label_key())}
            </button>
        }
    });

    let panel = match **tab {
        DetailTab::Overview => html! {
            <div class="tab-panel">
                <p>{room.description.clone()}</p>
                <dl class="room-facts">
                    <dt>{bundle.text("room.detail.guests")}</dt>
                    <dd>{bundle.format("rooms.card.guests", &[("count", &guests)])}</dd>
                    <dt>{bundle.text("room.detail.size")}</dt>
                    <dd>{room.size.clone()}</dd>
                    <dt>{bundle.text("room.detail.beds")}</dt>
                    <dd>{room.beds.clone()}</dd>
                </dl>
            </div>
        },
        DetailTab::Amenities => html! {
            <ul class="tab-panel amenity-grid">
                {for room.amenities.iter().map(|amenity| html! {
                    <li>
                        <span class="amenity-icon" aria-hidden="true">{AmenityIcon::for_label(amenity).glyph()}</span>
                        {amenity.clone()}
                    </li>
                })}
            </ul>
        },
        DetailTab::Features if room.features.is_empty() => html! {
            <p class="tab-panel muted">{bundle.text("room.detail.no_features")}</p>
        },
        DetailTab::Features => html! {
            <ul class="tab-panel feature-list">
                {for room.features.iter().map(|feature| html! { <li>{feature.clone()}</li> })}
            </ul>
        },
    };

    html! {
        <article class="room-detail-body">
            <ImageCarousel
                images={room.images.clone()}
                alt={AttrValue::from(room.name.clone())}
                prev_label={AttrValue::from(bundle.text("common.prev"))}
                next_label={AttrValue::from(bundle.text("common.next"))}
            />
            <header class="room-detail-header">
                <h1>{room.name.clone()}</h1>
                <p class="room-price">
                    {bundle.format("rooms.card.price", &[("price", &format_price(room.price))])}
                </p>
            </header>
            <div class="tabs" role="tablist">{for tabs}</div>
            {panel}
            <section class="stay-times">
                <div class="time-card">
                    <span>{bundle.text("room.detail.check_in")}</span>
                    <strong dir="ltr">{CHECK_IN_TIME}</strong>
                </div>
                <div class="time-card">
                    <span>{bundle.text("room.detail.check_out")}</span>
                    <strong dir="ltr">{CHECK_OUT_TIME}</strong>
                </div>
                <ul class="house-notes">
                    {for HOUSE_NOTE_KEYS.iter().map(|key| html! { <li>{bundle.text(key)}</li> })}
                </ul>
            </section>
            <section class="room-booking">
                <h2>{bundle.text("room.detail.book_title")}</h2>
                <BookingForm nightly_price={Some(room.price)} />
            </section>
        </article>
    }
}
