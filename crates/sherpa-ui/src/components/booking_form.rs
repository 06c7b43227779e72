//! Booking inquiry form.
//!
//! # Design
//! - Validation lives in [`BookingInquiry`]; the form only renders issues.
//! - A valid submission shows an acknowledgement and is never sent anywhere.

use std::rc::Rc;

use sherpa_api_models::Room;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::use_bundle;
use crate::core::booking::{BookingInquiry, GuestField, InquiryIssue};
use crate::core::room_view::format_price;

#[derive(Properties, PartialEq)]
pub(crate) struct BookingFormProps {
    /// Nightly price of a fixed room.
    #[prop_or_default]
    pub nightly_price: Option<f64>,
    /// Rooms offered for selection when no room is fixed.
    #[prop_or_default]
    pub rooms: Option<Rc<Vec<Room>>>,
}

#[function_component(BookingForm)]
pub(crate) fn booking_form(props: &BookingFormProps) -> Html {
    let bundle = use_bundle();
    let inquiry = use_state(BookingInquiry::default);
    let issues = use_state(Vec::<InquiryIssue>::new);
    let submitted = use_state(|| false);
    let selected = use_state(|| 0_usize);

    let selected_room = props.rooms.as_ref().and_then(|rooms| rooms.get(*selected));
    let price = props
        .nightly_price
        .or_else(|| selected_room.map(|room| room.price));

    let edit_date = |check_out: bool| {
        let inquiry = inquiry.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*inquiry).clone();
                if check_out {
                    next.check_out = input.value();
                } else {
                    next.check_in = input.value();
                }
                inquiry.set(next);
                submitted.set(false);
            }
        })
    };
    let edit_count = |field: GuestField| {
        let inquiry = inquiry.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*inquiry).clone();
                next.set_count_from_input(field, &input.value());
                inquiry.set(next);
                submitted.set(false);
            }
        })
    };
    let on_room = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(index) = select.value().parse::<usize>() {
                    selected.set(index);
                }
            }
        })
    };
    let on_submit = {
        let inquiry = inquiry.clone();
        let issues = issues.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = inquiry.validate();
            submitted.set(found.is_empty());
            issues.set(found);
        })
    };

    let room_select = props.rooms.as_ref().map_or_else(Html::default, |rooms| {
        if rooms.is_empty() {
            return html! { <p class="muted">{bundle.text("booking.no_rooms")}</p> };
        }
        html! {
            <label class="field">
                <span>{bundle.text("booking.room")}</span>
                <select onchange={on_room}>
                    {for rooms.iter().enumerate().map(|(index, room)| html! {
                        <option value={index.to_string()} selected={index == *selected}>
                            {room.name.clone()}
                        </option>
                    })}
                </select>
            </label>
        }
    });

    let nights = inquiry.nights().map(|nights| nights.to_string());

    html! {
        <form class="booking-form" onsubmit={on_submit} novalidate=true>
            {room_select}
            <div class="field-row">
                <label class="field">
                    <span>{bundle.text("booking.check_in")}</span>
                    <input type="date" value={inquiry.check_in.clone()} oninput={edit_date(false)} />
                </label>
                <label class="field">
                    <span>{bundle.text("booking.check_out")}</span>
                    <input type="date" value={inquiry.check_out.clone()} oninput={edit_date(true)} />
                </label>
            </div>
            <div class="field-grid">
                {for GuestField::all().into_iter().map(|field| html! {
                    <label class="field">
                        <span>{bundle.text(field.label_key())}</span>
                        <input
                            type="number"
                            min={field.min().to_string()}
                            value={inquiry.count(field).to_string()}
                            oninput={edit_count(field)}
                        />
                    </label>
                })}
            </div>
            {nights.map(|nights| html! {
                <p class="muted">{bundle.format("booking.nights", &[("count", &nights)])}</p>
            }).unwrap_or_default()}
            {price.map(|price| html! {
                <p class="booking-total">
                    <span>{bundle.text("booking.total")}</span>
                    <strong>{bundle.format("rooms.card.price", &[("price", &format_price(inquiry.displayed_total(price)))])}</strong>
                </p>
            }).unwrap_or_default()}
            {if issues.is_empty() {
                html! {}
            } else {
                html! {
                    <ul class="form-issues" role="alert">
                        {for issues.iter().map(|issue| html! { <li>{bundle.text(issue.message_key())}</li> })}
                    </ul>
                }
            }}
            {if *submitted {
                html! { <p class="form-ack" role="status">{bundle.text("booking.acknowledged")}</p> }
            } else {
                html! {}
            }}
            <button type="submit" class="btn btn-primary">{bundle.text("booking.submit")}</button>
        </form>
    }
}
