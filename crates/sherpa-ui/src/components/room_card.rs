use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::Link;

use crate::components::{route_to, use_bundle};
use crate::core::room_view::{CardSummary, format_price};
use crate::core::routing::Page;

#[derive(Properties, PartialEq)]
pub(crate) struct RoomCardProps {
    pub summary: CardSummary,
}

#[function_component(RoomCard)]
pub(crate) fn room_card(props: &RoomCardProps) -> Html {
    let bundle = use_bundle();
    let card = &props.summary;
    let guests = card.guests.to_string();
    let target = route_to(
        bundle.locale,
        &Page::RoomDetail {
            id: card.id.clone(),
        },
    );

    html! {
        <article class="room-card">
            <div class="room-card-media">
                {if card.image.is_empty() {
                    html! { <div class="room-card-placeholder" /> }
                } else {
                    html! { <img src={card.image.clone()} alt={card.name.clone()} loading="lazy" /> }
                }}
                {card.badge.clone().map(|badge| html! {
                    <span class="room-card-badge">{badge}</span>
                }).unwrap_or_default()}
            </div>
            <div class="room-card-body">
                <h3>{card.name.clone()}</h3>
                <ul class="room-facts">
                    <li>{bundle.format("rooms.card.guests", &[("count", &guests)])}</li>
                    {(!card.size.is_empty()).then(|| html! { <li>{card.size.clone()}</li> }).unwrap_or_default()}
                    {(!card.beds.is_empty()).then(|| html! { <li>{card.beds.clone()}</li> }).unwrap_or_default()}
                </ul>
                <p class="room-excerpt">{card.excerpt.clone()}</p>
                <ul class="room-amenities">
                    {for card.amenities.iter().map(|amenity| html! { <li>{amenity.clone()}</li> })}
                    {if card.more_amenities > 0 {
                        let more = card.more_amenities.to_string();
                        html! { <li class="more">{bundle.format("rooms.card.more", &[("count", &more)])}</li> }
                    } else {
                        html! {}
                    }}
                </ul>
                <div class="room-card-footer">
                    <span class="room-price">
                        {bundle.format("rooms.card.price", &[("price", &format_price(card.price))])}
                    </span>
                    <div class="room-card-actions">
                        <Link<AnyRoute> to={target} classes="btn btn-outline">
                            {bundle.text("rooms.card.details")}
                        </Link<AnyRoute>>
                        <button type="button" class="btn btn-primary">{bundle.text("rooms.card.book")}</button>
                    </div>
                </div>
            </div>
        </article>
    }
}
