use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::Link;

use crate::components::{route_to, use_bundle};
use crate::core::gallery::{GALLERY_ITEMS, MediaKind};
use crate::core::routing::Page;
use crate::features::services::SERVICE_KEYS;

const FACILITY_KEYS: [&str; 5] = [
    "home.facilities.items.clean",
    "home.facilities.items.wifi",
    "home.facilities.items.tv",
    "home.facilities.items.room_service",
    "home.facilities.items.storage",
];

/// Services previewed on the landing page.
const TEASER_COUNT: usize = 3;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_bundle();
    let locale = bundle.locale;
    let hero_video = GALLERY_ITEMS
        .iter()
        .find(|item| item.kind == MediaKind::Video)
        .map(|item| item.src);

    html! {
        <>
            <section class="home-hero">
                {hero_video.map(|src| html! {
                    <video class="hero-media" src={src} autoplay=true muted=true loop=true playsinline=true />
                }).unwrap_or_default()}
                <div class="hero-copy">
                    <h1>{bundle.text("home.hero.title")}</h1>
                    <p>{bundle.text("home.hero.subtitle")}</p>
                    <Link<AnyRoute> to={route_to(locale, &Page::BookNow)} classes="btn btn-primary">
                        {bundle.text("home.hero.cta")}
                    </Link<AnyRoute>>
                </div>
            </section>
            <section class="section home-intro">
                <h2>{bundle.text("home.intro.title")}</h2>
                <p>{bundle.text("home.intro.body")}</p>
                <Link<AnyRoute> to={route_to(locale, &Page::Rooms)} classes="btn btn-outline">
                    {bundle.text("home.intro.cta")}
                </Link<AnyRoute>>
            </section>
            <section class="section">
                <h2>{bundle.text("home.services.title")}</h2>
                <div class="card-grid">
                    {for SERVICE_KEYS.iter().take(TEASER_COUNT).map(|key| html! {
                        <article class="info-card">
                            <h3>{bundle.text(&format!("{key}.title"))}</h3>
                            <p>{bundle.text(&format!("{key}.body"))}</p>
                        </article>
                    })}
                </div>
                <Link<AnyRoute> to={route_to(locale, &Page::Services)} classes="text-link">
                    {bundle.text("home.services.more")}
                </Link<AnyRoute>>
            </section>
            <section class="section facilities">
                <h2>{bundle.text("home.facilities.title")}</h2>
                <ul class="facility-list">
                    {for FACILITY_KEYS.iter().map(|key| html! {
                        <li>
                            <strong>{bundle.text(&format!("{key}.title"))}</strong>
                            <span>{bundle.text(&format!("{key}.body"))}</span>
                        </li>
                    })}
                </ul>
            </section>
            <section class="section location">
                <h2>{bundle.text("home.location.title")}</h2>
                <p>{bundle.text("home.location.body")}</p>
                <p class="muted">{bundle.text("contact.address")}</p>
            </section>
        </>
    }
}
