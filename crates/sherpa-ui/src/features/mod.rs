//! Page-level views, one module per route.

pub(crate) mod about;
pub(crate) mod book_now;
pub(crate) mod contact;
pub(crate) mod gallery;
pub(crate) mod home;
pub(crate) mod rooms;
pub(crate) mod services;

use yew::prelude::*;

/// Title band shared by the secondary pages.
#[derive(Properties, PartialEq)]
pub(crate) struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(PageHero)]
pub(crate) fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <h1>{props.title.clone()}</h1>
            {props.subtitle.clone().map(|text| html! { <p>{text}</p> }).unwrap_or_default()}
        </section>
    }
}
