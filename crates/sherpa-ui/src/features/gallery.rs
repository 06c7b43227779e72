//! Gallery grid with a lightbox.

use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::use_bundle;
use crate::core::carousel::CarouselCursor;
use crate::core::gallery::{GALLERY_ITEMS, GalleryItem, MediaKind};
use crate::core::shell::ScrollHolder;
use crate::features::PageHero;

#[function_component(GalleryPage)]
pub(crate) fn gallery_page() -> Html {
    let bundle = use_bundle();
    let cursor = use_state(|| None::<CarouselCursor>);
    let open_at = |index: usize| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            cursor.set(Some(CarouselCursor::at(GALLERY_ITEMS.len(), index)));
        })
    };
    let step = |next: Option<CarouselCursor>| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(next))
    };
    let close = {
        let cursor = cursor.clone();
        Callback::from(move |()| cursor.set(None))
    };
    let alt = bundle.text("gallery.image_alt");

    let lightbox = (*cursor)
        .and_then(|current| GALLERY_ITEMS.get(current.index()).map(|item| (current, item)))
        .map(|(current, item)| {
            html! {
                <div class="lightbox">
                    {media(item, &alt, true)}
                    {if current.shows_controls() {
                        html! {
                            <div class="lightbox-controls">
                                <button type="button" aria-label={bundle.text("common.prev")} onclick={step(Some(current.prev()))}>{"‹"}</button>
                                <span dir="ltr">{format!("{} / {}", current.index() + 1, current.len())}</span>
                                <button type="button" aria-label={bundle.text("common.next")} onclick={step(Some(current.next()))}>{"›"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            }
        })
        .unwrap_or_default();

    html! {
        <>
            <PageHero title={bundle.text("gallery.title")} subtitle={AttrValue::from(bundle.text("gallery.subtitle"))} />
            <section class="section gallery-grid">
                {for GALLERY_ITEMS.iter().enumerate().map(|(index, item)| html! {
                    <button type="button" class="gallery-tile" aria-label={bundle.text("gallery.open")} onclick={open_at(index)}>
                        {media(item, &alt, false)}
                    </button>
                })}
            </section>
            <Modal
                open={cursor.is_some()}
                holder={ScrollHolder::GalleryLightbox}
                on_close={close}
                close_label={AttrValue::from(bundle.text("common.close"))}
                class={classes!("lightbox-panel")}
            >
                {lightbox}
            </Modal>
        </>
    }
}

fn media(item: &GalleryItem, alt: &str, full: bool) -> Html {
    match item.kind {
        MediaKind::Image => html! {
            <img src={item.src} alt={alt.to_string()} loading={if full { "eager" } else { "lazy" }} />
        },
        MediaKind::Video => html! {
            <video src={item.src} muted=true loop=true playsinline=true autoplay=true controls={full} />
        },
    }
}
