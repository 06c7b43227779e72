//! Image carousel for room photos.

use yew::prelude::*;

use crate::core::carousel::CarouselCursor;

#[derive(Properties, PartialEq)]
pub(crate) struct ImageCarouselProps {
    pub images: Vec<String>,
    pub alt: AttrValue,
    pub prev_label: AttrValue,
    pub next_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageCarousel)]
pub(crate) fn image_carousel(props: &ImageCarouselProps) -> Html {
    let len = props.images.len();
    let cursor = use_state(|| CarouselCursor::new(len));
    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |len| {
                cursor.set(CarouselCursor::new(*len));
                || ()
            },
            len,
        );
    }
    // The reset effect runs after the first render with a new list.
    let current = if cursor.len() == len {
        *cursor
    } else {
        CarouselCursor::new(len)
    };

    let Some(src) = props.images.get(current.index()) else {
        return html! { <div class={classes!("carousel", "carousel-empty", props.class.clone())} /> };
    };

    let step = |next: CarouselCursor| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(next))
    };

    html! {
        <div class={classes!("carousel", props.class.clone())}>
            <img class="carousel-image" src={src.clone()} alt={props.alt.clone()} />
            {if current.shows_controls() {
                html! {
                    <>
                        <button type="button" class="carousel-prev" aria-label={props.prev_label.clone()} onclick={step(current.prev())}>
                            {"‹"}
                        </button>
                        <button type="button" class="carousel-next" aria-label={props.next_label.clone()} onclick={step(current.next())}>
                            {"›"}
                        </button>
                        <div class="carousel-dots">
                            {for (0..current.len()).map(|index| html! {
                                <button
                                    type="button"
                                    class={classes!("carousel-dot", (index == current.index()).then_some("active"))}
                                    aria-label={(index + 1).to_string()}
                                    onclick={step(current.go_to(index))}
                                />
                            })}
                        </div>
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
