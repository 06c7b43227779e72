//! About page: story, vision, reasons to stay and house statistics.

use yew::prelude::*;

use crate::components::use_bundle;
use crate::features::PageHero;
use crate::i18n::LocaleCode;

const WHY_KEYS: [&str; 6] = [
    "about.why.items.culture",
    "about.why.items.location",
    "about.why.items.inclusive",
    "about.why.items.multilingual",
    "about.why.items.wifi",
    "about.why.items.secure",
];

/// The reason card that lists spoken languages.
const MULTILINGUAL_KEY: &str = "about.why.items.multilingual";

/// Staff languages beyond the three site locales, in their own script.
const OTHER_LANGUAGES: [&str; 7] = [
    "नेपाली",
    "हिन्दी",
    "日本語",
    "한국어",
    "Deutsch",
    "Français",
    "Español",
];

/// Stat value and label key.
const STATS: [(&str, &str); 4] = [
    ("15+", "about.stats.years"),
    ("500+", "about.stats.guests"),
    ("24/7", "about.stats.support"),
    ("4.8", "about.stats.rating"),
];

#[function_component(AboutPage)]
pub(crate) fn about_page() -> Html {
    let bundle = use_bundle();
    let more_languages = use_state(|| false);
    let toggle = {
        let more_languages = more_languages.clone();
        Callback::from(move |_: MouseEvent| more_languages.set(!*more_languages))
    };

    let languages = html! {
        <div class="language-badges">
            {for LocaleCode::all().into_iter().map(|code| html! {
                <span class="badge" lang={code.code()}>{code.label()}</span>
            })}
            {if *more_languages {
                OTHER_LANGUAGES.iter().map(|name| html! { <span class="badge">{*name}</span> }).collect::<Html>()
            } else {
                html! {}
            }}
            <button type="button" class="text-link" aria-expanded={more_languages.to_string()} onclick={toggle}>
                {bundle.text(if *more_languages { "about.why.fewer_languages" } else { "about.why.more_languages" })}
            </button>
        </div>
    };

    html! {
        <>
            <PageHero title={bundle.text("about.hero.title")} subtitle={AttrValue::from(bundle.text("about.hero.subtitle"))} />
            <section class="section split">
                <div>
                    <h2>{bundle.text("about.story.title")}</h2>
                    <p>{bundle.text("about.story.body")}</p>
                </div>
                <div>
                    <h2>{bundle.text("about.vision.title")}</h2>
                    <p>{bundle.text("about.vision.body")}</p>
                </div>
            </section>
            <section class="section">
                <h2>{bundle.text("about.why.title")}</h2>
                <p class="muted">{bundle.text("about.why.subtitle")}</p>
                <div class="card-grid">
                    {for WHY_KEYS.iter().map(|key| html! {
                        <article class="info-card">
                            <h3>{bundle.text(&format!("{key}.title"))}</h3>
                            <p>{bundle.text(&format!("{key}.body"))}</p>
                            {if *key == MULTILINGUAL_KEY { languages.clone() } else { html! {} }}
                        </article>
                    })}
                </div>
            </section>
            <section class="section stats" aria-label={bundle.text("about.stats.label")}>
                {for STATS.iter().map(|(value, key)| html! {
                    <div class="stat">
                        <strong dir="ltr">{*value}</strong>
                        <span>{bundle.text(key)}</span>
                    </div>
                })}
            </section>
        </>
    }
}
