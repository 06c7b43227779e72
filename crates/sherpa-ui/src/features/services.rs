use yew::prelude::*;

use crate::components::use_bundle;
use crate::features::PageHero;

/// Service entries in display order; each has `.title` and `.body` keys.
pub(crate) const SERVICE_KEYS: [&str; 6] = [
    "services.items.airport",
    "services.items.tours",
    "services.items.dining",
    "services.items.laundry",
    "services.items.concierge",
    "services.items.wifi",
];

#[function_component(ServicesPage)]
pub(crate) fn services_page() -> Html {
    let bundle = use_bundle();
    html! {
        <>
            <PageHero title={bundle.text("services.title")} subtitle={AttrValue::from(bundle.text("services.subtitle"))} />
            <section class="section">
                <div class="card-grid">
                    {for SERVICE_KEYS.iter().map(|key| html! {
                        <article class="info-card">
                            <h3>{bundle.text(&format!("{key}.title"))}</h3>
                            <p>{bundle.text(&format!("{key}.body"))}</p>
                        </article>
                    })}
                </div>
            </section>
        </>
    }
}
