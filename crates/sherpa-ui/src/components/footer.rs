use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::Link;

use crate::components::{route_to, use_bundle};
use crate::core::shell::nav_items;

pub(crate) const CONTACT_ADDRESS_KEY: &str = "contact.address";
pub(crate) const CONTACT_PHONE: &str = "+977 9851068219";
pub(crate) const CONTACT_EMAIL: &str = "mingmasaino@gmail.com";

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let bundle = use_bundle();
    let year = js_sys::Date::new_0().get_full_year().to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <section>
                    <h3>{bundle.text("brand.name")}</h3>
                    <p class="muted">{bundle.text("footer.blurb")}</p>
                </section>
                <section>
                    <h4>{bundle.text("footer.quick_links")}</h4>
                    <ul>
                        {for nav_items().into_iter().map(|item| html! {
                            <li>
                                <Link<AnyRoute> to={route_to(bundle.locale, &item.page)}>
                                    {bundle.text(item.label_key)}
                                </Link<AnyRoute>>
                            </li>
                        })}
                    </ul>
                </section>
                <section>
                    <h4>{bundle.text("footer.contact")}</h4>
                    <address>
                        <p>{bundle.text(CONTACT_ADDRESS_KEY)}</p>
                        <p><a href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))} dir="ltr">{CONTACT_PHONE}</a></p>
                        <p><a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a></p>
                    </address>
                </section>
            </div>
            <p class="footer-copy">
                {bundle.format("footer.copyright", &[("year", &year)])}
            </p>
        </footer>
    }
}
