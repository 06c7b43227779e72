use yew::prelude::*;

use crate::components::footer::{CONTACT_ADDRESS_KEY, CONTACT_EMAIL, CONTACT_PHONE};
use crate::components::use_bundle;
use crate::features::PageHero;

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let bundle = use_bundle();
    html! {
        <>
            <PageHero title={bundle.text("contact.title")} subtitle={AttrValue::from(bundle.text("contact.subtitle"))} />
            <section class="section">
                <dl class="contact-list">
                    <dt>{bundle.text("contact.address_label")}</dt>
                    <dd>{bundle.text(CONTACT_ADDRESS_KEY)}</dd>
                    <dt>{bundle.text("contact.phone_label")}</dt>
                    <dd><a href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))} dir="ltr">{CONTACT_PHONE}</a></dd>
                    <dt>{bundle.text("contact.email_label")}</dt>
                    <dd><a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a></dd>
                    <dt>{bundle.text("contact.hours_label")}</dt>
                    <dd>{bundle.text("contact.hours")}</dd>
                </dl>
            </section>
        </>
    }
}
