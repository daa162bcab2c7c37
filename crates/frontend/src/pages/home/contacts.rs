use crate::domain::a002_contact_inquiry::ui::form::ContactForm;
use crate::shared::config::use_site_config;
use leptos::prelude::*;

#[component]
pub fn ContactsSection() -> impl IntoView {
    let contacts = use_site_config().contacts;
    let email_href = contacts.email_href();

    view! {
        <section id="contacts" class="section contact reveal">
            <div class="container contact-grid">
                <div>
                    <p class="eyebrow">"Контакты"</p>
                    <h2>"Расскажите о задаче"</h2>
                    <p class="lead">"Пришлите план или фото проёмов — ответим в течение рабочего дня."</p>
                    <div class="contact-meta">
                        <div>
                            <strong>"Телефон"</strong>
                            <a href=contacts.phone_href>{contacts.phone}</a>
                        </div>
                        <div>
                            <strong>"Email"</strong>
                            <a href=email_href>{contacts.email}</a>
                        </div>
                        <div>
                            <strong>"Адрес"</strong>
                            <span>{contacts.address}</span>
                        </div>
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
