use crate::shared::anchor_scroll::AnchorLink;
use crate::shared::config::use_site_config;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

const FOOTER_NAV: &[(&str, &str)] = &[
    ("#hero", "Главная"),
    ("#services", "Услуги"),
    ("#collections", "Линейки"),
    ("#works", "Работы"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let contacts = use_site_config().contacts;
    let email_href = contacts.email_href();
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <div class="brand">
                        <div class="logo-circle">"A-1"</div>
                        <div>
                            <div class="brand-name">"StroimDom"</div>
                            <div class="brand-tag">"Двери · Проекты · Сервис"</div>
                        </div>
                    </div>
                    <p>
                        "Создаём решения мирового уровня: дизайн, производство и установка дверей для жилых и коммерческих объектов."
                    </p>
                </div>
                <div class="footer-links">
                    <strong>"Навигация"</strong>
                    {FOOTER_NAV
                        .iter()
                        .map(|&(href, label)| view! { <AnchorLink href=href>{label}</AnchorLink> })
                        .collect_view()}
                </div>
                <div class="footer-links">
                    <strong>"Документы"</strong>
                    <a href="#">"Сертификаты"</a>
                    <a href="#">"Политика конфиденциальности"</a>
                    <a href="#">"Договор оферты"</a>
                </div>
                <div class="footer-links">
                    <strong>"Контакты"</strong>
                    <a href=contacts.phone_href>{contacts.phone}</a>
                    <a href=email_href>{contacts.email}</a>
                    <AnchorLink href="#faq">"FAQ"</AnchorLink>
                </div>
            </div>
            <div class="container footer-bottom">
                <span>{format!("© {} A-1 StroimDom. Все права защищены.", year)}</span>
                <span>"Сделано с заботой о деталях."</span>
            </div>
        </footer>
    }
}
