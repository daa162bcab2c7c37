pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use crate::shared::lightbox::Lightbox;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Оболочка одностраничного сайта.
///
/// ```text
/// +------------------------------------------+
/// |        Header (меню, бургер, CTA)         |
/// +------------------------------------------+
/// |              main: секции                 |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
///   плавающая кнопка "Позвонить", Lightbox
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let phone_href = use_site_config().contacts.phone_href;

    view! {
        <Header />
        <main>{children()}</main>
        <Footer />

        <a class="floating-cta" href=phone_href>
            {icon("phone")}
            " Позвонить"
        </a>
        <Lightbox />
    }
}
