use crate::layout::global_context::SiteContext;
use crate::shared::anchor_scroll::{handle_anchor_click, AnchorLink};
use crate::shared::config::use_site_config;
use leptos::ev;
use leptos::prelude::*;

/// Пункты главного меню: (якорь секции, подпись)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#hero", "Главная"),
    ("#cases", "Кейсы"),
    ("#services", "Услуги"),
    ("#catalog", "Каталог"),
    ("#collections", "Линейки"),
    ("#works", "Работы"),
    ("#process", "Процесс"),
    ("#testimonials", "Отзывы"),
    ("#faq", "FAQ"),
    ("#contacts", "Контакты"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext context not found");
    let config = use_site_config();
    let delay_ms = config.scroll.anchor_delay_ms;
    let contacts = config.contacts;

    let is_open = move || ctx.nav_menu.with(|m| m.is_open());

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            ctx.close_menu();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="topbar">
            <div class="container">
                <div class="brand">
                    <div class="logo-circle">"A-1"</div>
                    <div>
                        <div class="brand-name">"StroimDom"</div>
                        <div class="brand-tag">"Doors · Bespoke · Service"</div>
                    </div>
                </div>

                <div class="nav-overlay" class:open=is_open on:click=move |_| ctx.close_menu()></div>
                <nav class="nav" id="nav" class:open=is_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class:active=move || ctx.nav_highlight.with(|t| t.is_active(href))
                                    on:click=move |ev: ev::MouseEvent| {
                                        handle_anchor_click(&ev, href, Some(ctx), delay_ms);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="topbar-actions">
                    <AnchorLink href="#contacts" class="ghost-btn">
                        "Консультация"
                    </AnchorLink>
                    <a class="primary-btn" href=contacts.phone_href>
                        {contacts.phone}
                    </a>
                    <button
                        class="burger"
                        class:active=is_open
                        aria-label="Открыть меню"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            ctx.toggle_menu();
                        }
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
