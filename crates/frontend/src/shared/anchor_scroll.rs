//! Плавная прокрутка к секциям по якорным ссылкам

use super::config::use_site_config;
use super::dom;
use crate::layout::global_context::SiteContext;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Id секции из ссылки вида "#catalog"
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_section(id: String, delay_ms: u32) {
    spawn_local(async move {
        // Меню сначала закрывается, потом страница едет к секции
        TimeoutFuture::new(delay_ms).await;
        match dom::element_by_id(&id) {
            Ok(target) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Err(e) => log::debug!("Anchor scroll skipped: {}", e),
        }
    });
}

/// Обработать клик по якорной ссылке.
///
/// Если секция существует, отменяет переход браузера, закрывает меню и
/// прокручивает к ней. Возвращает `false`, если ссылка не ведёт на секцию.
pub fn handle_anchor_click(
    event: &ev::MouseEvent,
    href: &str,
    ctx: Option<SiteContext>,
    delay_ms: u32,
) -> bool {
    let Some(id) = section_id(href) else {
        return false;
    };
    if dom::element_by_id(id).is_err() {
        return false;
    }
    event.prevent_default();
    if let Some(ctx) = ctx {
        ctx.close_menu();
    }
    scroll_to_section(id.to_string(), delay_ms);
    true
}

/// Ссылка на секцию страницы
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Вызывается при каждом клике, даже если секции нет на странице
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<SiteContext>();
    let delay_ms = use_site_config().scroll.anchor_delay_ms;
    let target = href.clone();

    let on_click = move |event: ev::MouseEvent| {
        handle_anchor_click(&event, &target, ctx, delay_ms);
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id() {
        assert_eq!(section_id("#contacts"), Some("contacts"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("tel:+79687377555"), None);
        assert_eq!(section_id("/works/IMG_5856.jpeg"), None);
    }
}
