use crate::layout::global_context::SiteContext;
use crate::layout::header::NAV_LINKS;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Provide the SiteContext store to the whole app via context.
    let nav_hrefs: Vec<&str> = NAV_LINKS.iter().map(|&(href, _)| href).collect();
    let site = SiteContext::new(
        &nav_hrefs,
        config.scroll.nav_threshold,
        config.lightbox.fallback_caption.clone(),
    );
    site.init_scroll_lock_sync();

    provide_context(config);
    provide_context(site);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
