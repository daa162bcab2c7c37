use super::collections::CollectionsSection;
use super::contacts::ContactsSection;
use super::hero::HeroSection;
use super::sections::{
    CasesSection, FaqSection, MarqueeSection, ProcessSection, ServicesSection,
    TestimonialsSection, WhySection,
};
use super::works::WorksSection;
use crate::domain::a001_door::ui::catalog::CatalogSection;
use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::shared::config::use_site_config;
use crate::shared::nav_highlight::bind_nav_highlight;
use crate::shared::scroll_reveal::bind_scroll_reveal;
use crate::shared::visibility::VisibilityObserver;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext context not found");
    let scroll = use_site_config().scroll;

    // Наблюдатели живут, пока смонтирована страница; drop отключает их
    let observers = StoredValue::new_local(Vec::<VisibilityObserver>::new());

    // Эффект срабатывает после монтирования, секции уже в DOM
    Effect::new(move |_| {
        match bind_scroll_reveal(&scroll.reveal_selector, scroll.reveal_threshold) {
            Ok(Some(observer)) => observers.update_value(|o| o.push(observer)),
            Ok(None) => log::debug!("Scroll reveal: nothing to observe"),
            Err(e) => log::debug!("Scroll reveal disabled: {}", e),
        }

        match bind_nav_highlight(ctx.nav_highlight, scroll.nav_threshold) {
            Ok(Some(observer)) => observers.update_value(|o| o.push(observer)),
            Ok(None) => log::debug!("Nav highlight: no sections on the page"),
            Err(e) => log::debug!("Nav highlight disabled: {}", e),
        }
    });

    view! {
        <Shell>
            <HeroSection />
            <MarqueeSection />
            <CasesSection />
            <ServicesSection />
            <CollectionsSection />
            <WhySection />
            <WorksSection />
            <CatalogSection />
            <ProcessSection />
            <TestimonialsSection />
            <FaqSection />
            <ContactsSection />
        </Shell>
    }
}
