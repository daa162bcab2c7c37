use crate::layout::header::nav_menu::NavMenu;
use crate::shared::dom;
use crate::shared::lightbox::LightboxState;
use crate::shared::nav_highlight::{ActiveSectionTracker, NavTarget};
use leptos::prelude::*;

/// Состояние оболочки страницы, общее для шапки, секций и оверлеев
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub nav_menu: RwSignal<NavMenu>,
    pub lightbox: RwSignal<LightboxState>,
    pub nav_highlight: RwSignal<ActiveSectionTracker>,
    fallback_caption: StoredValue<String>,
}

impl SiteContext {
    pub fn new(nav_hrefs: &[&str], nav_threshold: f64, fallback_caption: String) -> Self {
        let targets = nav_hrefs
            .iter()
            .filter_map(|href| NavTarget::from_href(href))
            .collect();
        Self {
            nav_menu: RwSignal::new(NavMenu::default()),
            lightbox: RwSignal::new(LightboxState::default()),
            nav_highlight: RwSignal::new(ActiveSectionTracker::new(nav_threshold, targets)),
            fallback_caption: StoredValue::new(fallback_caption),
        }
    }

    /// Синхронизировать блокировку прокрутки body с состоянием меню.
    ///
    /// Применение идемпотентно: повторное снятие блокировки безвредно.
    pub fn init_scroll_lock_sync(&self) {
        let nav_menu = self.nav_menu;
        Effect::new(move |_| {
            let locked = nav_menu.with(|m| m.is_scroll_locked());
            if let Err(e) = dom::set_body_scroll_locked(locked) {
                log::debug!("Scroll lock not applied: {}", e);
            }
        });
    }

    pub fn toggle_menu(&self) {
        self.nav_menu.update(|m| m.toggle());
        log::debug!(
            "Nav menu {}",
            if self.nav_menu.with_untracked(|m| m.is_open()) {
                "opened"
            } else {
                "closed"
            }
        );
    }

    pub fn close_menu(&self) {
        self.nav_menu.maybe_update(|m| m.close());
    }

    pub fn open_lightbox(&self, src: &str, caption: Option<&str>) {
        let fallback = self.fallback_caption.get_value();
        self.lightbox.update(|l| l.open(src, caption, &fallback));
    }

    pub fn close_lightbox(&self) {
        self.lightbox.maybe_update(|l| l.close());
    }
}
