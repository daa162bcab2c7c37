//! Подсветка пункта меню, чья секция сейчас на экране
//!
//! При быстрой прокрутке в одной пачке может прийти несколько пересечений;
//! побеждает последнее обработанное. Если ни одна секция не пересекла порог,
//! прежняя подсветка остаётся.

mod binding;

pub use binding::bind_nav_highlight;

use super::anchor_scroll::section_id;
use super::visibility::VisibilityEntry;

/// Пара "ссылка меню → секция страницы"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    /// Значение `href`, например "#catalog"
    pub href: String,
    pub section_id: String,
}

impl NavTarget {
    /// Цель из якорной ссылки; `None`, если ссылка не ведёт на секцию страницы
    pub fn from_href(href: &str) -> Option<Self> {
        let id = section_id(href)?;
        Some(Self {
            href: href.to_string(),
            section_id: id.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    threshold: f64,
    targets: Vec<NavTarget>,
    active: Option<usize>,
}

impl ActiveSectionTracker {
    pub fn new(threshold: f64, targets: Vec<NavTarget>) -> Self {
        Self {
            threshold,
            targets,
            active: None,
        }
    }

    pub fn targets(&self) -> &[NavTarget] {
        &self.targets
    }

    /// Обработать пачку уведомлений с id секций в качестве ключей.
    ///
    /// Возвращает `true`, если активная ссылка сменилась.
    pub fn on_visibility<K: AsRef<str>>(&mut self, entries: &[VisibilityEntry<K>]) -> bool {
        let before = self.active;
        for entry in entries {
            if !entry.reaches(self.threshold) {
                continue;
            }
            if let Some(idx) = self
                .targets
                .iter()
                .position(|t| t.section_id == entry.key.as_ref())
            {
                self.active = Some(idx);
            }
        }
        self.active != before
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active
            .map(|idx| self.targets[idx].section_id.as_str())
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active
            .map(|idx| self.targets[idx].href == href)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveSectionTracker {
        let targets = ["#hero", "#cases", "#catalog", "#contacts"]
            .iter()
            .filter_map(|href| NavTarget::from_href(href))
            .collect();
        ActiveSectionTracker::new(0.4, targets)
    }

    fn seen(id: &'static str, ratio: f64) -> VisibilityEntry<&'static str> {
        VisibilityEntry::new(id, ratio > 0.0, ratio)
    }

    fn active_links(tracker: &ActiveSectionTracker) -> Vec<&str> {
        tracker
            .targets()
            .iter()
            .filter(|t| tracker.is_active(&t.href))
            .map(|t| t.href.as_str())
            .collect()
    }

    #[test]
    fn test_from_href() {
        let target = NavTarget::from_href("#faq").unwrap();
        assert_eq!(target.section_id, "faq");
        assert!(NavTarget::from_href("#").is_none());
        assert!(NavTarget::from_href("tel:+79687377555").is_none());
    }

    #[test]
    fn test_single_active_after_intersection() {
        let mut tracker = tracker();
        assert!(active_links(&tracker).is_empty());

        assert!(tracker.on_visibility(&[seen("cases", 0.5)]));
        assert_eq!(active_links(&tracker), vec!["#cases"]);

        assert!(tracker.on_visibility(&[seen("catalog", 0.45)]));
        assert_eq!(active_links(&tracker), vec!["#catalog"]);
        assert_eq!(tracker.active_section(), Some("catalog"));
    }

    #[test]
    fn test_last_entry_in_batch_wins() {
        let mut tracker = tracker();
        tracker.on_visibility(&[seen("hero", 0.6), seen("cases", 0.41)]);
        assert_eq!(active_links(&tracker), vec!["#cases"]);
    }

    #[test]
    fn test_below_threshold_keeps_previous() {
        let mut tracker = tracker();
        tracker.on_visibility(&[seen("hero", 0.9)]);

        assert!(!tracker.on_visibility(&[seen("hero", 0.0), seen("cases", 0.2)]));
        assert_eq!(active_links(&tracker), vec!["#hero"]);
    }

    #[test]
    fn test_tall_section_highlighted_by_viewport_coverage() {
        let mut tracker = tracker();
        tracker.on_visibility(&[seen("cases", 0.8)]);

        // Каталог выше 2.5 экранов: видимая доля всегда ниже 0.4
        assert!(!tracker.on_visibility(&[seen("catalog", 0.1).with_coverage(0.3)]));
        assert_eq!(active_links(&tracker), vec!["#cases"]);

        assert!(tracker.on_visibility(&[seen("catalog", 0.1).with_coverage(1.0)]));
        assert_eq!(active_links(&tracker), vec!["#catalog"]);
    }

    #[test]
    fn test_unknown_section_ignored() {
        let mut tracker = tracker();
        assert!(!tracker.on_visibility(&[seen("materials", 1.0)]));
        assert_eq!(tracker.active_section(), None);
    }
}
