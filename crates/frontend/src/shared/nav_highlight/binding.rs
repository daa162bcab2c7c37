use super::ActiveSectionTracker;
use crate::shared::dom;
use crate::shared::error::SiteError;
use crate::shared::visibility::{VisibilityEntry, VisibilityObserver};
use leptos::prelude::*;

/// Наблюдать за секциями из `tracker` и обновлять подсветку меню.
///
/// Секции, которых нет в разметке, молча пропускаются.
pub fn bind_nav_highlight(
    tracker: RwSignal<ActiveSectionTracker>,
    threshold: f64,
) -> Result<Option<VisibilityObserver>, SiteError> {
    let sections: Vec<_> = tracker.with_untracked(|t| {
        t.targets()
            .iter()
            .filter_map(|target| dom::element_by_id(&target.section_id).ok())
            .collect()
    });
    if sections.is_empty() {
        return Ok(None);
    }

    let observer = VisibilityObserver::new(threshold, move |entries, _| {
        let batch: Vec<VisibilityEntry<String>> = entries
            .iter()
            .map(|entry| VisibilityEntry::from_entry(entry.target().id(), entry))
            .collect();

        let mut changed = false;
        tracker.maybe_update(|t| {
            changed = t.on_visibility(&batch);
            changed
        });
        if changed {
            log::debug!(
                "Active section: {:?}",
                tracker.with_untracked(|t| t.active_section().map(str::to_string))
            );
        }
    })?;

    for section in &sections {
        observer.observe(section);
    }

    Ok(Some(observer))
}
