use super::RevealTracker;
use crate::shared::dom;
use crate::shared::error::SiteError;
use crate::shared::visibility::{VisibilityEntry, VisibilityObserver};

/// Подключить появление при прокрутке ко всем элементам по селектору.
///
/// Раскрытый элемент получает класс `visible` и снимается с наблюдения.
/// `Ok(None)`, если на странице нет подходящих элементов.
pub fn bind_scroll_reveal(
    selector: &str,
    threshold: f64,
) -> Result<Option<VisibilityObserver>, SiteError> {
    let elements = dom::query_all(selector)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let mut tracker = RevealTracker::new(threshold);
    for key in 0..elements.len() {
        tracker.observe(key);
    }

    let targets = elements.clone();
    let observer = VisibilityObserver::new(threshold, move |entries, observer| {
        let batch: Vec<VisibilityEntry<usize>> = entries
            .iter()
            .filter_map(|entry| {
                let target = entry.target();
                let key = targets.iter().position(|el| *el == target)?;
                Some(VisibilityEntry::from_entry(key, entry))
            })
            .collect();

        for key in tracker.on_visibility(&batch) {
            let element = &targets[key];
            dom::add_class(element, "visible");
            observer.unobserve(element);
        }
    })?;

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("Scroll reveal: observing {} elements", elements.len());

    Ok(Some(observer))
}
