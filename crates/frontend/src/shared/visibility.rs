//! Уведомления о видимости элементов (IntersectionObserver)

use super::error::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Погрешность, с которой браузер сообщает долю видимости на пороге
const RATIO_TOLERANCE: f64 = 1e-3;

/// Шаг порогов наблюдателя: уведомления приходят по мере прокрутки
/// даже для секций, которые никогда не видны целиком
const THRESHOLD_STEPS: u32 = 100;

/// Одно уведомление о видимости элемента с ключом `K`
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub is_intersecting: bool,
    /// Доля площади элемента в области просмотра, 0.0..=1.0
    pub ratio: f64,
    /// Доля высоты области просмотра, занятая видимой частью элемента
    pub coverage: f64,
}

impl<K> VisibilityEntry<K> {
    pub fn new(key: K, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            key,
            is_intersecting,
            ratio,
            coverage: 0.0,
        }
    }

    pub fn with_coverage(mut self, coverage: f64) -> Self {
        self.coverage = coverage;
        self
    }

    /// Уведомление браузера с ключом `key`
    pub fn from_entry(key: K, entry: &IntersectionObserverEntry) -> Self {
        Self::new(key, entry.is_intersecting(), entry.intersection_ratio())
            .with_coverage(viewport_coverage(entry))
    }

    /// Элемент виден не меньше чем на `threshold` своей площади или
    /// закрывает не меньше `threshold` высоты области просмотра.
    ///
    /// Второе условие нужно секциям выше `1 / threshold` экранов: их доля
    /// видимости никогда не достигает порога.
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting
            && (self.ratio + RATIO_TOLERANCE >= threshold
                || self.coverage + RATIO_TOLERANCE >= threshold)
    }
}

/// Высота видимой части элемента относительно высоты области просмотра
pub fn viewport_coverage(entry: &IntersectionObserverEntry) -> f64 {
    let visible = entry.intersection_rect().height();
    match entry.root_bounds().map(|root| root.height()) {
        Some(root_height) if root_height > 0.0 => (visible / root_height).min(1.0),
        _ => 0.0,
    }
}

/// Пороги наблюдателя: равномерная сетка 0..=1 плюс сам `threshold`
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = threshold.clamp(0.0, 1.0);
    let mut steps: Vec<f64> = (0..=THRESHOLD_STEPS)
        .map(|i| f64::from(i) / f64::from(THRESHOLD_STEPS))
        .collect();
    if !steps.iter().any(|s| (s - threshold).abs() < RATIO_TOLERANCE) {
        steps.push(threshold);
        steps.sort_by(f64::total_cmp);
    }
    steps
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// IntersectionObserver вместе с замыканием обратного вызова.
///
/// При удалении наблюдатель отключается.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, mut on_entries: F) -> Result<Self, SiteError>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                on_entries(entries, &observer);
            },
        );

        let thresholds: js_sys::Array = observer_thresholds(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_threshold() {
        assert!(VisibilityEntry::new("a", true, 0.2).reaches(0.2));
        assert!(VisibilityEntry::new("a", true, 0.1999).reaches(0.2));
        assert!(!VisibilityEntry::new("a", true, 0.1).reaches(0.2));
        assert!(!VisibilityEntry::new("a", false, 1.0).reaches(0.2));
    }

    #[test]
    fn test_tall_element_reaches_by_coverage() {
        // Секция в 20 экранов: видимая доля не больше 0.05
        let entry = VisibilityEntry::new("catalog", true, 0.05);
        assert!(!entry.clone().with_coverage(0.1).reaches(0.2));
        assert!(entry.clone().with_coverage(0.2).reaches(0.2));
        assert!(entry.with_coverage(1.0).reaches(0.4));
        assert!(!VisibilityEntry::new("catalog", false, 0.0)
            .with_coverage(1.0)
            .reaches(0.2));
    }

    #[test]
    fn test_observer_thresholds() {
        let steps = observer_thresholds(0.2);
        assert_eq!(steps.len(), 101);
        assert_eq!(steps.first().copied(), Some(0.0));
        assert_eq!(steps.last().copied(), Some(1.0));

        let odd = observer_thresholds(0.333);
        assert_eq!(odd.len(), 102);
        assert!(odd.contains(&0.333));
        assert!(odd.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(observer_thresholds(5.0).len(), 101);
    }
}
