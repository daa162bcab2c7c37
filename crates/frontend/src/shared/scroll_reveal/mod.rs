//! Появление элементов при прокрутке
//!
//! Переход однонаправленный: раскрытый элемент больше не отслеживается и
//! остаётся видимым при любых последующих уведомлениях.

mod binding;

pub use binding::bind_scroll_reveal;

use super::visibility::VisibilityEntry;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    tracked: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            tracked: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Начать отслеживание; уже раскрытый элемент повторно не добавляется
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.tracked.insert(key)
    }

    /// Обработать пачку уведомлений, вернуть только что раскрытые ключи.
    ///
    /// Порядок раскрытия внутри пачки не гарантируется и не важен.
    pub fn on_visibility(&mut self, entries: &[VisibilityEntry<K>]) -> Vec<K> {
        let mut newly_revealed = Vec::new();
        for entry in entries {
            if !entry.reaches(self.threshold) {
                continue;
            }
            if self.tracked.remove(&entry.key) {
                self.revealed.insert(entry.key.clone());
                newly_revealed.push(entry.key.clone());
            }
        }
        newly_revealed
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn is_tracked(&self, key: &K) -> bool {
        self.tracked.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &'static str, ratio: f64) -> VisibilityEntry<&'static str> {
        VisibilityEntry::new(key, ratio > 0.0, ratio)
    }

    #[test]
    fn test_reveal_at_threshold() {
        let mut tracker = RevealTracker::new(0.2);
        tracker.observe("hero");
        tracker.observe("cases");

        assert!(tracker.on_visibility(&[entry("hero", 0.1)]).is_empty());
        assert!(!tracker.is_visible(&"hero"));

        assert_eq!(tracker.on_visibility(&[entry("hero", 0.25)]), vec!["hero"]);
        assert!(tracker.is_visible(&"hero"));
        assert!(!tracker.is_tracked(&"hero"));
        assert!(tracker.is_tracked(&"cases"));
    }

    #[test]
    fn test_revealed_stays_visible() {
        let mut tracker = RevealTracker::new(0.2);
        tracker.observe("card");
        tracker.on_visibility(&[entry("card", 1.0)]);

        for ratio in [0.0, 0.5, 0.0, 1.0] {
            assert!(tracker.on_visibility(&[entry("card", ratio)]).is_empty());
            assert!(tracker.is_visible(&"card"));
        }

        assert!(!tracker.observe("card"));
        assert!(!tracker.is_tracked(&"card"));
    }

    #[test]
    fn test_batch_reveals_independently() {
        let mut tracker = RevealTracker::new(0.2);
        for key in ["a", "b", "c"] {
            tracker.observe(key);
        }

        let mut revealed = tracker.on_visibility(&[entry("c", 0.3), entry("a", 0.05), entry("b", 0.9)]);
        revealed.sort();
        assert_eq!(revealed, vec!["b", "c"]);
        assert!(tracker.is_tracked(&"a"));
    }

    #[test]
    fn test_tall_section_revealed_by_viewport_coverage() {
        let mut tracker = RevealTracker::new(0.2);
        tracker.observe("catalog");

        // Доля видимости секции в 15 экранов не превышает 0.1
        for (ratio, coverage) in [(0.01, 0.15), (0.05, 0.19)] {
            let seen = entry("catalog", ratio).with_coverage(coverage);
            assert!(tracker.on_visibility(&[seen]).is_empty());
        }
        assert!(!tracker.is_visible(&"catalog"));

        let seen = entry("catalog", 0.1).with_coverage(1.0);
        assert_eq!(tracker.on_visibility(&[seen]), vec!["catalog"]);
        assert!(tracker.is_visible(&"catalog"));

        let later = entry("catalog", 0.05).with_coverage(0.6);
        assert!(tracker.on_visibility(&[later]).is_empty());
    }

    #[test]
    fn test_untracked_entries_ignored() {
        let mut tracker = RevealTracker::new(0.2);
        assert!(tracker.on_visibility(&[entry("ghost", 1.0)]).is_empty());
        assert!(!tracker.is_visible(&"ghost"));
    }
}
