//! Состояние каталога: фильтры, сортировка и быстрый просмотр
//!
//! `derive()` это чистая функция от (каталог, категория, цена, сортировка),
//! её можно вызывать сколько угодно раз.

use super::aggregate::{Door, PriceRange};
use super::catalog_data;
use crate::enums::{CategoryFilter, SortKey};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CatalogStore {
    doors: Arc<[Door]>,
    category: CategoryFilter,
    price_range: PriceRange,
    sort: SortKey,
    preview: Option<u32>,
}

impl CatalogStore {
    pub fn new(doors: impl Into<Arc<[Door]>>) -> Self {
        Self {
            doors: doors.into(),
            category: CategoryFilter::default(),
            price_range: PriceRange::default(),
            sort: SortKey::default(),
            preview: None,
        }
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Диапазон не проверяется и не нормализуется: `min <= max` на совести вызывающего
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_range = PriceRange::new(min, max);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Сбросить категорию и цену; сортировка сохраняется
    pub fn reset_filters(&mut self) {
        self.category = CategoryFilter::default();
        self.price_range = PriceRange::default();
    }

    /// Отличается ли хоть один фильтр от значения по умолчанию
    pub fn is_filtered(&self) -> bool {
        self.category != CategoryFilter::All || !self.price_range.is_default()
    }

    /// Видимый список: категория → цена → устойчивая сортировка.
    ///
    /// Пустой результат возвращается как `Vec` нулевой длины.
    pub fn derive(&self) -> Vec<Door> {
        let mut visible: Vec<Door> = self
            .doors
            .iter()
            .filter(|door| self.category.accepts(door.category, door.thermo))
            .filter(|door| self.price_range.contains(door.price))
            .cloned()
            .collect();

        // sort_by устойчив, поэтому для Popular получается разбиение
        // "хиты / остальные" с сохранением исходного порядка внутри групп
        match self.sort {
            SortKey::PriceAsc => visible.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceDesc => visible.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Name => visible.sort_by(|a, b| compare_names(&a.name, &b.name)),
            SortKey::Popular => visible.sort_by_key(|door| !door.is_popular),
        }

        visible
    }

    /// Открыть быстрый просмотр. Неизвестный id игнорируется.
    pub fn request_preview(&mut self, door_id: u32) -> bool {
        if self.doors.iter().any(|door| door.id == door_id) {
            self.preview = Some(door_id);
            true
        } else {
            false
        }
    }

    /// Закрыть быстрый просмотр; повторный вызов ничего не делает
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<&Door> {
        let id = self.preview?;
        self.doors.iter().find(|door| door.id == id)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(catalog_data::all_doors())
    }
}

/// Сравнение названий без учёта регистра, с побайтовым сравнением при равенстве
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DoorCategory;

    fn ids(doors: &[Door]) -> Vec<u32> {
        doors.iter().map(|d| d.id).collect()
    }

    fn sample_ranges() -> Vec<PriceRange> {
        vec![
            PriceRange::default(),
            PriceRange::new(100_000, 150_000),
            PriceRange::new(0, 90_000),
            PriceRange::new(200_000, 300_000),
            PriceRange::new(134_900, 134_900),
        ]
    }

    #[test]
    fn test_derive_respects_category_and_price() {
        let mut store = CatalogStore::default();
        for filter in CategoryFilter::all() {
            for range in sample_ranges() {
                store.set_category(filter);
                store.set_price_range(range.min, range.max);
                for door in store.derive() {
                    let category_ok = match filter {
                        CategoryFilter::All => true,
                        CategoryFilter::Only(DoorCategory::Thermo) => door.is_thermo_eligible(),
                        CategoryFilter::Only(category) => door.category == category,
                    };
                    assert!(category_ok, "{} leaked into {:?}", door.name, filter);
                    assert!(range.min <= door.price && door.price <= range.max);
                }
            }
        }
    }

    #[test]
    fn test_popular_sort_is_stable_partition() {
        let store = CatalogStore::default();
        let visible = store.derive();
        assert_eq!(visible.len(), 18);

        let first_regular = visible.iter().position(|d| !d.is_popular).unwrap();
        assert!(visible[first_regular..].iter().all(|d| !d.is_popular));

        // Внутри групп сохраняется порядок каталога
        assert_eq!(ids(&visible[..first_regular]), vec![1, 4, 7, 10, 13, 16]);
        assert_eq!(
            ids(&visible[first_regular..]),
            vec![2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18]
        );
    }

    #[test]
    fn test_price_sorts_are_monotonic() {
        let mut store = CatalogStore::default();
        store.set_sort(SortKey::PriceAsc);
        let asc = store.derive();
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        store.set_sort(SortKey::PriceDesc);
        let desc = store.derive();
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(desc.first().map(|d| d.id), Some(17));
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let mut store = CatalogStore::default();
        store.set_sort(SortKey::PriceAsc);
        store.set_price_range(134_900, 134_900);
        // Dark Ash Premium и Silent Pro 45 стоят одинаково
        assert_eq!(ids(&store.derive()), vec![6, 14]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut doors: Vec<Door> = catalog_data::all_doors().iter().take(3).cloned().collect();
        doors[0].name = "beta".into();
        doors[1].name = "Alpha".into();
        doors[2].name = "alpha".into();

        let mut store = CatalogStore::new(doors);
        store.set_sort(SortKey::Name);
        let names: Vec<String> = store.derive().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_entrance_price_asc_scenario() {
        let mut store = CatalogStore::default();
        store.set_category(CategoryFilter::Only(DoorCategory::Entrance));
        store.set_sort(SortKey::PriceAsc);
        assert_eq!(ids(&store.derive()), vec![12, 10, 11]);
    }

    #[test]
    fn test_thermo_filter_includes_tagged_entrance_doors() {
        let mut store = CatalogStore::default();
        store.set_category(CategoryFilter::Only(DoorCategory::Thermo));
        store.set_sort(SortKey::PriceAsc);
        assert_eq!(ids(&store.derive()), vec![12, 18, 10, 16, 17]);
    }

    #[test]
    fn test_reset_filters_keeps_sort() {
        let mut store = CatalogStore::default();
        store.set_sort(SortKey::Name);
        store.set_category(CategoryFilter::Only(DoorCategory::Glass));
        store.set_price_range(100_000, 150_000);
        assert!(store.is_filtered());

        store.reset_filters();
        assert_eq!(store.category(), CategoryFilter::All);
        assert_eq!(store.price_range(), PriceRange::new(0, 300_000));
        assert_eq!(store.sort(), SortKey::Name);
        assert!(!store.is_filtered());
    }

    #[test]
    fn test_empty_result_is_empty_vec() {
        let mut store = CatalogStore::default();
        store.set_category(CategoryFilter::Only(DoorCategory::Glass));
        store.set_price_range(200_000, 300_000);
        assert!(store.derive().is_empty());

        let empty = CatalogStore::new(Vec::new());
        assert!(empty.derive().is_empty());
    }

    #[test]
    fn test_preview_select_and_clear() {
        let mut store = CatalogStore::default();
        assert!(store.preview().is_none());

        assert!(store.request_preview(7));
        assert_eq!(store.preview().map(|d| d.name.as_str()), Some("Glass Mono Bronze"));

        assert!(!store.request_preview(999));
        assert_eq!(store.preview().map(|d| d.id), Some(7));

        store.clear_preview();
        store.clear_preview();
        assert!(store.preview().is_none());
    }
}
