//! ViewModel каталога
//!
//! Поля сортировки и цены хранятся в отдельных RwSignal для двусторонней привязки
//! thaw; эффекты переносят их значения в `CatalogStore`. Видимый список
//! всегда пересчитывается из хранилища целиком.

use crate::shared::format::parse_price_input;
use contracts::domain::a001_door::aggregate::DEFAULT_PRICE_MAX;
use contracts::domain::a001_door::{CatalogStore, Door, PriceRange};
use contracts::enums::{CategoryFilter, SortKey};
use leptos::prelude::*;

/// Границы цены из полей ввода; пустое или нечисловое поле даёт значение по умолчанию
pub fn price_bounds(min_input: &str, max_input: &str) -> PriceRange {
    let min = parse_price_input(min_input).unwrap_or(0);
    let max = parse_price_input(max_input).unwrap_or(DEFAULT_PRICE_MAX);
    PriceRange::new(min, max)
}

#[derive(Clone, Copy)]
pub struct CatalogVm {
    pub store: RwSignal<CatalogStore>,

    // === Поля формы фильтров ===
    pub sort_value: RwSignal<String>,
    pub price_min: RwSignal<String>,
    pub price_max: RwSignal<String>,
}

impl CatalogVm {
    pub fn new() -> Self {
        Self::with_store(CatalogStore::default())
    }

    pub fn with_store(store: CatalogStore) -> Self {
        let sort = store.sort().code().to_string();
        Self {
            store: RwSignal::new(store),
            sort_value: RwSignal::new(sort),
            price_min: RwSignal::new(String::new()),
            price_max: RwSignal::new(String::new()),
        }
    }

    /// Перенос значений полей в хранилище. Вызывается один раз при создании вида.
    pub fn bind_inputs(&self) {
        let vm = *self;

        Effect::new(move |_| {
            let code = vm.sort_value.get();
            let Some(sort) = SortKey::from_code(&code) else {
                log::warn!("Unknown sort key: {}", code);
                return;
            };
            vm.store.maybe_update(|s| {
                if s.sort() == sort {
                    return false;
                }
                s.set_sort(sort);
                true
            });
        });

        Effect::new(move |_| {
            let range = price_bounds(&vm.price_min.get(), &vm.price_max.get());
            vm.store.maybe_update(|s| {
                if s.price_range() == range {
                    return false;
                }
                s.set_price_range(range.min, range.max);
                true
            });
        });
    }

    /// Видимые двери; пересчитываются при любом изменении фильтров
    pub fn visible(&self) -> Memo<Vec<Door>> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.derive()))
    }

    pub fn preview(&self) -> Memo<Option<Door>> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.preview().cloned()))
    }

    pub fn is_category_active(&self, filter: CategoryFilter) -> bool {
        self.store.with(|s| s.category() == filter)
    }

    /// Выбран ли хоть один фильтр помимо значений по умолчанию
    pub fn is_filtered(&self) -> bool {
        self.store.with(|s| s.is_filtered())
    }

    pub fn select_category(&self, filter: CategoryFilter) {
        self.store.maybe_update(|s| {
            if s.category() == filter {
                return false;
            }
            s.set_category(filter);
            true
        });
        log::debug!("Catalog category: {}", filter.code());
    }

    /// Сбросить категорию и цену вместе с полями ввода
    pub fn reset_filters(&self) {
        self.store.update(|s| s.reset_filters());
        self.price_min.set(String::new());
        self.price_max.set(String::new());
        log::debug!("Catalog filters reset");
    }

    pub fn open_preview(&self, door_id: u32) {
        let mut opened = false;
        self.store.maybe_update(|s| {
            opened = s.request_preview(door_id);
            opened
        });
        if !opened {
            log::debug!("Quick view ignored: no door {}", door_id);
        }
    }

    pub fn close_preview(&self) {
        self.store.maybe_update(|s| {
            let was_open = s.preview().is_some();
            s.clear_preview();
            was_open
        });
    }
}

impl Default for CatalogVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bounds_defaults() {
        assert_eq!(price_bounds("", ""), PriceRange::default());
        assert_eq!(price_bounds("abc", "  "), PriceRange::new(0, 300_000));
    }

    #[test]
    fn test_price_bounds_parsed() {
        assert_eq!(price_bounds("100 000", ""), PriceRange::new(100_000, 300_000));
        assert_eq!(price_bounds("", "150000 ₽"), PriceRange::new(0, 150_000));
        // Перевёрнутый диапазон не исправляется
        assert_eq!(price_bounds("200000", "100000"), PriceRange::new(200_000, 100_000));
    }
}
