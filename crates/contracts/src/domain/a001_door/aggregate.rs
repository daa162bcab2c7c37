use crate::enums::DoorCategory;
use serde::{Deserialize, Serialize};

/// Дверь из каталога (агрегат a001)
///
/// Создаётся один раз при старте из фиксированного списка и больше не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Уникальный номер позиции
    pub id: u32,

    pub category: DoorCategory,

    /// Цена "от", в рублях
    pub price: u32,

    pub name: String,

    /// Путь к фотографии (напр. "/works/IMG_5856.jpeg")
    pub image: String,

    /// Ключевые особенности, в порядке важности
    pub features: Vec<String>,

    /// Звукоизоляция (напр. "42 дБ")
    pub acoustic: String,

    /// Размер полотна (напр. "2100×900 мм")
    pub size: String,

    pub material: String,

    /// Бейдж "Новинка"
    pub is_new: bool,

    /// Бейдж "Хит"; такие двери идут первыми при сортировке по популярности
    pub is_popular: bool,

    /// Конструкция с терморазрывом вне зависимости от основной категории
    pub thermo: bool,
}

impl Door {
    /// Дверь подходит под фильтр "С терморазрывом"
    pub fn is_thermo_eligible(&self) -> bool {
        self.category == DoorCategory::Thermo || self.thermo
    }

    /// Не более `limit` особенностей для карточки каталога
    pub fn headline_features(&self, limit: usize) -> &[String] {
        &self.features[..self.features.len().min(limit)]
    }
}

/// Граница цены по умолчанию
pub const DEFAULT_PRICE_MAX: u32 = 300_000;

/// Замкнутый диапазон цен `[min, max]`
///
/// Диапазон не нормализуется: при `min > max` в него не попадает ни одна цена.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_is_closed() {
        let range = PriceRange::new(100_000, 150_000);
        assert!(range.contains(100_000));
        assert!(range.contains(150_000));
        assert!(!range.contains(99_999));
        assert!(!range.contains(150_001));
    }

    #[test]
    fn test_swapped_bounds_match_nothing() {
        let range = PriceRange::new(200_000, 100_000);
        assert!(!range.contains(150_000));
        assert!(!range.contains(100_000));
        assert!(!range.contains(200_000));
    }

    #[test]
    fn test_default_range() {
        let range = PriceRange::default();
        assert_eq!((range.min, range.max), (0, 300_000));
        assert!(range.is_default());
        assert!(!PriceRange::new(0, 299_999).is_default());
    }
}
