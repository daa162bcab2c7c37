use serde::{Deserialize, Serialize};

/// Порядок сортировки каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Name,
}

impl SortKey {
    /// Код для `<option value=...>`
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popular => "Популярные",
            SortKey::PriceAsc => "Сначала дешевые",
            SortKey::PriceDesc => "Сначала дорогие",
            SortKey::Name => "По названию",
        }
    }

    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Popular,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Name,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "popular" => Some(SortKey::Popular),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }
}
