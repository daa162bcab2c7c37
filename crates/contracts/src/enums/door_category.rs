use serde::{Deserialize, Serialize};

/// Категории дверей каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorCategory {
    Invisible,
    Veneer,
    Glass,
    Entrance,
    Acoustic,
    Thermo,
}

impl DoorCategory {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            DoorCategory::Invisible => "invisible",
            DoorCategory::Veneer => "veneer",
            DoorCategory::Glass => "glass",
            DoorCategory::Entrance => "entrance",
            DoorCategory::Acoustic => "acoustic",
            DoorCategory::Thermo => "thermo",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorCategory::Invisible => "Скрытые двери",
            DoorCategory::Veneer => "Шпон премиум",
            DoorCategory::Glass => "Стеклянные",
            DoorCategory::Entrance => "Входные",
            DoorCategory::Acoustic => "Акустические",
            DoorCategory::Thermo => "С терморазрывом",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DoorCategory::Invisible => "🎭",
            DoorCategory::Veneer => "🪵",
            DoorCategory::Glass => "💎",
            DoorCategory::Entrance => "🏠",
            DoorCategory::Acoustic => "🔇",
            DoorCategory::Thermo => "❄️",
        }
    }

    /// Получить все категории в порядке отображения
    pub fn all() -> Vec<DoorCategory> {
        vec![
            DoorCategory::Invisible,
            DoorCategory::Veneer,
            DoorCategory::Glass,
            DoorCategory::Entrance,
            DoorCategory::Acoustic,
            DoorCategory::Thermo,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "invisible" => Some(DoorCategory::Invisible),
            "veneer" => Some(DoorCategory::Veneer),
            "glass" => Some(DoorCategory::Glass),
            "entrance" => Some(DoorCategory::Entrance),
            "acoustic" => Some(DoorCategory::Acoustic),
            "thermo" => Some(DoorCategory::Thermo),
            _ => None,
        }
    }
}

/// Фильтр каталога по категории: "все" либо одна конкретная категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DoorCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все двери",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "🚪",
            CategoryFilter::Only(category) => category.icon(),
        }
    }

    /// Все варианты фильтра в порядке кнопок каталога ("все" первым)
    pub fn all() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(DoorCategory::all().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "all" {
            return Some(CategoryFilter::All);
        }
        DoorCategory::from_code(code).map(CategoryFilter::Only)
    }

    /// Проверяет, проходит ли дверь с заданной категорией и признаком терморазрыва.
    ///
    /// Фильтр `thermo` дополнительно пропускает двери других категорий,
    /// помеченные признаком терморазрыва (входные ThermoSafe и т.п.).
    pub fn accepts(&self, category: DoorCategory, thermo_eligible: bool) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(DoorCategory::Thermo) => {
                category == DoorCategory::Thermo || thermo_eligible
            }
            CategoryFilter::Only(wanted) => category == *wanted,
        }
    }
}

impl ToString for DoorCategory {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for filter in CategoryFilter::all() {
            assert_eq!(CategoryFilter::from_code(filter.code()), Some(filter));
        }
        assert_eq!(CategoryFilter::from_code("doors"), None);
    }

    #[test]
    fn test_all_filter_is_first_button() {
        let filters = CategoryFilter::all();
        assert_eq!(filters.len(), 7);
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters[0].display_name(), "Все двери");
    }

    #[test]
    fn test_thermo_filter_accepts_flagged_doors() {
        let thermo = CategoryFilter::Only(DoorCategory::Thermo);
        assert!(thermo.accepts(DoorCategory::Thermo, false));
        assert!(thermo.accepts(DoorCategory::Entrance, true));
        assert!(!thermo.accepts(DoorCategory::Entrance, false));
    }

    #[test]
    fn test_entrance_filter_ignores_thermo_flag() {
        let entrance = CategoryFilter::Only(DoorCategory::Entrance);
        assert!(entrance.accepts(DoorCategory::Entrance, true));
        assert!(!entrance.accepts(DoorCategory::Thermo, false));
    }
}
