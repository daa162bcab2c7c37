//! Статический каталог дверей A-1 StroimDom

use super::aggregate::Door;
use crate::enums::DoorCategory;
use once_cell::sync::Lazy;
use std::sync::Arc;

static DOORS: Lazy<Arc<[Door]>> = Lazy::new(|| Arc::from(build_catalog()));

/// Весь каталог; список собирается один раз при первом обращении
pub fn all_doors() -> Arc<[Door]> {
    Arc::clone(&DOORS)
}

struct DoorSpec {
    id: u32,
    name: &'static str,
    category: DoorCategory,
    price: u32,
    image: &'static str,
    features: [&'static str; 3],
    acoustic: &'static str,
    size: &'static str,
    material: &'static str,
}

impl DoorSpec {
    fn build(self) -> Door {
        Door {
            id: self.id,
            category: self.category,
            price: self.price,
            name: self.name.to_string(),
            image: self.image.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            acoustic: self.acoustic.to_string(),
            size: self.size.to_string(),
            material: self.material.to_string(),
            is_new: false,
            is_popular: false,
            thermo: false,
        }
    }
}

fn popular(mut door: Door) -> Door {
    door.is_popular = true;
    door
}

fn novelty(mut door: Door) -> Door {
    door.is_new = true;
    door
}

fn thermo(mut door: Door) -> Door {
    door.thermo = true;
    door
}

fn build_catalog() -> Vec<Door> {
    use DoorCategory::*;

    vec![
        // Скрытые двери
        popular(
            DoorSpec {
                id: 1,
                name: "Invisible Pro",
                category: Invisible,
                price: 89_900,
                image: "/works/IMG_5856.jpeg",
                features: ["Заподлицо со стеной", "Магнитный притвор", "Скрытые петли Simonswerk"],
                acoustic: "36 дБ",
                size: "2100×900 мм",
                material: "МДФ под покраску",
            }
            .build(),
        ),
        novelty(
            DoorSpec {
                id: 2,
                name: "Secret Trim",
                category: Invisible,
                price: 94_500,
                image: "/works/IMG_5857.jpeg",
                features: ["Минимальный зазор 2мм", "Доводчик", "Подготовка под RAL/NCS"],
                acoustic: "38 дБ",
                size: "2100×900 мм",
                material: "МДФ + алюминий",
            }
            .build(),
        ),
        DoorSpec {
            id: 3,
            name: "Flush Elegance",
            category: Invisible,
            price: 79_900,
            image: "/works/IMG_5858.jpeg",
            features: ["Ровный притвор", "Магнитные замки", "Чистый монтаж"],
            acoustic: "34 дБ",
            size: "2100×800 мм",
            material: "МДФ",
        }
        .build(),
        // Шпон премиум
        popular(
            DoorSpec {
                id: 4,
                name: "Noble Oak AA",
                category: Veneer,
                price: 124_900,
                image: "/works/IMG_5859.jpeg",
                features: ["Шпон дуба класса АА", "Вертикальный набор", "Защита от УФ"],
                acoustic: "40 дБ",
                size: "2100×900 мм",
                material: "Массив + шпон дуба",
            }
            .build(),
        ),
        novelty(
            DoorSpec {
                id: 5,
                name: "Walnut Signature",
                category: Veneer,
                price: 149_900,
                image: "/works/IMG_5860.jpeg",
                features: ["Шпон ореха", "Молдинги с металлом", "Матовая защита"],
                acoustic: "42 дБ",
                size: "2100×900 мм",
                material: "Массив + шпон ореха",
            }
            .build(),
        ),
        DoorSpec {
            id: 6,
            name: "Dark Ash Premium",
            category: Veneer,
            price: 134_900,
            image: "/works/IMG_5861.jpeg",
            features: ["Тёмный ясень", "Диагональный набор", "Стойкость к царапинам"],
            acoustic: "38 дБ",
            size: "2100×900 мм",
            material: "Массив + шпон ясеня",
        }
        .build(),
        // Стеклянные
        popular(
            DoorSpec {
                id: 7,
                name: "Glass Mono Bronze",
                category: Glass,
                price: 98_900,
                image: "/works/IMG_5862.jpeg",
                features: ["Закалённое стекло", "Бронзовое напыление", "Скрытая фурнитура"],
                acoustic: "32 дБ",
                size: "2100×900 мм",
                material: "Алюминий + стекло 8мм",
            }
            .build(),
        ),
        DoorSpec {
            id: 8,
            name: "Crystal Clear",
            category: Glass,
            price: 87_900,
            image: "/works/IMG_5856.jpeg",
            features: ["Прозрачное стекло", "Тонкие профили", "Маятниковая система"],
            acoustic: "28 дБ",
            size: "2100×800 мм",
            material: "Алюминий + стекло 10мм",
        }
        .build(),
        novelty(
            DoorSpec {
                id: 9,
                name: "Graphite Luxury",
                category: Glass,
                price: 112_900,
                image: "/works/IMG_5857.jpeg",
                features: ["Графитовое стекло", "Антиотпечатки", "Мягкий довод"],
                acoustic: "35 дБ",
                size: "2100×900 мм",
                material: "Алюминий + стекло 8мм",
            }
            .build(),
        ),
        // Входные
        thermo(popular(
            DoorSpec {
                id: 10,
                name: "ThermoSafe Elite",
                category: Entrance,
                price: 189_900,
                image: "/works/IMG_5858.jpeg",
                features: ["Терморазрыв", "Тройной контур", "Класс утепления A++"],
                acoustic: "45 дБ",
                size: "2100×950 мм",
                material: "Сталь + утеплитель",
            }
            .build(),
        )),
        novelty(
            DoorSpec {
                id: 11,
                name: "Security Pro Max",
                category: Entrance,
                price: 224_900,
                image: "/works/IMG_5859.jpeg",
                features: ["Противовзломные замки", "Бронепакет 4 класса", "Smart-замок"],
                acoustic: "48 дБ",
                size: "2100×950 мм",
                material: "Сталь 2мм + бронепакет",
            }
            .build(),
        ),
        thermo(
            DoorSpec {
                id: 12,
                name: "Design Entry Wood",
                category: Entrance,
                price: 169_900,
                image: "/works/IMG_5860.jpeg",
                features: ["Декор шпоном", "Терморазрыв", "Интеллектуальный глазок"],
                acoustic: "42 дБ",
                size: "2100×950 мм",
                material: "Сталь + шпон дуба",
            }
            .build(),
        ),
        // Акустические
        popular(
            DoorSpec {
                id: 13,
                name: "Acoustic 42",
                category: Acoustic,
                price: 109_900,
                image: "/works/IMG_5861.jpeg",
                features: ["Звукоизоляция 42 дБ", "Периметральные уплотнители", "Доводчик"],
                acoustic: "42 дБ",
                size: "2100×900 мм",
                material: "МДФ + акустический пакет",
            }
            .build(),
        ),
        novelty(
            DoorSpec {
                id: 14,
                name: "Silent Pro 45",
                category: Acoustic,
                price: 134_900,
                image: "/works/IMG_5862.jpeg",
                features: ["Звукоизоляция 45 дБ", "Двойной контур", "Магнитный притвор"],
                acoustic: "45 дБ",
                size: "2100×900 мм",
                material: "МДФ + акустический пакет PRO",
            }
            .build(),
        ),
        DoorSpec {
            id: 15,
            name: "Studio Guard",
            category: Acoustic,
            price: 119_900,
            image: "/works/IMG_5856.jpeg",
            features: ["Звукоизоляция 40 дБ", "Для студий", "Усиленная коробка"],
            acoustic: "40 дБ",
            size: "2100×900 мм",
            material: "МДФ + акустический пакет",
        }
        .build(),
        // С терморазрывом
        popular(
            DoorSpec {
                id: 16,
                name: "Nord Plus Arctic",
                category: Thermo,
                price: 199_900,
                image: "/works/IMG_5857.jpeg",
                features: ["Терморазрыв Premium", "До -40°C", "Тройной контур"],
                acoustic: "46 дБ",
                size: "2100×950 мм",
                material: "Сталь + PIR утеплитель",
            }
            .build(),
        ),
        novelty(
            DoorSpec {
                id: 17,
                name: "Tundra Luxury",
                category: Thermo,
                price: 234_900,
                image: "/works/IMG_5858.jpeg",
                features: ["Терморазрыв Extreme", "До -50°C", "Отделка шпоном"],
                acoustic: "48 дБ",
                size: "2100×950 мм",
                material: "Сталь + PIR + шпон",
            }
            .build(),
        ),
        DoorSpec {
            id: 18,
            name: "Winter Guard Pro",
            category: Thermo,
            price: 179_900,
            image: "/works/IMG_5859.jpeg",
            features: ["Терморазрыв Standard", "До -30°C", "Доступная цена"],
            acoustic: "44 дБ",
            size: "2100×950 мм",
            material: "Сталь + минвата",
        }
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_unique_ids() {
        let doors = all_doors();
        assert_eq!(doors.len(), 18);
        let ids: HashSet<u32> = doors.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), doors.len());
    }

    #[test]
    fn test_prices_fit_default_range() {
        let doors = all_doors();
        let min = doors.iter().map(|d| d.price).min();
        let max = doors.iter().map(|d| d.price).max();
        assert_eq!(min, Some(79_900));
        assert_eq!(max, Some(234_900));
    }

    #[test]
    fn test_entrance_doors_tagged_thermo() {
        let tagged: Vec<u32> = all_doors()
            .iter()
            .filter(|d| d.category == DoorCategory::Entrance && d.thermo)
            .map(|d| d.id)
            .collect();
        assert_eq!(tagged, vec![10, 12]);
    }
}
