//! Тексты статичных секций главной страницы

use crate::shared::carousel::Slide;

/// Карточка с плашкой, заголовком и текстом. Пустая плашка не выводится.
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub pill: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

const fn card(pill: &'static str, title: &'static str, text: &'static str) -> InfoCard {
    InfoCard { pill, title, text }
}

#[derive(Debug, Clone, Copy)]
pub struct CaseStudy {
    pub segment: &'static str,
    pub accent: bool,
    pub promise: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub meta: &'static [&'static str],
}

/// Вкладка раздела "Линейки"
#[derive(Debug, Clone, Copy)]
pub struct CollectionTab {
    pub code: &'static str,
    pub label: &'static str,
    pub cards: &'static [InfoCard],
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_CHIPS: &[(&str, bool)] = &[
    ("Invisible", false),
    ("Acoustic 42 дБ", true),
    ("Glass / Bronze", false),
    ("ThermoSafe", true),
];

/// (значение, подпись)
pub const STATS: &[(&str, &str)] = &[
    ("15+ лет", "опыта в премиум сегменте"),
    ("2400+", "завершённых объектов"),
    ("5 лет", "расширенная гарантия"),
];

pub const MARQUEE: &[&str] = &[
    "Архитекторы",
    "Девелоперы",
    "Luxury интерьеры",
    "Коммерция",
    "HoReCa",
    "Smart home интеграция",
];

/// (метка, описание)
pub const CERTS: &[(&str, &str)] = &[
    ("ISO", "Сертификация производства и материалов"),
    ("Fire", "Противопожарные EI 30/60/90"),
    ("Acoustic", "Протоколы до 42 дБ"),
    ("Warranty", "Расширенная гарантия 5 лет"),
];

pub const CASE_SEGMENTS: &[&str] = &["Резиденции", "Апартаменты", "Офисы", "HoReCa"];

pub const CASES: &[CaseStudy] = &[
    CaseStudy {
        segment: "Резиденция",
        accent: false,
        promise: "48 часов на выезд",
        title: "Скрытые двери под покраску",
        text: "15 полотен заподлицо со стеной, магнитные замки, доводчики, подготовка под покраску.",
        meta: &["Акустика 34 дБ", "Срок 21 день", "Чистый монтаж"],
    },
    CaseStudy {
        segment: "Апартаменты",
        accent: true,
        promise: "Договорённость по цвету",
        title: "Шпон и стекло в одном контуре",
        text: "Комбинация шпона и стекла, тонкие профили, подбор оттенков к мебели, скрытая фурнитура.",
        meta: &["AGB / Simonswerk", "Точные оттенки", "Бронза / графит"],
    },
    CaseStudy {
        segment: "Офис",
        accent: false,
        promise: "Ночные смены",
        title: "Акустические решения для переговорных",
        text: "Полотна с уплотнителями, доводчики, ровные притворы, стабильные зазоры до 40 дБ.",
        meta: &["График ночных работ", "Контроль пыли", "Доводчики"],
    },
];

pub const SERVICES: &[InfoCard] = &[
    card(
        "Консалтинг",
        "Дизайн и подбор",
        "Формируем ТЗ, привозим образцы, согласуем фурнитуру, цвета и акустические требования.",
    ),
    card(
        "Производство",
        "Точная геометрия",
        "Premium шпоны, устойчивые полотна, скрытые петли, магнитные замки, контроль оттенка и стыков.",
    ),
    card(
        "Монтаж",
        "Чистый монтаж и сервис",
        "Тихая установка, шумоизоляция, доводчики, финальная регулировка и гарантия 5 лет.",
    ),
];

pub const MATERIALS: &[InfoCard] = &[
    card(
        "Шпон / Эмаль",
        "Шпон класса АА, эмаль RAL/NCS",
        "Ровная фактура, стабильный оттенок, защита от УФ и царапин.",
    ),
    card(
        "Петли / Замки",
        "Simonswerk · AGB · Dormakaba",
        "Скрытые петли, магнитные замки, доводчики, тихий притвор.",
    ),
    card(
        "Стекло / Акустика",
        "Тонированные пакеты и акустика",
        "Закалённое стекло, бронза/графит, акустические пакеты до 42 дБ.",
    ),
];

pub const COLLECTIONS: &[CollectionTab] = &[
    CollectionTab {
        code: "invisible",
        label: "Invisible",
        cards: &[
            card("", "Flush Pro", "Полотно заподлицо со стеной, покраска в любой RAL/NCS, магнитные замки."),
            card("", "Acoustic 40", "Акустические пакеты до 40 дБ, периметральные уплотнители, доводчики."),
            card("", "Secret Trim", "Минимальный зазор, скрытые петли Simonswerk, усиленная коробка."),
        ],
    },
    CollectionTab {
        code: "veneer",
        label: "Шпон",
        cards: &[
            card("", "Fine Veneer", "Натуральные шпоны класса АА, сложные наборы, вертикаль/диагональ."),
            card("", "Deep Shade", "Тёмные оттенки с матовой защитой, стойкость к царапинам и УФ."),
            card("", "Signature Lines", "Интегрированные молдинги и вставки металла или камня."),
        ],
    },
    CollectionTab {
        code: "glass",
        label: "Стекло",
        cards: &[
            card("", "Glass Mono", "Закалённое стекло, тонирование, скрытая фурнитура, маятник/слайдер."),
            card("", "Bronze Air", "Бронзовое стекло, тонкие профили, мягкий довод, минимум видимых элементов."),
            card("", "Acoustic Glass", "Многослойные стеклопакеты с акустикой, магнитный притвор."),
        ],
    },
    CollectionTab {
        code: "entrance",
        label: "Входные",
        cards: &[
            card("", "ThermoSafe", "Терморазрыв, тройной контур, скрытые петли, высокий класс утепления."),
            card("", "Security Pro", "Противовзломные замки, бронепакет, усиленный каркас, интеллектуальный глазок."),
            card("", "Design Entry", "Дизайнерская отделка: шпон, эмаль, металл, камень с лазерной гравировкой."),
        ],
    },
];

pub const WHY_US: &[InfoCard] = &[
    card(
        "Скорость",
        "48 часов на выезд",
        "Замер, первичная смета и фиксация цен в течение двух рабочих дней.",
    ),
    card(
        "Качество",
        "Трёхступенчатый контроль",
        "Геометрия, оттенок, фурнитура и акустика проходят отдельные чек-листы.",
    ),
    card(
        "Сервис",
        "Монтаж без хаоса",
        "Чистый монтаж, тишина на объекте, финальная регулировка и гарантия 5 лет.",
    ),
];

/// Фото с объектов: (путь, подпись для слайдера)
pub const WORK_PHOTOS: &[(&str, &str)] = &[
    ("/works/IMG_5856.jpeg", "Скрытые полотна, ровный притвор, акустика 34 дБ"),
    ("/works/IMG_5857.jpeg", "Точное совпадение оттенков шпона и стен"),
    ("/works/IMG_5858.jpeg", "Интеграция в ниши, скрытая фурнитура"),
    ("/works/IMG_5859.jpeg", "Строгая геометрия, тихий доводчик"),
    ("/works/IMG_5860.jpeg", "Чистый монтаж без пыли, готовность к покраске"),
    ("/works/IMG_5861.jpeg", "Глубокая коробка, ровный зазор по периметру"),
    ("/works/IMG_5862.jpeg", "Контрастные полотна, точная подгонка проёмов"),
];

pub fn work_slides() -> Vec<Slide> {
    WORK_PHOTOS
        .iter()
        .map(|&(image, caption)| Slide::new(image, caption))
        .collect()
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Замер и консультация",
        text: "Выезд за 48 часов, фиксируем параметры, предлагаем решения и бюджет.",
    },
    ProcessStep {
        number: "02",
        title: "Проект и спецификация",
        text: "Чертежи, фурнитура, график производства, финальные цвета и покрытия.",
    },
    ProcessStep {
        number: "03",
        title: "Производство и контроль",
        text: "Трёхступенчатая проверка геометрии, оттенков и акустики.",
    },
    ProcessStep {
        number: "04",
        title: "Монтаж и сервис",
        text: "Чистый монтаж, уборка, финальная приёмка, сервис и гарантия 5 лет.",
    },
];

pub const TESTIMONIALS: &[InfoCard] = &[
    card(
        "",
        "Архитектор Елена",
        "“Соблюдают проектную документацию, аккуратны на объекте, сроки выдерживают. Клиенты довольны.”",
    ),
    card(
        "",
        "Девелопер Skyline",
        "“120 входных дверей с терморазрывом и акустикой. Логистика и монтаж без сбоев, сервис на высоте.”",
    ),
    card(
        "",
        "Частный клиент",
        "“Скрытые двери под покраску выглядят монолитно. Монтаж тихий и чистый, регулировка бесплатна.”",
    ),
];

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Сколько занимает производство?",
        answer: "Стандарт — 2-3 недели, индивидуальные покрытия и стекло — 4-6 недель.",
    },
    FaqItem {
        question: "Делаете ли монтаж в выходные?",
        answer: "Да, по согласованию. Работаем чисто: закрываем мебель, убираем после монтажа.",
    },
    FaqItem {
        question: "Можно ли интегрировать умный замок?",
        answer: "Да, подготавливаем полотна под электрозамки, биометрию и скрытую проводку.",
    },
    FaqItem {
        question: "Где посмотреть образцы?",
        answer: "Организуем демонстрацию у нас или привезём ключевые образцы на объект.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::header::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn test_collection_codes_unique() {
        let codes: HashSet<_> = COLLECTIONS.iter().map(|t| t.code).collect();
        assert_eq!(codes.len(), COLLECTIONS.len());
        assert!(COLLECTIONS.iter().all(|t| t.cards.len() == 3));
    }

    #[test]
    fn test_work_slides_follow_photos() {
        let slides = work_slides();
        assert_eq!(slides.len(), 7);
        assert_eq!(slides[0].image, "/works/IMG_5856.jpeg");
        assert!(slides.iter().all(|s| !s.caption.is_empty()));
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
        assert_eq!(NAV_LINKS.last().map(|(href, _)| *href), Some("#contacts"));
    }
}
