//! Форматирование цен и счётчиков каталога

/// Разделяет целое число на группы по три цифры пробелом
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1 234 567");
/// ```
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Цена в рублях для карточки и окна быстрого просмотра
pub fn format_price(price: u32) -> String {
    format!("{} ₽", format_thousands(price))
}

/// Подпись под заголовком каталога: "1 дверь", "18 дверей"
pub fn doors_count_label(count: usize) -> String {
    if count == 1 {
        format!("{} дверь в выбранной категории", count)
    } else {
        format!("{} дверей в выбранной категории", count)
    }
}

/// Разбор значения из поля цены: пробелы и "₽" допускаются, пустое поле даёт `None`
pub fn parse_price_input(input: &str) -> Option<u32> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '₽')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1 000");
        assert_eq!(format_thousands(189900), "189 900");
        assert_eq!(format_thousands(1234567), "1 234 567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(79900), "79 900 ₽");
        assert_eq!(format_price(234900), "234 900 ₽");
    }

    #[test]
    fn test_doors_count_label() {
        assert_eq!(doors_count_label(1), "1 дверь в выбранной категории");
        assert_eq!(doors_count_label(0), "0 дверей в выбранной категории");
        assert_eq!(doors_count_label(18), "18 дверей в выбранной категории");
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("150000"), Some(150000));
        assert_eq!(parse_price_input(" 150 000 ₽"), Some(150000));
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("   "), None);
        assert_eq!(parse_price_input("дорого"), None);
        assert_eq!(parse_price_input("-5"), None);
    }
}
