//! Конфигурация сайта
//!
//! `site.toml` встраивается в бинарник при сборке. Отсутствующие ключи
//! берутся из значений по умолчанию, битый файл заменяется ими целиком.

use super::error::SiteError;
use leptos::prelude::*;
use serde::Deserialize;

const SITE_TOML: &str = include_str!("../../site.toml");

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub slider: SliderConfig,
    pub scroll: ScrollConfig,
    pub catalog: CatalogConfig,
    pub contacts: ContactsConfig,
    pub lightbox: LightboxConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SliderConfig {
    /// Период автопрокрутки слайдера
    pub autoplay_interval_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Элементы с анимацией появления
    pub reveal_selector: String,
    pub reveal_threshold: f64,
    /// Доля видимости секции, при которой подсвечивается пункт меню
    pub nav_threshold: f64,
    /// Пауза перед плавной прокруткой, чтобы меню успело закрыться
    pub anchor_delay_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_selector: ".reveal, .card".to_string(),
            reveal_threshold: 0.2,
            nav_threshold: 0.4,
            anchor_delay_ms: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub features_on_card: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { features_on_card: 3 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactsConfig {
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub address: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            phone: "+7 968 737 75 55".to_string(),
            phone_href: "tel:+79687377555".to_string(),
            email: "info@stroimdom.ru".to_string(),
            address: "Москва, Пресненская наб. 12".to_string(),
        }
    }
}

impl ContactsConfig {
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LightboxConfig {
    /// Подпись, если у фотографии нет своей
    pub fallback_caption: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            fallback_caption: "Работа A-1 StroimDom".to_string(),
        }
    }
}

pub fn parse_config(contents: &str) -> Result<SiteConfig, SiteError> {
    Ok(toml::from_str(contents)?)
}

/// Загрузить настройки из встроенного site.toml
///
/// Если файл не разбирается, используются значения по умолчанию.
pub fn load_config() -> SiteConfig {
    match parse_config(SITE_TOML) {
        Ok(config) => {
            log::debug!("Site config loaded from site.toml");
            config
        }
        Err(e) => {
            log::warn!("{}; using default configuration", e);
            SiteConfig::default()
        }
    }
}

/// Конфигурация из контекста; без провайдера используются значения по умолчанию
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = parse_config(SITE_TOML).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[slider]\nautoplay_interval_ms = 6000\n").unwrap();
        assert_eq!(config.slider.autoplay_interval_ms, 6000);
        assert_eq!(config.scroll.reveal_threshold, 0.2);
        assert_eq!(config.lightbox.fallback_caption, "Работа A-1 StroimDom");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[slider]\nautoplay_interval_ms = \"fast\"\n").is_err());
    }

    #[test]
    fn test_email_href() {
        assert_eq!(
            ContactsConfig::default().email_href(),
            "mailto:info@stroimdom.ru"
        );
    }
}
