use thiserror::Error;
use wasm_bindgen::JsValue;

/// Ошибки привязки к DOM и загрузки настроек.
///
/// Ни одна из них не фатальна: вызывающий код пишет в лог и отключает
/// соответствующий эффект, страница продолжает работать.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Browser API error: {0}")]
    Js(String),

    #[error("Invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(format!("{:?}", value))
    }
}
