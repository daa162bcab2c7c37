//! Тонкие обёртки над web-sys для поиска элементов и переключения классов

use super::error::SiteError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::MissingElement("document".to_string()))
}

pub fn element_by_id(id: &str) -> Result<Element, SiteError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))
}

/// Все элементы по CSS-селектору в порядке документа
pub fn query_all(selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document()?.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

fn body() -> Result<HtmlElement, SiteError> {
    document()?
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))
}

/// Запрет прокрутки страницы под открытым оверлеем
pub fn set_body_scroll_locked(locked: bool) -> Result<(), SiteError> {
    let value = if locked { "hidden" } else { "" };
    body()?.style().set_property("overflow", value)?;
    Ok(())
}
