//! Каталог дверей: фильтры, сетка карточек и быстрый просмотр

mod card;
mod quick_view;
mod view;
pub mod view_model;

pub use view::CatalogSection;
pub use view_model::CatalogVm;
