//! a001: каталог дверей; модель, статические данные и хранилище фильтров

pub mod aggregate;
pub mod catalog_data;
pub mod store;

pub use aggregate::{Door, PriceRange};
pub use store::CatalogStore;
