//! Главная (и единственная) страница сайта

mod collections;
mod contacts;
pub mod content;
mod hero;
mod page;
mod sections;
mod works;

pub use page::HomePage;
