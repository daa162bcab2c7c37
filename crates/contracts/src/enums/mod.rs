pub mod door_category;
pub mod sort_key;

pub use door_category::{CategoryFilter, DoorCategory};
pub use sort_key::SortKey;
