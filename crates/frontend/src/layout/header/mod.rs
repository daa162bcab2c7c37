pub mod header;
pub mod nav_menu;

pub use header::{Header, NAV_LINKS};
