pub mod anchor_scroll;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod icons;
pub mod lightbox;
pub mod modal;
pub mod nav_highlight;
pub mod scroll_lock;
pub mod scroll_reveal;
pub mod visibility;
