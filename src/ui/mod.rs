pub mod add_item;
pub mod detail;
pub mod layout;
pub mod library;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

pub use render::render;
