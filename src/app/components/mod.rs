//! Shared UI components for the Dioxus fullstack web UI.

pub mod button;
pub mod layout;
pub mod nav_menu;

pub use button::Button;
pub use layout::Layout;
pub use nav_menu::{NavButtons, NavMenu};
