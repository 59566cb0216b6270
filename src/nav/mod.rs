//! Page navigation core.
//!
//! Framework-independent model of the navigation menu: the page catalog,
//! per-session navigation state, the click handler and the button model the
//! menu renders from. The Dioxus binding lives in the `app` module.

pub mod handler;
pub mod menu;
pub mod page;
pub mod state;

pub use handler::{navigate_to, ClickEvent, Navigate};
pub use menu::{menu_buttons, NavButton, NavStyle};
pub use page::{NavError, Page, PageCatalog};
pub use state::NavigationState;
