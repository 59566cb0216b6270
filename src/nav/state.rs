//! Per-session navigation state.

use serde::{Deserialize, Serialize};

use super::page::{Page, PageCatalog};

/// Pages shown in the menu plus the route of the active page.
///
/// `current_page` is `""` until the first click and afterwards always one of
/// the catalog's routes, since the click handler only ever assigns the route
/// of a rendered button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pages: PageCatalog,
    #[serde(default)]
    current_page: String,
}

impl NavigationState {
    pub fn new(pages: PageCatalog) -> Self {
        Self {
            pages,
            current_page: String::new(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        self.pages.pages()
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn is_current(&self, route: &str) -> bool {
        self.current_page == route
    }

    pub fn set_current_page(&mut self, route: impl Into<String>) {
        self.current_page = route.into();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PageCatalog::default())
    }
}
