//! Page descriptors and the validated page catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A navigable page: button label plus route path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub display: String,
    pub route: String,
}

impl Page {
    pub fn new(display: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            route: route.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("page catalog is empty")]
    EmptyCatalog,

    #[error("page {display:?} has an empty route")]
    EmptyRoute { display: String },

    #[error("route {route:?} is used by more than one page")]
    DuplicateRoute { route: String },
}

/// Ordered list of pages shown in the menu.
///
/// Routes double as button keys, so they must be unique and non-empty
/// (the empty string means "no page selected").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Page>", into = "Vec<Page>")]
pub struct PageCatalog {
    pages: Vec<Page>,
}

impl PageCatalog {
    pub fn new(pages: Vec<Page>) -> Result<Self, NavError> {
        if pages.is_empty() {
            return Err(NavError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if page.route.is_empty() {
                return Err(NavError::EmptyRoute {
                    display: page.display.clone(),
                });
            }
            if !seen.insert(page.route.as_str()) {
                return Err(NavError::DuplicateRoute {
                    route: page.route.clone(),
                });
            }
        }

        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains_route(&self, route: &str) -> bool {
        self.pages.iter().any(|p| p.route == route)
    }
}

/// The four sample pages, in menu order.
impl Default for PageCatalog {
    fn default() -> Self {
        Self {
            pages: vec![
                Page::new("Generate story", "/"),
                Page::new("Marketing campaign", "/marketing"),
                Page::new("Image playground", "/images"),
                Page::new("Video playground", "/videos"),
            ],
        }
    }
}

impl TryFrom<Vec<Page>> for PageCatalog {
    type Error = NavError;

    fn try_from(pages: Vec<Page>) -> Result<Self, Self::Error> {
        Self::new(pages)
    }
}

impl From<PageCatalog> for Vec<Page> {
    fn from(catalog: PageCatalog) -> Self {
        catalog.pages
    }
}
