//! Navigation context for the per-session menu state.
//!
//! Holds the `NavigationState` in a signal so that writes from the click
//! handler re-render every component reading it.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use super::Route;
use crate::nav::{self, ClickEvent, NavButton, NavigationState, Navigate, PageCatalog};

/// Session navigation state shared via context
#[derive(Clone, Copy)]
pub struct NavContext {
    state: Signal<NavigationState>,
}

impl NavContext {
    /// Route of the active page, `""` before the first click
    pub fn current_page(&self) -> String {
        self.state.read().current_page().to_string()
    }

    /// Buttons for the current state
    pub fn buttons(&self) -> Vec<NavButton> {
        nav::menu_buttons(&self.state.read())
    }

    /// Run the click handler; the signal write schedules the re-render.
    pub fn click(&self, event: &ClickEvent, navigator: &mut impl Navigate) {
        let mut state = self.state;
        nav::navigate_to(&mut state.write(), event, navigator);
    }
}

/// Routing collaborator backed by the Dioxus router.
pub struct RouterNavigator(pub Navigator);

impl Navigate for RouterNavigator {
    fn navigate(&mut self, route: &str) {
        match route.parse::<Route>() {
            Ok(target) => {
                self.0.push(target);
            }
            Err(_) => tracing::warn!(route, "No app route matches navigation target"),
        }
    }
}

/// Page catalog for this session.
///
/// The server resolves it from the launch context and ships it in the
/// hydration payload so the client renders the same buttons.
pub fn use_session_catalog() -> PageCatalog {
    let provided = try_use_context::<PageCatalog>();
    use_server_cached(move || provided.clone().unwrap_or_default())
}

/// Initialize navigation context provider - call once at app root
pub fn use_nav_provider(catalog: PageCatalog) -> NavContext {
    let state = use_signal(move || NavigationState::new(catalog));
    use_context_provider(|| NavContext { state })
}

/// Get navigation context - use in any component
pub fn use_nav() -> NavContext {
    use_context::<NavContext>()
}

/// Route of the active page as seen by the menu
pub fn use_current_page() -> String {
    use_nav().current_page()
}
