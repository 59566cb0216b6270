//! Click handling: select the clicked page, then ask the router to go there.

use super::state::NavigationState;

/// Click on a menu button, keyed by the button's route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub key: String,
}

impl ClickEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Routing collaborator. Failures to route are the implementor's concern.
pub trait Navigate {
    fn navigate(&mut self, route: &str);
}

/// Make the clicked page current and request navigation to it.
pub fn navigate_to<N>(state: &mut NavigationState, event: &ClickEvent, navigator: &mut N)
where
    N: Navigate + ?Sized,
{
    tracing::debug!(
        from = state.current_page(),
        to = %event.key,
        "navigation menu click"
    );
    state.set_current_page(event.key.as_str());
    navigator.navigate(&event.key);
}
