//! Button model the navigation menu renders from.

use super::handler::ClickEvent;
use super::state::NavigationState;
use crate::styles;

/// Visual style of a menu button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NavStyle {
    #[default]
    Default,
    Current,
}

impl NavStyle {
    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Default => "default",
            NavStyle::Current => "current",
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            NavStyle::Default => styles::DEFAULT_NAV_STYLE,
            NavStyle::Current => styles::CURRENT_NAV_STYLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButton {
    pub label: String,
    /// Route of the page, also the button's identity.
    pub key: String,
    pub disabled: bool,
    pub style: NavStyle,
}

impl NavButton {
    /// Click event this button fires, if it is enabled.
    pub fn click_event(&self) -> Option<ClickEvent> {
        (!self.disabled).then(|| ClickEvent::new(self.key.as_str()))
    }
}

/// One button per page in catalog order; the current page's button is
/// disabled and highlighted.
pub fn menu_buttons(state: &NavigationState) -> Vec<NavButton> {
    state
        .pages()
        .iter()
        .map(|page| {
            let current = state.is_current(&page.route);
            NavButton {
                label: page.display.clone(),
                key: page.route.clone(),
                disabled: current,
                style: if current {
                    NavStyle::Current
                } else {
                    NavStyle::Default
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::handler::{navigate_to, Navigate};
    use crate::nav::page::{Page, PageCatalog};

    struct NullNavigator;

    impl Navigate for NullNavigator {
        fn navigate(&mut self, _route: &str) {}
    }

    fn two_pages() -> NavigationState {
        NavigationState::new(
            PageCatalog::new(vec![
                Page::new("Generate story", "/"),
                Page::new("Marketing campaign", "/marketing"),
            ])
            .unwrap(),
        )
    }

    /// Click the button with `key` the way the menu does: only if it fires.
    fn click(state: &mut NavigationState, key: &str) -> bool {
        let button = menu_buttons(state)
            .into_iter()
            .find(|b| b.key == key)
            .unwrap();
        match button.click_event() {
            Some(event) => {
                navigate_to(state, &event, &mut NullNavigator);
                true
            }
            None => false,
        }
    }

    #[test]
    fn one_button_per_page_in_order() {
        let state = NavigationState::default();
        let buttons = menu_buttons(&state);

        assert_eq!(buttons.len(), state.pages().len());
        for (button, page) in buttons.iter().zip(state.pages()) {
            assert_eq!(button.label, page.display);
            assert_eq!(button.key, page.route);
        }
    }

    #[test]
    fn nothing_disabled_initially() {
        let buttons = menu_buttons(&NavigationState::default());
        assert!(buttons.iter().all(|b| !b.disabled));
        assert!(buttons.iter().all(|b| b.style == NavStyle::Default));
        assert!(buttons.iter().all(|b| b.click_event().is_some()));
    }

    #[test]
    fn clicked_button_becomes_current() {
        let mut state = two_pages();
        assert!(click(&mut state, "/marketing"));
        assert_eq!(state.current_page(), "/marketing");

        let buttons = menu_buttons(&state);
        assert_eq!(buttons[0].label, "Generate story");
        assert!(!buttons[0].disabled);
        assert_eq!(buttons[0].style, NavStyle::Default);
        assert_eq!(buttons[1].label, "Marketing campaign");
        assert!(buttons[1].disabled);
        assert_eq!(buttons[1].style, NavStyle::Current);
    }

    #[test]
    fn clicking_current_button_is_noop() {
        let mut state = two_pages();
        assert!(click(&mut state, "/"));
        let before = state.clone();

        assert!(!click(&mut state, "/"));
        assert_eq!(state, before);
    }

    #[test]
    fn exactly_one_current_after_clicks() {
        let mut state = NavigationState::default();
        for key in ["/images", "/videos", "/marketing"] {
            click(&mut state, key);
            let current: Vec<_> = menu_buttons(&state)
                .into_iter()
                .filter(|b| b.disabled)
                .map(|b| b.key)
                .collect();
            assert_eq!(current, [key]);
        }
    }

    #[test]
    fn style_css_matches_highlight() {
        assert_eq!(NavStyle::Current.css(), styles::CURRENT_NAV_STYLE);
        assert_eq!(NavStyle::Default.class(), "default");
        assert_eq!(NavStyle::Current.class(), "current");
    }
}
