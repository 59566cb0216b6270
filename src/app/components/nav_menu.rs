//! Page navigation menu: one button per page with the current page disabled.

use dioxus::prelude::*;

use crate::app::nav_context::{use_nav, RouterNavigator};
use crate::nav::{ClickEvent, NavButton};
use crate::styles::{MAIN_HEADER_STYLE, NAV_ROW_STYLE};

use super::Button;

#[derive(Props, Clone, PartialEq)]
pub struct NavMenuProps {
    /// URL being rendered (diagnostics only)
    pub url: String,
    /// Called with the new active route after each navigation click
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
    /// Content rendered below the menu
    pub children: Element,
}

/// Navigation header bound to the session's navigation state.
#[component]
pub fn NavMenu(props: NavMenuProps) -> Element {
    tracing::debug!(url = %props.url, "Rendering navigation menu");

    let nav = use_nav();
    let on_change = props.on_change;

    rsx! {
        header { style: MAIN_HEADER_STYLE,
            NavButtons {
                buttons: nav.buttons(),
                on_click: move |event: ClickEvent| {
                    nav.click(&event, &mut RouterNavigator(navigator()));
                    if let Some(f) = &on_change {
                        f.call(nav.current_page());
                    }
                },
            }
        }
        {props.children}
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavButtonsProps {
    pub buttons: Vec<NavButton>,
    #[props(default)]
    pub on_click: Option<EventHandler<ClickEvent>>,
}

/// Stateless row of menu buttons.
#[component]
pub fn NavButtons(props: NavButtonsProps) -> Element {
    let on_click = props.on_click;

    let buttons = props.buttons.into_iter().map(|button| {
        let label = button.label.clone();
        let route = button.key.clone();
        let (variant, disabled) = (button.style, button.disabled);
        rsx! {
            Button {
                key: "{route}",
                route: route.clone(),
                variant,
                disabled,
                onclick: move |_| {
                    // Disabled buttons never fire
                    if let (Some(event), Some(f)) = (button.click_event(), &on_click) {
                        f.call(event);
                    }
                },
                "{label}"
            }
        }
    });

    rsx! {
        nav { style: NAV_ROW_STYLE, {buttons} }
    }
}
