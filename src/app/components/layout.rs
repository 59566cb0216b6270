//! Layout component wrapping all pages with the navigation menu.

use dioxus::prelude::*;

use super::nav_menu::NavMenu;
use crate::app::nav_context::use_current_page;
use crate::app::Route;
use crate::styles::MAIN_CONTENT_STYLE;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("STUDIO_VERSION");
    let git_sha = env!("STUDIO_GIT_SHA");
    let full_title = format!("{} - Gemini Studio", props.title);
    let url = use_route::<Route>().to_string();
    let active = use_current_page();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }

        NavMenu {
            url,
            on_change: move |route: String| tracing::info!(%route, "Active page changed"),
            main { style: MAIN_CONTENT_STYLE, "data-active-route": "{active}",
                {props.children}
            }
        }
        footer { style: "text-align:center;padding:12px 0;",
            small { "Gemini Studio v{version} ({git_sha})" }
        }
    }
}
