//! Page components, one per menu entry.
//!
//! Each page is a placeholder destination wrapped in the shared layout.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
fn PagePlaceholder(title: String, blurb: String) -> Element {
    rsx! {
        Layout { title: title.clone(),
            h1 { "{title}" }
            p { "{blurb}" }
        }
    }
}

/// Story generation page.
#[component]
pub fn Story() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Generate story".to_string(),
            blurb: "Describe characters and a setting to draft a short story.".to_string(),
        }
    }
}

/// Marketing campaign page.
#[component]
pub fn Marketing() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Marketing campaign".to_string(),
            blurb: "Outline a product and audience to draft campaign copy.".to_string(),
        }
    }
}

/// Image playground page.
#[component]
pub fn Images() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Image playground".to_string(),
            blurb: "Ask questions about an uploaded image.".to_string(),
        }
    }
}

/// Video playground page.
#[component]
pub fn Videos() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Video playground".to_string(),
            blurb: "Ask questions about a video clip.".to_string(),
        }
    }
}
