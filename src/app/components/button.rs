use dioxus::prelude::*;

use crate::nav::NavStyle;

/// Menu button with a route key and a default or highlighted style.
#[component]
pub fn Button(
    #[props(default)] variant: NavStyle,
    #[props(default)] disabled: bool,
    #[props(into)] route: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "nav-button",
            "data-route": "{route}",
            "data-style": variant.class(),
            style: variant.css(),
            disabled,
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            {children}
        }
    }
}
