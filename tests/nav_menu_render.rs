//! Server-side rendering of the navigation button row.

#![cfg(feature = "server")]

use dioxus::prelude::*;
use gemini_studio::app::components::NavButtons;
use gemini_studio::nav::{menu_buttons, NavigationState, Page, PageCatalog};

fn render(state: &NavigationState) -> String {
    let buttons = menu_buttons(state);
    dioxus::ssr::render_element(rsx! {
        NavButtons { buttons }
    })
}

/// Rendered `<button ...>` fragments, in document order.
fn button_chunks(html: &str) -> Vec<&str> {
    html.split("<button").skip(1).collect()
}

#[test]
fn renders_one_button_per_page_in_order() {
    let state = NavigationState::default();
    let html = render(&state);
    let chunks = button_chunks(&html);

    assert_eq!(chunks.len(), 4);
    for (chunk, page) in chunks.iter().zip(state.pages()) {
        assert!(
            chunk.contains(&format!("data-route=\"{}\"", page.route)),
            "missing route {} in {}",
            page.route,
            chunk
        );
        assert!(chunk.contains(&page.display));
    }
}

#[test]
fn no_highlight_before_first_click() {
    let html = render(&NavigationState::default());
    assert!(!html.contains("data-style=\"current\""));
    assert_eq!(html.matches("data-style=\"default\"").count(), 4);
    assert!(!html.contains("disabled=true"));
}

#[test]
fn highlights_only_the_current_route() {
    let mut state = NavigationState::new(
        PageCatalog::new(vec![
            Page::new("Generate story", "/"),
            Page::new("Marketing campaign", "/marketing"),
        ])
        .unwrap(),
    );
    state.set_current_page("/marketing");

    let html = render(&state);
    let chunks = button_chunks(&html);

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].contains("Generate story"));
    assert!(chunks[0].contains("data-style=\"default\""));
    assert!(!chunks[0].contains("disabled=true"));
    assert!(chunks[1].contains("Marketing campaign"));
    assert!(chunks[1].contains("data-style=\"current\""));
    assert!(chunks[1].contains("disabled"));
    assert_eq!(html.matches("data-style=\"current\"").count(), 1);
}
