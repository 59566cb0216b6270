//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod nav_context;
pub mod pages;

use nav_context::{use_nav_provider, use_session_catalog};
use pages::{Images, Marketing, Story, Videos};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Configured on the server, carried to the client with hydration data
    let catalog = use_session_catalog();

    // One navigation state per session, created on mount
    use_nav_provider(catalog);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Story {},
    #[route("/marketing")]
    Marketing {},
    #[route("/images")]
    Images {},
    #[route("/videos")]
    Videos {},
}
