//! Gemini Studio - Rust Implementation
//!
//! Sample web app with a page navigation menu, served with Dioxus fullstack.

use gemini_studio::app::App;
use gemini_studio::nav::PageCatalog;

fn main() {
    let catalog = startup();

    dioxus::LaunchBuilder::new()
        .with_context(catalog)
        .launch(App);
}

#[cfg(feature = "server")]
fn startup() -> PageCatalog {
    use gemini_studio::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let loaded = config::load_config();
    let configured_filter = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.log_filter.clone())
        .unwrap_or_else(|| "gemini_studio=debug,dioxus=info".into());

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| configured_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Gemini Studio v{} ({})",
        env!("STUDIO_VERSION"),
        env!("STUDIO_GIT_SHA")
    );

    match loaded {
        Ok(cfg) => {
            let catalog = config::resolve_catalog(&cfg);
            tracing::info!("Configuration loaded, {} menu pages", catalog.len());
            catalog
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration, using built-in pages: {}", e);
            PageCatalog::default()
        }
    }
}

#[cfg(not(feature = "server"))]
fn startup() -> PageCatalog {
    PageCatalog::default()
}
