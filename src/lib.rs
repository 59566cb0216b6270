//! Gemini Studio - Rust Implementation
//!
//! A small sample web app whose pages are reached through a shared
//! navigation menu.
//!
//! This library provides:
//! - The framework-independent navigation model (`nav`)
//! - The Dioxus fullstack app, routes and menu component (`app`)
//! - Server-side configuration loading (`config`)

pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod nav;
pub mod styles;
