//! LevelUp Life Dashboard
//!
//! Gamified self-improvement dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily goal ring, stats cards, growth chart and activity heatmap
//! - Badge wall, adaptive feedback and leaderboard
//! - Desktop sidebar and mobile navigation with enter animations
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from the `levelup` generator running in the
//! browser; there is no backend.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    document().set_title("LevelUp Life - Gamified Self-Improvement");

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
