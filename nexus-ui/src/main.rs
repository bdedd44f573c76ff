//! Bogor Nexus Dashboard
//!
//! Smart city dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - City metric cards loaded from the mock data source
//! - Static analytics trends and area breakdown
//! - Animated neural network and system monitor panels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Chart geometry, simulators and panel state come from the
//! `bogor-nexus` core; each panel drives its simulators with `gloo-timers`
//! intervals that are dropped when the panel unmounts.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
