//! Thermo Dashboard
//!
//! Temperature sensor dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Current temperature with an online/offline indicator, refreshed every 5s
//! - Statistics for a selectable window, refreshed every 30s
//! - Temperature chart and history table
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It polls the sensor API over HTTP and reuses the model,
//! window and rendering code of the `thermo-dashboard` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
