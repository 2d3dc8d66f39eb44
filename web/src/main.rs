//! Browser entry point for the landing page.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    // Route Rust panics to the browser console instead of an opaque trap.
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("mounting landing page");
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    ui::App()
}
