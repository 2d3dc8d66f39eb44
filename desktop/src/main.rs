//! Native preview of the landing page in a webview window.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    info!("opening landing page preview; sections are shown without scroll effects");
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    ui::App()
}
