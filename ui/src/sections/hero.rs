use content::page::HERO_SUBTITLE;
use content::page::HERO_TITLE;
use content::page::HERO_TITLE_ACCENT;
use content::Icon;
use content::Region;
use dioxus::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::primitives::ButtonLink;
use crate::components::primitives::ButtonVariant;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            div { class: "hero-grid grid-bg" }
            div { class: "blob blob-violet blob-float" }
            div { class: "blob blob-pink blob-float-2" }
            div { class: "blob blob-fuchsia blob-pulse" }
            div {
                class: "hero-content",
                h1 {
                    class: "hero-title animate-fade-in-up",
                    span { class: "gradient-text", "{HERO_TITLE_ACCENT}" }
                    br {}
                    span { "{HERO_TITLE}" }
                }
                p { class: "hero-subtitle animate-fade-in-up-2", "{HERO_SUBTITLE}" }
                div {
                    class: "hero-actions animate-fade-in-up-3",
                    ButtonLink {
                        href: Region::Download.anchor(),
                        class: "btn-large btn-glow",
                        "Download the app"
                        IconGlyph { icon: Icon::Download }
                    }
                    ButtonLink {
                        href: Region::Features.anchor(),
                        variant: ButtonVariant::Outline,
                        "Learn more"
                    }
                }
            }
        }
    }
}
