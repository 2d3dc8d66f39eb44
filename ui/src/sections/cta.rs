use content::page::CTA_BLURB;
use content::page::CTA_TITLE;
use content::Icon;
use content::Region;
use dioxus::prelude::*;

use crate::app_state::SiteState;
use crate::components::icon::IconGlyph;
use crate::components::primitives::ButtonLink;
use crate::components::primitives::ButtonVariant;
use crate::components::primitives::RevealSection;

#[component]
pub fn Cta(revealed: bool) -> Element {
    let site = use_context::<SiteState>();
    rsx! {
        RevealSection {
            region: Region::Cta,
            revealed,
            inner_class: "container narrow cta-banner",
            div { class: "cta-gradient" }
            div { class: "cta-pattern" }
            div {
                class: "cta-body",
                h2 { class: "section-title", "{CTA_TITLE}" }
                p { "{CTA_BLURB}" }
                ButtonLink {
                    href: site.links.chat_url.clone(),
                    variant: ButtonVariant::Light,
                    external: true,
                    "Join the channel"
                    IconGlyph { icon: Icon::Send }
                }
            }
        }
    }
}
