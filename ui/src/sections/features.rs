use content::page::FEATURES;
use content::Region;
use dioxus::prelude::*;

use crate::components::primitives::Card;
use crate::components::primitives::IconBadge;
use crate::components::primitives::RevealSection;
use crate::components::primitives::SectionHeading;

#[component]
pub fn Features(revealed: bool) -> Element {
    rsx! {
        RevealSection {
            region: Region::Features,
            revealed,
            inner_class: "container",
            SectionHeading {
                title: "Everything for comfortable reading",
                subtitle: "A modern reader focused on privacy and quality.",
            }
            div {
                class: "feature-grid",
                for (i, feature) in FEATURES.iter().enumerate() {
                    Card {
                        key: "{feature.title}",
                        class: "card-hover",
                        style: format!("transition-delay: {}ms;", i * 80),
                        IconBadge { icon: feature.icon }
                        h3 { "{feature.title}" }
                        p { class: "muted", "{feature.desc}" }
                    }
                }
            }
        }
    }
}
