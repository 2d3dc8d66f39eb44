use content::page::STEPS;
use content::Region;
use dioxus::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::primitives::RevealSection;
use crate::components::primitives::SectionHeading;

#[component]
pub fn HowItWorks(revealed: bool) -> Element {
    let last = STEPS.len() - 1;
    rsx! {
        RevealSection {
            region: Region::How,
            revealed,
            inner_class: "container narrow",
            SectionHeading {
                title: "How it works",
                subtitle: "Three simple steps to your first chapter",
            }
            div {
                class: "steps",
                for (i, step) in STEPS.iter().enumerate() {
                    div {
                        key: "{step.title}",
                        class: "step",
                        div { class: "step-number", {(i + 1).to_string()} }
                        if i > 0 {
                            div { class: "step-connector left" }
                        }
                        if i < last {
                            div { class: "step-connector right" }
                        }
                        div {
                            class: "step-icon",
                            IconGlyph { icon: step.icon, size: 24 }
                        }
                        h3 { "{step.title}" }
                        p { class: "muted small", "{step.desc}" }
                    }
                }
            }
        }
    }
}
