use content::page::TESTIMONIALS;
use content::Icon;
use content::Region;
use dioxus::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::primitives::Card;
use crate::components::primitives::RevealSection;
use crate::components::primitives::SectionHeading;

const STAR_COUNT: usize = 5;

#[component]
pub fn Testimonials(revealed: bool) -> Element {
    rsx! {
        RevealSection {
            region: Region::Testimonials,
            revealed,
            class: "clip",
            inner_class: "container",
            SectionHeading {
                title: "What readers say",
                subtitle: "Join thousands of happy readers",
            }
            div {
                class: "testimonial-strip",
                for t in TESTIMONIALS.iter() {
                    Card {
                        key: "{t.name}",
                        class: "testimonial card-hover",
                        div {
                            class: "stars",
                            for n in 0..STAR_COUNT {
                                IconGlyph { key: "{n}", icon: Icon::Star, filled: true }
                            }
                        }
                        p { class: "quote", "“{t.quote}”" }
                        div {
                            class: "author",
                            div {
                                class: "avatar",
                                style: "background: {t.avatar_gradient};",
                                "{t.initials}"
                            }
                            div {
                                div { class: "author-name", "{t.name}" }
                                div { class: "muted small", "{t.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
