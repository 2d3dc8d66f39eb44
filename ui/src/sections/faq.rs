use content::page::FAQS;
use content::Region;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::primitives::AccordionItem;
use crate::components::primitives::RevealSection;
use crate::components::primitives::SectionHeading;
use crate::view_state::AccordionState;

#[component]
pub fn Faq(revealed: bool, mut accordion: Signal<AccordionState>) -> Element {
    rsx! {
        RevealSection {
            region: Region::Faq,
            revealed,
            inner_class: "container narrow",
            SectionHeading {
                title: "Frequently asked questions",
                subtitle: "Answers to the popular ones",
            }
            div {
                class: "faq-grid",
                for (i, entry) in FAQS.iter().enumerate() {
                    AccordionItem {
                        key: "{i}",
                        question: entry.question.to_string(),
                        answer: entry.answer.to_string(),
                        is_open: accordion.read().is_open(i),
                        on_toggle: move |_| {
                            accordion.write().toggle(i);
                            debug!("faq open entry: {:?}", accordion.peek().open_index());
                        },
                    }
                }
            }
        }
    }
}
