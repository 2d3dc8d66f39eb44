use content::page::STATS;
use content::STATS_PANEL_ID;
use dioxus::prelude::*;

use crate::view_state::CountUp;

/// The statistics panel. Only this component subscribes to the counter, so
/// animation frames re-render nothing else.
#[component]
pub fn Stats(counter: Signal<CountUp>) -> Element {
    let snapshot = counter.read();
    let values = snapshot.values();
    let readings = STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| (stat, values.get(i).copied().unwrap_or_default()));

    rsx! {
        section {
            class: "section stats",
            div { class: "divider divider-top" }
            div {
                id: STATS_PANEL_ID,
                class: "stats-grid",
                for (stat, value) in readings {
                    div {
                        key: "{stat.label}",
                        class: "stat",
                        div {
                            class: "stat-value gradient-text",
                            "{value}{stat.suffix}"
                        }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
            div { class: "divider divider-bottom" }
        }
    }
}
