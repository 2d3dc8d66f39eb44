use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::compat;
use crate::view_state::CountUp;

/// Counts every target up from zero over `duration` once `armed` turns true,
/// advancing once per animation frame.
///
/// The animation runs once per mount. It is not restarted if `armed` drops
/// and rises again.
pub fn use_count_up(targets: Vec<u32>, duration: Duration, armed: Signal<bool>) -> Signal<CountUp> {
    let mut counter = use_signal(move || CountUp::new(targets, duration));

    use_effect(move || {
        if !armed() || !counter.peek().is_idle() {
            return;
        }
        counter.write().arm();
        debug!("count-up started over {:?}", duration);

        spawn(async move {
            loop {
                let now = compat::next_frame().await;
                if !counter.write().tick(now) {
                    break;
                }
            }
            debug!("count-up finished at {:?}", counter.peek().values());
        });
    });

    counter
}
