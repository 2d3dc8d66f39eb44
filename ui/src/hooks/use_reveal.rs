use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use content::Region;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use futures::StreamExt;
use futures_channel::mpsc;
use strum::IntoEnumIterator;

use crate::compat;
use crate::compat::DomError;
use crate::compat::IntersectionWatch;
use crate::compat::SECTION_REVEAL;
use crate::view_state::RevealMap;

/// Watches every [`Region`] and marks each one revealed the first time it
/// scrolls into view.
///
/// Where intersections cannot be observed every region is revealed at once,
/// so no section is left hidden.
pub fn use_reveal_on_scroll() -> Signal<RevealMap> {
    let mut revealed = use_signal(RevealMap::default);
    let watch = use_hook(|| Rc::new(RefCell::new(None::<IntersectionWatch>)));

    use_effect(move || {
        let ids: Vec<&'static str> = Region::iter().map(Region::id).collect();
        let (tx, mut rx) = mpsc::unbounded::<compat::Intersection>();

        match compat::watch_intersections(&ids, SECTION_REVEAL, tx) {
            Ok(handle) => {
                watch.borrow_mut().replace(handle);
                spawn(async move {
                    while let Some(sample) = rx.next().await {
                        let Ok(region) = Region::from_str(&sample.id) else {
                            continue;
                        };
                        if revealed.peek().would_reveal(region, sample.is_intersecting) {
                            revealed.write().observe(region, sample.is_intersecting);
                            debug!("revealed #{}", region);
                        }
                    }
                });
            }
            Err(e) => {
                if e != DomError::Unsupported {
                    warn!("section reveal unavailable, showing everything: {}", e);
                }
                revealed.write().reveal_all(Region::iter());
            }
        }
    });

    revealed
}
