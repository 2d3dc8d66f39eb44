use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use futures::StreamExt;
use futures_channel::mpsc;

use crate::compat;
use crate::compat::DomError;
use crate::compat::IntersectionWatch;
use crate::compat::ObserveOptions;

/// Live "is on screen" flag for the element with id `id`.
///
/// Unlike [`use_reveal_on_scroll`](super::use_reveal_on_scroll) this follows
/// the element in and out of view. It reads `true` where intersections cannot
/// be observed.
pub fn use_in_view(id: &'static str, options: ObserveOptions) -> Signal<bool> {
    let mut in_view = use_signal(|| false);
    let watch = use_hook(|| Rc::new(RefCell::new(None::<IntersectionWatch>)));

    use_effect(move || {
        let (tx, mut rx) = mpsc::unbounded::<compat::Intersection>();
        match compat::watch_intersections(&[id], options, tx) {
            Ok(handle) => {
                watch.borrow_mut().replace(handle);
                spawn(async move {
                    while let Some(sample) = rx.next().await {
                        if *in_view.peek() != sample.is_intersecting {
                            in_view.set(sample.is_intersecting);
                        }
                    }
                });
            }
            Err(e) => {
                if e != DomError::Unsupported {
                    warn!("cannot observe #{}: {}", id, e);
                }
                in_view.set(true);
            }
        }
    });

    in_view
}
