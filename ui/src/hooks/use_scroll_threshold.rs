use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use futures::StreamExt;
use futures_channel::mpsc;

use crate::compat;
use crate::compat::DomError;
use crate::compat::ScrollListener;
use crate::view_state::ScrollState;

/// Tracks whether the window is scrolled past the navbar threshold.
///
/// The signal only changes when the flag flips, not on every scroll event.
/// The listener is detached when the calling component unmounts.
pub fn use_scroll_threshold() -> Signal<ScrollState> {
    let mut state = use_signal(ScrollState::default);
    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));

    use_effect(move || {
        let (tx, mut rx) = mpsc::unbounded::<f64>();
        match compat::listen_scroll(tx) {
            Ok(handle) => {
                listener.borrow_mut().replace(handle);
                spawn(async move {
                    while let Some(offset) = rx.next().await {
                        let current = *state.peek();
                        let next = current.sampled(offset);
                        if next != current {
                            state.set(next);
                        }
                    }
                });
            }
            Err(DomError::Unsupported) => debug!("scroll tracking not available here"),
            Err(e) => warn!("failed to attach scroll listener: {}", e),
        }
    });

    state
}
