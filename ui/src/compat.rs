//! Platform seam for the browser primitives the page reacts to: window
//! scrolling, element intersection and animation frames.
//!
//! Subscriptions are returned as handles that detach themselves on drop.
//! Raw samples are pushed into an unbounded channel so they can be applied
//! to signals from a task inside the Dioxus runtime.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("not supported on this platform")]
    Unsupported,
}

/// Settings for an intersection observer rooted at the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: &'static str,
}

/// Section entrance: 10% visible and at least 80px above the bottom edge.
pub const SECTION_REVEAL: ObserveOptions = ObserveOptions {
    threshold: 0.1,
    root_margin: "0px 0px -80px 0px",
};

/// Statistics panel: 30% visible.
pub const STATS_IN_VIEW: ObserveOptions = ObserveOptions {
    threshold: 0.3,
    root_margin: "0px",
};

/// One intersection change reported for the element with id `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::DomError;
    use super::Intersection;
    use super::ObserveOptions;
    use dioxus_logger::tracing::debug;
    use futures_channel::mpsc::UnboundedSender;
    use std::time::Duration;
    use tokio::sync::oneshot;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::IntersectionObserver;
    use web_sys::IntersectionObserverEntry;
    use web_sys::IntersectionObserverInit;
    use web_sys::Window;
    use web_time::Instant;

    const FRAME_FALLBACK: Duration = Duration::from_millis(16);

    fn js_error(value: JsValue) -> DomError {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }

    /// A `scroll` listener on the window, removed on drop.
    pub struct ScrollListener {
        window: Window,
        callback: Closure<dyn FnMut()>,
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }

    /// Sends the window's vertical scroll offset on every scroll event, plus
    /// once immediately.
    pub fn listen_scroll(tx: UnboundedSender<f64>) -> Result<ScrollListener, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;

        let callback = Closure::<dyn FnMut()>::new({
            let window = window.clone();
            let tx = tx.clone();
            move || {
                if let Ok(offset) = window.scroll_y() {
                    let _ = tx.unbounded_send(offset);
                }
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        if let Ok(offset) = window.scroll_y() {
            let _ = tx.unbounded_send(offset);
        }

        Ok(ScrollListener { window, callback })
    }

    /// An `IntersectionObserver`, disconnected on drop.
    pub struct IntersectionWatch {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl Drop for IntersectionWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Observes the elements with the given ids. Ids with no element in the
    /// document are skipped and never retried.
    pub fn watch_intersections(
        ids: &[&str],
        options: ObserveOptions,
        tx: UnboundedSender<Intersection>,
    ) -> Result<IntersectionWatch, DomError> {
        let document = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let _ = tx.unbounded_send(Intersection {
                        id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_error)?;

        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => observer.observe(&element),
                None => debug!("no element #{}, not observing it", id),
            }
        }

        Ok(IntersectionWatch {
            observer,
            _callback: callback,
        })
    }

    /// Resolves on the next animation frame and returns the time it fired.
    ///
    /// The frame callback frees itself once invoked, so dropping this future
    /// early leaves nothing dangling.
    pub async fn next_frame() -> Instant {
        let (tx, rx) = oneshot::channel::<()>();
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            let _ = tx.send(());
        });

        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(callback.unchecked_ref()).is_ok())
            .unwrap_or(false);

        if scheduled {
            let _ = rx.await;
        } else {
            sleep(FRAME_FALLBACK).await;
        }
        Instant::now()
    }

    async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::DomError;
    use super::Intersection;
    use super::ObserveOptions;
    use futures_channel::mpsc::UnboundedSender;
    use std::time::Duration;
    use web_time::Instant;

    /// Roughly one 60Hz frame.
    const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Window scroll events are not observable outside the browser.
    pub enum ScrollListener {}

    /// Element intersection is not observable outside the browser.
    pub enum IntersectionWatch {}

    pub fn listen_scroll(_tx: UnboundedSender<f64>) -> Result<ScrollListener, DomError> {
        Err(DomError::Unsupported)
    }

    pub fn watch_intersections(
        _ids: &[&str],
        _options: ObserveOptions,
        _tx: UnboundedSender<Intersection>,
    ) -> Result<IntersectionWatch, DomError> {
        Err(DomError::Unsupported)
    }

    pub async fn next_frame() -> Instant {
        sleep(FRAME_INTERVAL).await;
        Instant::now()
    }

    async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
