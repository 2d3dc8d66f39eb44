//! Hooks that keep the `view_state` models in sync with the browser.

mod use_count_up;
mod use_in_view;
mod use_reveal;
mod use_scroll_threshold;

pub use use_count_up::use_count_up;
pub use use_in_view::use_in_view;
pub use use_reveal::use_reveal_on_scroll;
pub use use_scroll_threshold::use_scroll_threshold;
