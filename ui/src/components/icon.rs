//! Inline SVG line icons (24x24 grid, stroked with `currentColor`).

use content::Icon;
use dioxus::prelude::*;

fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Icon::Sparkles => &[
            "M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7z",
            "M5 3v4",
            "M3 5h4",
            "M19 17v4",
            "M17 19h4",
        ],
        Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        Icon::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        Icon::ChevronDown => &["M6 9l6 6 6-6"],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
        Icon::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Icon::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
        Icon::Globe => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
        ],
        Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
        Icon::Download => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        Icon::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
    }
}

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[props(default = 20)] size: u32,
    #[props(default)] class: String,
    #[props(default = false)] filled: bool,
) -> Element {
    let fill = if filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths(icon) {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_icon_has_a_path() {
        for icon in Icon::iter() {
            assert!(!paths(icon).is_empty(), "{:?} has no outline", icon);
            assert!(paths(icon).iter().all(|d| d.starts_with('M')));
        }
    }
}
