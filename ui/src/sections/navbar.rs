//=============================================================================
// File: src/sections/navbar.rs
//=============================================================================
use content::page::NAV_LINKS;
use content::Icon;
use content::Region;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state::SiteState;
use crate::components::icon::IconGlyph;
use crate::components::nav_link::NavLink;
use crate::view_state::MenuState;

/// Brand mark linking to the top of the page.
#[component]
pub fn BrandMark() -> Element {
    let site = use_context::<SiteState>();
    rsx! {
        a {
            href: "#",
            class: "brand",
            div {
                class: "brand-logo",
                IconGlyph { icon: Icon::BookOpen }
            }
            "{site.brand}"
        }
    }
}

/// Fixed header. Transparent at the top of the page, frosted once `scrolled`.
#[component]
pub fn Navbar(scrolled: bool, mut menu: Signal<MenuState>) -> Element {
    let header_class = if scrolled { "navbar scrolled" } else { "navbar" };
    let is_open = menu.read().is_open();
    let menu_class = if is_open { "mobile-menu open" } else { "mobile-menu" };

    let close_menu = move |_: MouseEvent| {
        menu.write().navigated();
        debug!("mobile menu closed by navigation");
    };

    rsx! {
        header {
            class: "{header_class}",
            nav {
                class: "navbar-inner",
                BrandMark {}
                div {
                    class: "nav-links",
                    for link in NAV_LINKS {
                        NavLink {
                            key: "{link.href()}",
                            href: link.href(),
                            class: "nav-link",
                            "{link.label}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "menu-button",
                    "aria-label": "Menu",
                    "aria-expanded": if is_open { "true" } else { "false" },
                    onclick: move |_| menu.write().toggle(),
                    if is_open {
                        IconGlyph { icon: Icon::Close, size: 24 }
                    } else {
                        IconGlyph { icon: Icon::Menu, size: 24 }
                    }
                }
            }
            div {
                class: "{menu_class}",
                div {
                    class: "mobile-menu-inner",
                    for link in NAV_LINKS {
                        NavLink {
                            key: "{link.href()}",
                            href: link.href(),
                            class: "mobile-link",
                            on_navigate: close_menu,
                            "{link.label}"
                        }
                    }
                    NavLink {
                        href: Region::Download.anchor(),
                        class: "btn btn-primary mobile-download",
                        on_navigate: close_menu,
                        "Download"
                        IconGlyph { icon: Icon::Download, size: 16 }
                    }
                }
            }
        }
    }
}
