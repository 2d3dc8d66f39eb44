use chrono::Datelike;
use content::page::FOOTER_BLURB;
use content::page::FOOTER_COLUMNS;
use content::Icon;
use dioxus::prelude::*;

use crate::app_state::SiteState;
use crate::components::icon::IconGlyph;
use crate::sections::navbar::BrandMark;

#[component]
pub fn Footer() -> Element {
    let site = use_context::<SiteState>();
    let year = chrono::Local::now().year();
    let socials = [
        (site.links.source_url.clone(), "Source code", Icon::Github),
        (site.links.chat_url.clone(), "Chat", Icon::Send),
        (site.links.video_url.clone(), "Videos", Icon::Globe),
    ];

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container",
                div {
                    class: "footer-top",
                    div {
                        class: "footer-brand",
                        BrandMark {}
                        p { class: "muted small", "{FOOTER_BLURB}" }
                        div {
                            class: "socials",
                            for (href, label, icon) in socials {
                                a {
                                    key: "{label}",
                                    href: "{href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": "{label}",
                                    IconGlyph { icon }
                                }
                            }
                        }
                    }
                    div {
                        class: "footer-columns",
                        for column in FOOTER_COLUMNS {
                            div {
                                key: "{column.heading}",
                                h4 { "{column.heading}" }
                                ul {
                                    for link in column.links {
                                        li {
                                            key: "{link.label}",
                                            a { href: "{link.href}", "{link.label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "footer-bottom",
                    "© {year} {site.brand}. All rights reserved."
                }
            }
        }
    }
}
