use content::page::DOWNLOAD_BLURB;
use content::Icon;
use content::Region;
use dioxus::prelude::*;

use crate::app_state::SiteState;
use crate::components::icon::IconGlyph;
use crate::components::primitives::ButtonLink;
use crate::components::primitives::ButtonVariant;
use crate::components::primitives::IconBadge;
use crate::components::primitives::RevealSection;

#[component]
pub fn Download(revealed: bool) -> Element {
    let site = use_context::<SiteState>();
    let links = &site.links;
    rsx! {
        RevealSection {
            region: Region::Download,
            revealed,
            inner_class: "container tight centered",
            IconBadge { icon: Icon::Smartphone, class: "large" }
            h2 { class: "section-title", "Download the app" }
            p { class: "download-blurb", "{DOWNLOAD_BLURB}" }
            div {
                class: "download-actions",
                ButtonLink {
                    href: links.store_url.clone(),
                    external: true,
                    class: "btn-large btn-glow",
                    "Get it on the app store"
                    IconGlyph { icon: Icon::ArrowRight }
                }
                ButtonLink {
                    href: links.apk_url.clone(),
                    variant: ButtonVariant::Outline,
                    download: links.apk_file_name.clone(),
                    "Download APK"
                    IconGlyph { icon: Icon::Download }
                }
            }
        }
    }
}
