// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod sections;
mod styles;
pub mod view_state;

use app_state::SiteState;
use compat::STATS_IN_VIEW;
use content::page;
use content::Region;
use content::STATS_PANEL_ID;
use hooks::use_count_up;
use hooks::use_in_view;
use hooks::use_reveal_on_scroll;
use hooks::use_scroll_threshold;
use sections::cta::Cta;
use sections::download::Download;
use sections::faq::Faq;
use sections::features::Features;
use sections::footer::Footer;
use sections::hero::Hero;
use sections::how_it_works::HowItWorks;
use sections::navbar::Navbar;
use sections::stats::Stats;
use sections::testimonials::Testimonials;
use styles::LANDING_CSS;
use view_state::AccordionState;
use view_state::MenuState;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let site = use_context_provider(SiteState::load);
    let title = format!("{} | Manga reader for Android", site.brand);

    rsx! {
        document::Title { "{title}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{LANDING_CSS}"
        }
        LandingPage {}
    }
}

/// Owns every piece of view state and hands each section only what it reads.
#[component]
fn LandingPage() -> Element {
    let site = use_context::<SiteState>();

    let scroll = use_scroll_threshold();
    let menu = use_signal(MenuState::default);
    let revealed = use_reveal_on_scroll();
    let stats_in_view = use_in_view(STATS_PANEL_ID, STATS_IN_VIEW);
    let counter = use_count_up(page::stat_values(), site.count_up, stats_in_view);
    let accordion = use_signal(AccordionState::default);

    let shown = |region: Region| revealed.read().is_revealed(region);

    rsx! {
        Navbar {
            scrolled: scroll.read().past_threshold(),
            menu,
        }
        main {
            Hero {}
            Features { revealed: shown(Region::Features) }
            Stats { counter }
            HowItWorks { revealed: shown(Region::How) }
            Testimonials { revealed: shown(Region::Testimonials) }
            Download { revealed: shown(Region::Download) }
            Faq {
                revealed: shown(Region::Faq),
                accordion,
            }
            Cta { revealed: shown(Region::Cta) }
            Footer {}
        }
    }
}
