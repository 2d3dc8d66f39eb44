//! Static page content and build-time site configuration for the MangaDock
//! landing page. Nothing in this crate touches the DOM, so it builds for any
//! target.

pub mod config;
pub mod page;

pub use config::ConfigError;
pub use config::SiteConfig;
pub use config::SiteLinks;

/// DOM id of the statistics panel, observed separately from the regions.
pub const STATS_PANEL_ID: &str = "stats";

/// A named page section that fades in the first time it scrolls into view.
///
/// The string form of each variant is the element id of the section.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Features,
    How,
    Testimonials,
    Download,
    Faq,
    Cta,
}

impl Region {
    /// The element id (and in-page anchor) of this region.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// `#id` form used by navigation links.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Icons drawn by the page. The ui crate maps each one to inline SVG.
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::EnumIter)]
pub enum Icon {
    BookOpen,
    Shield,
    Sparkles,
    Zap,
    Star,
    ChevronDown,
    Menu,
    Close,
    Github,
    Send,
    Globe,
    ArrowRight,
    Download,
    Smartphone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn region_ids_round_trip() {
        for region in Region::iter() {
            assert_eq!(Region::from_str(region.id()), Ok(region));
        }
        assert_eq!(Region::How.id(), "how");
        assert_eq!(Region::Cta.anchor(), "#cta");
    }

    #[test]
    fn stats_panel_is_not_a_region() {
        assert!(Region::from_str(STATS_PANEL_ID).is_err());
    }
}
