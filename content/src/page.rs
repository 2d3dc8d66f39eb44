//! Copy for every section of the page.

use crate::Icon;
use crate::Region;

/// One animated number in the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTarget {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

/// An onboarding step. Steps are numbered by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    /// CSS gradient used for the avatar circle.
    pub avatar_gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub region: Region,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.region.anchor()
    }
}

/// A footer column entry. `href` is either an in-page anchor or `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const HERO_TITLE_ACCENT: &str = "Manga, anywhere";
pub const HERO_TITLE: &str = "you happen to be";
pub const HERO_SUBTITLE: &str = "A fast, tidy library for your favourite series. Thousands of chapters, \
     crisp pages, offline reading and no clutter.";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", region: Region::Features },
    NavLink { label: "Get started", region: Region::How },
    NavLink { label: "Download", region: Region::Download },
    NavLink { label: "FAQ", region: Region::Faq },
];

pub const STATS: [StatTarget; 4] = [
    StatTarget { value: 5, suffix: "K+", label: "Readers" },
    StatTarget { value: 1, suffix: "K+", label: "Titles" },
    StatTarget { value: 99, suffix: "%", label: "Happy readers" },
    StatTarget { value: 24, suffix: "/7", label: "Support" },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::BookOpen,
        title: "Huge library",
        desc: "Hundreds of series in one place, with new chapters every month.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Private by default",
        desc: "No account required and no tracking. Your reading list stays yours.",
    },
    Feature {
        icon: Icon::Sparkles,
        title: "HD pages",
        desc: "Read at full resolution on phones and tablets alike.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Instant loading",
        desc: "A fast CDN and prefetching mean no waiting between pages.",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        icon: Icon::Download,
        title: "Install the app",
        desc: "Get it from the app store or download the APK directly to your device.",
    },
    Step {
        icon: Icon::Sparkles,
        title: "Open it",
        desc: "Launch MangaDock and pick the genres you like.",
    },
    Step {
        icon: Icon::Zap,
        title: "Start reading",
        desc: "Full access to the library, synced across your devices.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Finally a reader that opens straight to where I left off. Perfect after a long shift.",
        name: "Sandy",
        role: "Night-shift reader",
        initials: "SA",
        avatar_gradient: "linear-gradient(135deg, #8b5cf6, #9333ea)",
    },
    Testimonial {
        quote: "The interface still needs some polish, but this app clearly has a future. Good luck to the developer!",
        name: "Fiki",
        role: "App store reviewer",
        initials: "FI",
        avatar_gradient: "linear-gradient(135deg, #ec4899, #e11d48)",
    },
    Testimonial {
        quote: "Not every series is there yet, but for an early version it is already my daily reader.",
        name: "Mark",
        role: "App store reviewer",
        initials: "MK",
        avatar_gradient: "linear-gradient(135deg, #d946ef, #db2777)",
    },
];

pub const DOWNLOAD_BLURB: &str = "Install MangaDock on Android: through the app store for automatic \
     updates, or grab the APK and install it yourself.";

pub const FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "Is the app safe?",
        answer: "Yes. It collects no personal data and asks for no unusual permissions.",
    },
    FaqEntry {
        question: "Does it cost anything?",
        answer: "No, the app is completely free.",
    },
    FaqEntry {
        question: "Which devices are supported?",
        answer: "Android phones and tablets for now.",
    },
    FaqEntry {
        question: "How often is content added?",
        answer: "Monthly. New chapters and series appear as they are released.",
    },
    FaqEntry {
        question: "Is my data secure?",
        answer: "Yes. Reading progress is encrypted in transit and at rest.",
    },
    FaqEntry {
        question: "Does it work in other countries?",
        answer: "The service is available worldwide. The catalogue can differ by region due to licensing.",
    },
];

pub const CTA_TITLE: &str = "Ready to start?";
pub const CTA_BLURB: &str =
    "Join the news channel for release announcements, app updates and reading tips.";

pub const FOOTER_BLURB: &str =
    "A manga reader built for speed and privacy, with a library that keeps growing.";

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Product",
        links: &[
            FooterLink { label: "Features", href: "#features" },
            FooterLink { label: "Download", href: "#download" },
            FooterLink { label: "App", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            FooterLink { label: "FAQ", href: "#faq" },
            FooterLink { label: "Contact", href: "#" },
            FooterLink { label: "Help", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            FooterLink { label: "Privacy", href: "#" },
            FooterLink { label: "Terms", href: "#" },
        ],
    },
];

/// Targets of the statistics panel, in display order.
pub fn stat_values() -> Vec<u32> {
    STATS.iter().map(|s| s.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn stat_values_follow_stat_order() {
        assert_eq!(stat_values(), vec![5, 1, 99, 24]);
    }

    #[test]
    fn nav_links_point_at_regions() {
        for link in NAV_LINKS {
            let id = link.href().trim_start_matches('#').to_string();
            assert_eq!(Region::from_str(&id), Ok(link.region));
        }
    }

    #[test]
    fn footer_anchors_point_at_regions() {
        for column in FOOTER_COLUMNS {
            for link in column.links {
                if let Some(id) = link.href.strip_prefix('#').filter(|id| !id.is_empty()) {
                    assert!(Region::from_str(id).is_ok(), "dangling anchor {}", link.href);
                }
            }
        }
    }
}
