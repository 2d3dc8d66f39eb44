//! Reusable, lifetime-free building blocks shared by the page sections.
//! Styling lives in the stylesheet rendered by `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use content::Region;
use dioxus::prelude::*;

use crate::components::icon::IconGlyph;
use content::Icon;

//=============================================================================
// Layout Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct RevealSectionProps {
    region: Region,
    /// Whether the region has entered the viewport yet.
    revealed: bool,
    #[props(default)]
    class: String,
    #[props(default)]
    inner_class: String,
    children: Element,
}

/// A page section that slides in once `revealed` is set.
/// Renders `<section id=region>` around a `.section-enter` wrapper.
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let visible = if props.revealed { "visible" } else { "" };
    rsx! {
        section {
            id: props.region.id(),
            class: "section {props.class}",
            div {
                class: "section-enter {visible} {props.inner_class}",
                {props.children}
            }
        }
    }
}

/// Centered section title with a muted subtitle.
#[component]
pub fn SectionHeading(title: String, #[props(optional)] subtitle: Option<String>) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        if let Some(subtitle) = subtitle {
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

/// A glassy card. Wraps content in an `<article>` element.
#[component]
pub fn Card(#[props(default)] class: String, #[props(default)] style: String, children: Element) -> Element {
    rsx! {
        article { class: "card {class}", style: "{style}", {children} }
    }
}

/// Rounded square holding an icon.
#[component]
pub fn IconBadge(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "icon-badge {class}",
            IconGlyph { icon, size: 24 }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonVariant {
    /// Violet-to-pink gradient.
    #[default]
    Primary,
    /// Transparent with a thin border.
    Outline,
    /// White, for use on the gradient banner.
    Light,
}

impl ButtonVariant {
    fn to_class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Light => "btn btn-light",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonLinkProps {
    href: String,
    children: Element,
    #[props(default)]
    variant: ButtonVariant,
    /// Open in a new tab without giving it a handle on this one.
    #[props(default = false)]
    external: bool,
    /// File name for the `download` attribute.
    #[props(optional)]
    download: Option<String>,
    #[props(default)]
    class: String,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
}

/// A link styled as a button.
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let class_str = format!("{} {}", props.variant.to_class(), props.class);
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    rsx! {
        a {
            class: "{class_str}",
            href: "{props.href}",
            target,
            rel,
            "download": props.download.clone(),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: EventHandler<()>,
}

/// One collapsible question. Open/closed state is owned by the caller so a
/// group of items can keep a single entry open.
pub fn AccordionItem(props: AccordionItemProps) -> Element {
    let open = if props.is_open { "open" } else { "" };
    let chevron = if props.is_open { "chevron-open" } else { "" };
    rsx! {
        div {
            class: "accordion-item",
            button {
                r#type: "button",
                class: "accordion-toggle",
                "aria-expanded": if props.is_open { "true" } else { "false" },
                onclick: move |evt| {
                    evt.prevent_default();
                    props.on_toggle.call(());
                },
                "{props.question}"
                IconGlyph { icon: Icon::ChevronDown, class: "chevron {chevron}" }
            }
            div {
                class: "accordion-content {open}",
                "aria-hidden": if props.is_open { "false" } else { "true" },
                p { "{props.answer}" }
            }
        }
    }
}
