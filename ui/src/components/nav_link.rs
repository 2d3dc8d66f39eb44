use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub href: String,

    #[props(default)]
    pub class: String,

    /// Runs after the browser has been left to follow the anchor.
    #[props(optional)]
    pub on_navigate: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An in-page anchor. The default action is kept so the browser scrolls to
/// the target; `on_navigate` lets the caller react, e.g. close a menu.
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt: MouseEvent| {
                if let Some(handler) = &props.on_navigate {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
