//! Layout component wrapping all pages: head elements, header, footer.

use dioxus::prelude::*;

use super::header::Header;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Search submissions from the header; pages without a list omit it
    #[props(default)]
    pub on_search: Option<EventHandler<String>>,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("STOREFRONT_VERSION");
    let full_title = format!("{} - Storefront", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/storefront.css")
        }

        Header { on_search: props.on_search }
        main { class: "page", {props.children} }
        footer { class: "footer",
            small { class: "text-muted", "Storefront v{version}" }
        }
    }
}
