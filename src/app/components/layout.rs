//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.event-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.event-card { display: block; text-decoration: none; }
.event-card:hover { transform: scale(1.01); }
.spaces-ok { color: var(--pico-ins-color); }
.spaces-full { color: var(--pico-muted-color); }
.spaces-over { color: var(--pico-del-color); }
.todo-done { text-decoration: line-through; color: var(--pico-muted-color); }
.controls { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.controls button { margin: 0; padding: 0.5rem 1rem; }
small { color: var(--pico-muted-color); }
.nav-mobile { display: none; }
@media (max-width: 768px) {
    .nav-desktop { display: none; }
    .nav-mobile { display: flex; }
}
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Real World Events", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        header { class: "container",
            Nav {}
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "Real World Events v{version}" }
        }
    }
}
