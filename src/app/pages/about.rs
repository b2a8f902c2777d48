use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn About() -> Element {
    rsx! {
        Layout {
            title: "About".to_string(),

            h1 { "About" }
            p { "A site for events to better the world." }
        }
    }
}
