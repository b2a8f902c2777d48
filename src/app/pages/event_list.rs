//! Event list page component.

use dioxus::prelude::*;

use crate::app::components::{EventCard, Layout};
use crate::app::events::catalog;

/// Event list page: one card per catalogue event.
#[component]
pub fn EventList() -> Element {
    let events = catalog();

    let content = if events.is_empty() {
        rsx! {
            article { "No events scheduled." }
        }
    } else {
        rsx! {
            div { class: "event-grid",
                for event in events {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Events".to_string(),

            h1 { "Events For Good" }
            {content}
        }
    }
}
