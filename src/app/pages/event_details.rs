//! Event details page component.
//!
//! Receives the `:id` path segment as a prop.

use dioxus::prelude::*;
use tracing::warn;

use crate::app::components::Layout;
use crate::app::events::find_event;
use crate::app::Route;

#[component]
pub fn EventDetails(id: String) -> Element {
    let event = match find_event(&id) {
        Ok(event) => event,
        Err(err) => {
            warn!(%err, "Event details requested for unknown event");
            return rsx! {
                Layout {
                    title: "Event not found".to_string(),

                    h1 { "Event not found" }
                    p { "{err}" }
                    Link { to: Route::EventList {}, "Back to events" }
                }
            };
        }
    };

    let date = event.display_date();

    rsx! {
        Layout {
            title: event.title.clone(),

            article {
                header {
                    h1 { "{event.title}" }
                    small { "@{event.time} on {date} · {event.location}" }
                }
                p { "{event.description}" }
                footer {
                    small { "Organized by {event.organizer} · {event.category}" }
                }
            }
        }
    }
}
