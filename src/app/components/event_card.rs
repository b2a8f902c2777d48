//! Card linking an event in the list to its details page.

use dioxus::prelude::*;

use crate::app::events::Event;
use crate::app::Route;

#[component]
pub fn EventCard(event: Event) -> Element {
    let date = event.display_date();

    rsx! {
        Link {
            class: "event-card",
            to: Route::EventDetails { id: event.id.clone() },
            article {
                small { "@{event.time} on {date}" }
                h4 { "{event.title}" }
            }
        }
    }
}
