//! Event-capacity demo pages.
//!
//! All three pages build on [`use_event_space`]; each mounted component gets
//! its own counter, so leaving a page and coming back starts from scratch.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::event_space::{use_event_space, EventSpace};

/// CSS class for the spaces-left figure.
fn spaces_class(spaces_left: i64) -> &'static str {
    match spaces_left {
        n if n > 0 => "spaces-ok",
        0 => "spaces-full",
        _ => "spaces-over",
    }
}

/// Capacity and spaces left with a button to add a space.
#[component]
fn CapacityPanel(space: EventSpace) -> Element {
    let mut space = space;
    let spaces_left = space.spaces_left();

    rsx! {
        p { "Capacity: " strong { "{space.capacity()}" } }
        p {
            "Spaces left: "
            strong { class: spaces_class(spaces_left), "{spaces_left}" }
        }
        div { class: "controls",
            button { onclick: move |_| space.increase_capacity(), "Increase Capacity" }
        }
    }
}

/// `/composition-api`: capacity counter only.
#[component]
pub fn Capacity() -> Element {
    let space = use_event_space();

    rsx! {
        Layout {
            title: "Capacity".to_string(),

            h1 { "Capacity" }
            article {
                CapacityPanel { space }
            }
        }
    }
}

/// `/composition-api-2`: capacity counter plus the attendee list.
#[component]
pub fn CapacityReactive() -> Element {
    let space = use_event_space();
    let attending = space.attending();

    rsx! {
        Layout {
            title: "Capacity (reactive)".to_string(),

            h1 { "Capacity" }
            article {
                CapacityPanel { space }
                h4 { "Attending" }
                ul {
                    for (i, name) in attending.into_iter().enumerate() {
                        li { key: "{i}", "{name}" }
                    }
                }
            }
        }
    }
}

/// One independently owned event space.
#[component]
fn IsolatedEvent(label: String) -> Element {
    let space = use_event_space();
    let attending = space.attending().join(", ");

    rsx! {
        article {
            header { strong { "{label}" } }
            CapacityPanel { space }
            small { "{attending}" }
        }
    }
}

/// `/composition-api-3`: two components each mounting the hook, with
/// counters that move independently.
#[component]
pub fn CapacityComposable() -> Element {
    rsx! {
        Layout {
            title: "Capacity (composable)".to_string(),

            h1 { "Capacity" }
            p { "Each card owns its own event space." }
            div { class: "grid",
                IsolatedEvent { label: "Morning session".to_string() }
                IsolatedEvent { label: "Evening session".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static HOSTED: Cell<Option<EventSpace>> = const { Cell::new(None) };
    }

    #[component]
    fn PanelHost() -> Element {
        let space = use_event_space();
        use_hook(|| HOSTED.with(|h| h.set(Some(space))));
        rsx! {
            CapacityPanel { space }
        }
    }

    #[test]
    fn test_panel_rerenders_after_increase() {
        HOSTED.with(|h| h.set(None));

        let mut dom = VirtualDom::new(PanelHost);
        dom.rebuild_in_place();

        let mut space = HOSTED.with(|h| h.get()).unwrap();
        dom.in_runtime(|| space.increase_capacity());

        let edits = format!("{:?}", dom.render_immediate_to_vec());
        assert!(edits.contains(r#"value: "4""#), "{edits}");
        assert!(edits.contains(r#"value: "1""#), "{edits}");
        assert!(edits.contains(r#"Text("spaces-ok")"#), "{edits}");
    }

    #[test]
    fn test_spaces_class() {
        assert_eq!(spaces_class(2), "spaces-ok");
        assert_eq!(spaces_class(0), "spaces-full");
        assert_eq!(spaces_class(-1), "spaces-over");
    }
}
