//! Navigation bar with a collapsible menu for narrow screens.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation bar. Highlights the link of the current route.
#[component]
pub fn Nav() -> Element {
    let mut menu_open = use_signal(|| false);
    let current = use_route::<Route>();

    let link_class = |name: &str| {
        if current.route_name() == name {
            "contrast"
        } else {
            "secondary"
        }
    };

    let links: Vec<(Route, &str, &str)> = [
        (Route::EventList {}, "Events"),
        (Route::About {}, "About"),
        (Route::Capacity {}, "Capacity"),
        (Route::CapacityReactive {}, "Reactive"),
        (Route::CapacityComposable {}, "Composable"),
        (Route::Todo {}, "Todo"),
    ]
    .into_iter()
    .map(|(route, label)| {
        let class = link_class(route.route_name());
        (route, label, class)
    })
    .collect();

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::EventList {}, strong { "Real World Events" } }
                }
            }
            // Desktop navigation
            ul { class: "nav-desktop",
                for (route, label, class) in links.clone() {
                    li {
                        Link {
                            class: class.to_string(),
                            to: route,
                            "{label}"
                        }
                    }
                }
            }
            // Mobile menu button
            ul { class: "nav-mobile",
                li {
                    button {
                        class: "outline",
                        r#type: "button",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }

        if menu_open() {
            aside { id: "mobile-menu",
                nav {
                    ul {
                        for (route, label, class) in links {
                            li {
                                Link {
                                    class: class.to_string(),
                                    to: route,
                                    onclick: move |_| menu_open.set(false),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
