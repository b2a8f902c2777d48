//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! state models the pages are built on.

use dioxus::prelude::*;

pub mod components;
pub mod event_space;
pub mod events;
pub mod pages;
pub mod todo_list;

use pages::{
    About, Capacity, CapacityComposable, CapacityReactive, EventDetails, EventList, NotFound,
    Todo,
};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes. The router tries them top to bottom.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    EventList {},
    #[route("/event/:id")]
    EventDetails { id: String },
    #[route("/about")]
    About {},
    #[route("/composition-api")]
    Capacity {},
    #[route("/composition-api-2")]
    CapacityReactive {},
    #[route("/composition-api-3")]
    CapacityComposable {},
    #[route("/todo")]
    Todo {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Identifier of the route table entry this route came from.
    pub fn route_name(&self) -> &'static str {
        match self {
            Route::EventList {} => "EventList",
            Route::EventDetails { .. } => "EventDetails",
            Route::About {} => "About",
            Route::Capacity {} => "Capacity",
            Route::CapacityReactive {} => "CapacityReactive",
            Route::CapacityComposable {} => "CapacityComposable",
            Route::Todo {} => "Todo",
            Route::NotFound { .. } => "NotFound",
        }
    }
}

/// Descriptor of one declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    /// Whether captured path segments are passed to the page as props
    pub props: bool,
}

/// Declared routes in match order. The catch-all `NotFound` route is not
/// listed; it only answers paths none of these match.
#[rustfmt::skip]
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "EventList", props: false },
    RouteEntry { path: "/event/:id", name: "EventDetails", props: true },
    RouteEntry { path: "/about", name: "About", props: false },
    RouteEntry { path: "/composition-api", name: "Capacity", props: false },
    RouteEntry { path: "/composition-api-2", name: "CapacityReactive", props: false },
    RouteEntry { path: "/composition-api-3", name: "CapacityComposable", props: false },
    RouteEntry { path: "/todo", name: "Todo", props: false },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|e| panic!("{path} did not parse: {e}"))
    }

    #[test]
    fn test_every_declared_path_resolves_to_its_name() {
        for entry in ROUTE_TABLE {
            let path = entry.path.replace(":id", "1");
            assert_eq!(parse(&path).route_name(), entry.name, "path {path}");
        }
    }

    #[test]
    fn test_event_details_forwards_id() {
        assert_eq!(
            parse("/event/42"),
            Route::EventDetails {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        match parse("/no/such/page") {
            Route::NotFound { segments } => assert_eq!(segments, ["no", "such", "page"]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_route_display_round_trips_path() {
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::CapacityComposable {}.to_string(), "/composition-api-3");
        assert_eq!(
            Route::EventDetails {
                id: "5928101".to_string()
            }
            .to_string(),
            "/event/5928101"
        );
    }

    /// One value of every route variant. The match makes adding a variant
    /// without listing it here a compile error.
    fn every_route() -> Vec<Route> {
        let routes = vec![
            Route::EventList {},
            Route::EventDetails { id: "1".to_string() },
            Route::About {},
            Route::Capacity {},
            Route::CapacityReactive {},
            Route::CapacityComposable {},
            Route::Todo {},
            Route::NotFound { segments: vec!["missing".to_string()] },
        ];
        for route in &routes {
            match route {
                Route::EventList {}
                | Route::EventDetails { .. }
                | Route::About {}
                | Route::Capacity {}
                | Route::CapacityReactive {}
                | Route::CapacityComposable {}
                | Route::Todo {}
                | Route::NotFound { .. } => {}
            }
        }
        routes
    }

    #[test]
    fn test_every_route_variant_is_in_the_table() {
        let declared: Vec<_> = every_route()
            .into_iter()
            .filter(|r| !matches!(r, Route::NotFound { .. }))
            .collect();
        assert_eq!(declared.len(), ROUTE_TABLE.len());

        for route in declared {
            let entry = ROUTE_TABLE
                .iter()
                .find(|e| e.name == route.route_name())
                .unwrap_or_else(|| panic!("{} missing from ROUTE_TABLE", route.route_name()));
            assert_eq!(route.to_string(), entry.path.replace(":id", "1"));
        }
    }

    #[test]
    fn test_only_event_details_forwards_props() {
        let forwarding: Vec<_> = ROUTE_TABLE.iter().filter(|e| e.props).collect();
        assert_eq!(forwarding.len(), 1);
        assert_eq!(forwarding[0].name, "EventDetails");
    }
}
