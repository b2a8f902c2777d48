//! Fallback page for paths no route matches.

use dioxus::prelude::*;
use tracing::warn;

use crate::app::components::Layout;
use crate::app::Route;

/// Log the unmatched path once per mount, not on every render.
fn use_route_miss_warning(path: &str) {
    use_hook(|| warn!(%path, "No route matched"));
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_route_miss_warning(&path);

    rsx! {
        Layout {
            title: "Not found".to_string(),

            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::EventList {}, "Back to events" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct CountWarnings(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountWarnings {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if *meta.level() == Level::WARN && meta.target().ends_with("pages::not_found") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    thread_local! {
        static TICK: Cell<Option<Signal<u32>>> = const { Cell::new(None) };
    }

    #[component]
    fn MissHost() -> Element {
        let tick = use_signal(|| 0u32);
        use_hook(|| TICK.with(|t| t.set(Some(tick))));
        use_route_miss_warning("/no/such/page");
        rsx! { "{tick}" }
    }

    #[test]
    fn test_route_miss_logs_once_across_rerenders() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountWarnings(warnings.clone()));

        tracing::subscriber::with_default(subscriber, || {
            TICK.with(|t| t.set(None));
            let mut dom = VirtualDom::new(MissHost);
            dom.rebuild_in_place();

            let mut tick = TICK.with(|t| t.get()).unwrap();
            for n in 1..=3 {
                dom.in_runtime(|| tick.set(n));
                let edits = format!("{:?}", dom.render_immediate_to_vec());
                assert!(edits.contains(&format!("value: \"{n}\"")), "{edits}");
            }
        });

        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
