//! Dioxus fullstack page components, one per route.

mod about;
mod capacity;
mod event_details;
mod event_list;
mod not_found;
mod todo;

pub use about::About;
pub use capacity::{Capacity, CapacityComposable, CapacityReactive};
pub use event_details::EventDetails;
pub use event_list::EventList;
pub use not_found::NotFound;
pub use todo::Todo;
