//! Shared UI components for the Dioxus fullstack web UI.

pub mod event_card;
pub mod layout;
pub mod nav;

pub use event_card::EventCard;
pub use layout::Layout;
pub use nav::Nav;
