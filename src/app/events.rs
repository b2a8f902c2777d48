//! In-memory event catalogue shown by the event list and details pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// A single listed event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    /// Free-form start time as shown to users (e.g. "12:00")
    pub time: String,
    pub organizer: String,
}

impl Event {
    /// Date formatted for cards and headers, e.g. "January 28, 2027".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no event with id {id}")]
    NotFound { id: String },
}

static CATALOG: LazyLock<Vec<Event>> = LazyLock::new(|| {
    vec![
        event(
            "5928101",
            "animal welfare",
            "Cat Adoption Day",
            "Find your new feline friend at this event.",
            "Meow Town",
            const { date(2027, 1, 28) },
            "12:00",
            "Kat Laydee",
        ),
        event(
            "4582797",
            "food",
            "Community Gardening",
            "Join us as we tend to the community edible plants.",
            "Flora City",
            const { date(2027, 3, 14) },
            "10:00",
            "Fern Pollin",
        ),
        event(
            "8419988",
            "sustainability",
            "Beach Cleanup",
            "Help pick up trash along the shore.",
            "Playa Del Carmen",
            const { date(2027, 7, 22) },
            "11:00",
            "Carey Wales",
        ),
    ]
});

/// Calendar date for catalogue entries. Used in `const` blocks, so an
/// impossible date fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid catalogue date"),
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    category: &str,
    title: &str,
    description: &str,
    location: &str,
    date: NaiveDate,
    time: &str,
    organizer: &str,
) -> Event {
    Event {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        date,
        time: time.to_string(),
        organizer: organizer.to_string(),
    }
}

/// All listed events, in display order.
pub fn catalog() -> &'static [Event] {
    &CATALOG
}

/// Look up an event by id.
pub fn find_event(id: &str) -> Result<&'static Event, CatalogError> {
    catalog()
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
}
