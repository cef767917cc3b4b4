//! Event Store Repository
//!
//! In-memory event collection guarded by a single exclusive lock.
//! Every operation holds the lock for its whole duration, reads included,
//! so no caller ever observes a partially applied mutation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::calendar::{same_day, DateRange};
use crate::domain::{Event, EventPatch, NewEvent};

use super::EventStoreError;

#[derive(Debug)]
struct Inner {
    events: BTreeMap<i64, Event>,
    next_id: i64,
}

/// Event Store for calendar events
#[derive(Debug)]
pub struct EventStore {
    inner: Mutex<Inner>,
}

impl EventStore {
    /// Create an empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                events: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and insert a new event, returning its id
    pub fn add_event(&self, new_event: NewEvent) -> Result<i64, EventStoreError> {
        if new_event.user_id < 1 {
            return Err(EventStoreError::validation("user_id must be greater than 0"));
        }
        if new_event.title.is_empty() {
            return Err(EventStoreError::validation("title must not be empty"));
        }
        // Undated events land on the Unix epoch
        let date = new_event.date.unwrap_or_default();

        let now = Utc::now();

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        inner.events.insert(
            id,
            Event {
                id,
                user_id: new_event.user_id,
                title: new_event.title,
                date,
                created_at: now,
                updated_at: now,
            },
        );

        tracing::debug!(event_id = id, user_id = new_event.user_id, "Event created");

        Ok(id)
    }

    /// Apply a patch to an existing event, returning the stored result
    pub fn update_event(&self, patch: EventPatch) -> Result<Event, EventStoreError> {
        let mut inner = self.inner.lock();

        let id = patch.id;
        let stored = inner
            .events
            .get(&id)
            .ok_or(EventStoreError::NotFound(id))?;

        let updated = patch.apply(stored, Utc::now());
        inner.events.insert(id, updated.clone());

        tracing::debug!(event_id = id, "Event updated");

        Ok(updated)
    }

    /// Remove an event
    pub fn delete_event(&self, id: i64) -> Result<(), EventStoreError> {
        let mut inner = self.inner.lock();

        if inner.events.remove(&id).is_none() {
            return Err(EventStoreError::NotFound(id));
        }

        tracing::debug!(event_id = id, "Event deleted");

        Ok(())
    }

    // =========================================================================
    // Queries (results ordered by id)
    // =========================================================================

    pub fn get_event(&self, id: i64) -> Option<Event> {
        self.inner.lock().events.get(&id).cloned()
    }

    /// Events on the same calendar day as `date`; time of day is ignored
    pub fn get_events_by_date(&self, date: DateTime<Utc>) -> Vec<Event> {
        self.inner
            .lock()
            .events
            .values()
            .filter(|event| same_day(&event.date, &date))
            .cloned()
            .collect()
    }

    /// Events dated within `[start, end]` inclusive
    pub fn get_events_for_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Event> {
        let range = DateRange::new(start, end);
        self.inner
            .lock()
            .events
            .values()
            .filter(|event| range.contains(&event.date))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
