//! Calendar Event
//!
//! The stored entity and the inputs used to create and patch it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A calendar entry owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an event. The store validates it and assigns the id.
/// A missing `date` is stored as the Unix epoch.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub user_id: i64,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
}

impl NewEvent {
    pub fn new(user_id: i64, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            user_id,
            title: title.into(),
            date: Some(date),
        }
    }
}

/// Partial update of a stored event.
///
/// `None` keeps the stored value. A supplied `user_id` below 1 or an empty
/// `title` keeps the stored value as well, since a stored event can never
/// carry either.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl EventPatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Apply the patch onto a stored event, stamping `updated_at`.
    pub(crate) fn apply(self, stored: &Event, now: DateTime<Utc>) -> Event {
        Event {
            id: stored.id,
            user_id: self.user_id.filter(|id| *id >= 1).unwrap_or(stored.user_id),
            title: self
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| stored.title.clone()),
            date: self.date.unwrap_or(stored.date),
            created_at: stored.created_at,
            updated_at: now.max(stored.created_at),
        }
    }
}

/// Parse a body date: `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_body_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(super::calendar::start_of_day(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde helper for optional body dates; `null` and absence both map to `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_body_date(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid date '{}', expected YYYY-MM-DD or RFC 3339",
                raw
            ))
        }),
    }
}
