//! Event Store module
//!
//! Volatile in-memory storage for calendar events.
//! The collection is rebuilt empty on every process start.

mod error;
mod repository;

pub use error::EventStoreError;
pub use repository::EventStore;
