//! calendar_api Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod event_store;

pub use config::{Config, ConfigError};
pub use domain::{DateRange, Event, EventPatch, NewEvent};
pub use error::{AppError, AppResult};
pub use event_store::{EventStore, EventStoreError};
