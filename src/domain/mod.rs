//! Domain module
//!
//! Calendar events and date window calculations.

pub mod calendar;
pub mod event;

pub use calendar::DateRange;
pub use event::{Event, EventPatch, NewEvent};
