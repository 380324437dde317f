//! Rule document types with serde deserialization.
//!
//! Defines the type hierarchy for auto-reply rule documents:
//! - `TriggerRule`: one configured rule (keywords, schedule, story scoping)
//! - `ScheduleSpec`: closed sum type over the five schedule kinds
//!
//! Window bounds stay as raw `HH:MM` / `YYYY-MM-DD` strings in the schema;
//! they are parsed during evaluation so one malformed bound degrades to
//! "not active" instead of failing the whole snapshot.

mod rule;
mod schedule;

pub use rule::*;
pub use schedule::*;
