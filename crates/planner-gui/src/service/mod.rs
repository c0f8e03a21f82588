//! Services for background tasks.
//!
//! These services provide async functions for use with Iced's `Task::perform` pattern.

pub mod roster;

pub use roster::{RosterSource, load_roster};
