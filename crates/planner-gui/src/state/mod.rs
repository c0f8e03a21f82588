//! Application state.
//!
//! - [`AppState`]: root of all state, mutated only by handlers
//! - [`LoadState`]: progress of the roster load
//! - [`Settings`]: persisted preferences

mod app_state;
pub mod settings;

pub use app_state::{AppState, LoadState, Page};
pub use settings::{DisplaySettings, PlanningSettings, Settings};
