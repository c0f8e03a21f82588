//! Regulation Planner - Desktop GUI Application
//!
//! Weekly roster editor for a regulation and transport team, with a
//! read-only monthly recap. Built with Iced 0.14.0 using the Elm
//! architecture (State, Message, Update, View).
//!
//! # Module Structure
//!
//! - [`app`]: the Iced application (new, update, view, subscription)
//! - [`handler`]: message handlers by page, plus roster loading
//! - [`message`]: message hierarchy
//! - [`state`]: application state and persisted settings
//! - [`service`]: async services run through `Task::perform`
//! - [`view`]: pure view functions
//! - [`component`]: reusable widgets
//! - [`theme`]: theme mode, status colors, styles
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: user-facing errors

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
pub use message::Message;
pub use state::{AppState, LoadState, Page, Settings};
