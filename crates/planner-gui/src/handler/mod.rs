//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one page's message type, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! match message {
//!     Message::Planning(msg) => PlanningHandler.handle(&mut self.state, msg),
//!     Message::Recap(msg) => RecapHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```
//!
//! Roster loading spans several messages and lives in [`roster`].

mod planning;
mod recap;
pub mod roster;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use planning::PlanningHandler;
pub use recap::RecapHandler;

/// Handles one message type against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
