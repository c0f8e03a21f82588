//! Monthly recap message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, RecapMessage};
use crate::state::AppState;

/// Handles the recap page's month selection.
///
/// Only the (month, year) label changes; the figures are the ones supplied
/// with the roster.
pub struct RecapHandler;

impl MessageHandler<RecapMessage> for RecapHandler {
    fn handle(&self, state: &mut AppState, msg: RecapMessage) -> Task<Message> {
        state.recap_month = match msg {
            RecapMessage::PreviousMonth => state.recap_month.previous(),
            RecapMessage::NextMonth => state.recap_month.next(),
        };
        tracing::debug!(month = %state.recap_month.label(), "Recap month selected");
        Task::none()
    }
}
