//! Keyboard shortcuts.
//!
//! - Escape: close the status picker, or the error banner
//! - Left / Right: previous / next week on the planning page
//! - Shift+Left / Shift+Right: previous / next month

use iced::Task;
use iced::keyboard::{self, key::Named};

use super::App;
use crate::handler::{MessageHandler, PlanningHandler, RecapHandler};
use crate::message::{Message, PlanningMessage, RecapMessage};
use crate::state::Page;

impl App {
    /// Handle a global key press.
    pub(super) fn handle_key_press(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if let keyboard::Key::Named(Named::Escape) = key.as_ref() {
            if self.state.editor.is_open() {
                self.state.editor.dismiss();
            } else {
                self.state.error = None;
            }
            return Task::none();
        }

        if !self.state.is_ready() || modifiers.command() || modifiers.alt() {
            return Task::none();
        }

        let backward = match key.as_ref() {
            keyboard::Key::Named(Named::ArrowLeft) => true,
            keyboard::Key::Named(Named::ArrowRight) => false,
            _ => return Task::none(),
        };

        match (self.state.page, modifiers.shift(), backward) {
            (Page::Planning, false, true) => {
                PlanningHandler.handle(&mut self.state, PlanningMessage::PreviousWeek)
            }
            (Page::Planning, false, false) => {
                PlanningHandler.handle(&mut self.state, PlanningMessage::NextWeek)
            }
            (Page::Planning, true, true) => {
                PlanningHandler.handle(&mut self.state, PlanningMessage::PreviousMonth)
            }
            (Page::Planning, true, false) => {
                PlanningHandler.handle(&mut self.state, PlanningMessage::NextMonth)
            }
            (Page::Recap, _, true) => {
                RecapHandler.handle(&mut self.state, RecapMessage::PreviousMonth)
            }
            (Page::Recap, _, false) => {
                RecapHandler.handle(&mut self.state, RecapMessage::NextMonth)
            }
        }
    }
}
