//! Planning grid message handler.

use iced::Task;
use planner_model::WeekNavigator;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::{Message, PlanningMessage};
use crate::state::AppState;

/// Handles week navigation and status editing.
pub struct PlanningHandler;

impl MessageHandler<PlanningMessage> for PlanningHandler {
    fn handle(&self, state: &mut AppState, msg: PlanningMessage) -> Task<Message> {
        match msg {
            PlanningMessage::PreviousWeek => {
                state.editor.dismiss();
                state.navigator.previous_week();
            }
            PlanningMessage::NextWeek => {
                state.editor.dismiss();
                state.navigator.next_week();
            }
            PlanningMessage::PreviousMonth => {
                state.editor.dismiss();
                state.navigator.previous_month();
            }
            PlanningMessage::NextMonth => {
                state.editor.dismiss();
                state.navigator.next_month();
            }
            PlanningMessage::Today => {
                state.editor.dismiss();
                state.navigator = WeekNavigator::new(state.today, state.navigator.anchor());
            }
            PlanningMessage::CellClicked {
                employee_index,
                day_index,
            } => {
                if state.is_ready() {
                    state.editor.open(employee_index, day_index);
                }
            }
            PlanningMessage::StatusSelected(status) => {
                match state.editor.select(status, &mut state.store) {
                    None => {}
                    Some(Ok(change)) => {
                        let name = state
                            .store
                            .schedule(change.employee_index)
                            .map(|s| s.name.as_str())
                            .unwrap_or_default();
                        tracing::info!(
                            employee = name,
                            day = change.day_index,
                            from = change.previous.as_str(),
                            to = change.status.as_str(),
                            revision = state.store.revision(),
                            "Status changed"
                        );
                        state.last_change = Some(change);
                    }
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "Status update rejected");
                        state.error = Some(GuiError::from(err));
                    }
                }
            }
            PlanningMessage::PickerDismissed => state.editor.dismiss(),
        }
        Task::none()
    }
}
