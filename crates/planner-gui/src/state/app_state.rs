//! Application-level state.

use std::path::PathBuf;

use chrono::NaiveDate;
use planner_model::{
    Employee, MonthYear, PlanningGrid, RecapView, Roster, ScheduleStore, StatusChange,
    StatusEditor, WeekNavigator, WeekWindow,
};

use super::Settings;
use crate::error::GuiError;

/// Page shown below the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Planning,
    Recap,
}

impl Page {
    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Weekly planning",
            Self::Recap => "Monthly recap",
        }
    }
}

/// Progress of the roster load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(GuiError),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Persisted preferences.
    pub settings: Settings,
    /// Where settings are saved; `None` keeps changes in memory only.
    pub settings_path: Option<PathBuf>,
    /// Current page.
    pub page: Page,
    /// Roster load progress.
    pub load: LoadState,
    /// Identifies the most recent load; older results are ignored.
    pub load_generation: u64,
    /// Date the "Today" button returns to.
    pub today: NaiveDate,
    /// Week shown in the planning grid.
    pub navigator: WeekNavigator,
    /// Weekly schedules.
    pub store: ScheduleStore,
    /// Status picker state.
    pub editor: StatusEditor,
    /// Recap figures, as supplied with the roster.
    pub employees: Vec<Employee>,
    /// Month shown on the recap page.
    pub recap_month: MonthYear,
    /// Dismissible error banner.
    pub error: Option<GuiError>,
    /// Most recent applied status change.
    pub last_change: Option<StatusChange>,
}

impl AppState {
    /// Fresh state in [`LoadState::Loading`] with no roster.
    pub fn new(settings: Settings, settings_path: Option<PathBuf>, today: NaiveDate) -> Self {
        let navigator = WeekNavigator::new(today, settings.planning.week_anchor);
        Self {
            settings,
            settings_path,
            page: Page::default(),
            load: LoadState::Loading,
            load_generation: 0,
            today,
            navigator,
            store: ScheduleStore::default(),
            editor: StatusEditor::default(),
            employees: Vec::new(),
            recap_month: MonthYear::of(today),
            error: None,
            last_change: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    /// Mark a new load as started and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load = LoadState::Loading;
        self.editor.dismiss();
        self.load_generation
    }

    /// Replace schedules and recap figures with a freshly loaded roster.
    pub fn apply_roster(&mut self, roster: Roster) {
        self.store = roster.store();
        self.employees = roster.employees;
        self.editor.dismiss();
        self.last_change = None;
        self.load = LoadState::Ready;
    }

    /// Week currently displayed.
    pub fn window(&self) -> WeekWindow {
        self.navigator.window()
    }

    /// Planning grid for the displayed week.
    pub fn grid(&self) -> PlanningGrid {
        PlanningGrid::project(&self.window(), &self.store, &self.editor)
    }

    /// Recap table for the selected month.
    pub fn recap(&self) -> RecapView {
        RecapView::project(&self.employees, self.recap_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        AppState::new(Settings::default(), None, today)
    }

    #[test]
    fn starts_loading_on_the_current_week() {
        let state = state();
        assert_eq!(state.load, LoadState::Loading);
        assert_eq!(
            state.window().start,
            NaiveDate::from_ymd_opt(2026, 10, 11).expect("valid date")
        );
        assert_eq!(state.recap_month, MonthYear::new(2026, 10).expect("valid month"));
        assert!(state.grid().rows.is_empty());
    }

    #[test]
    fn begin_load_bumps_generation_and_closes_editor() {
        let mut state = state();
        state.apply_roster(Roster::demo());
        state.editor.open(0, 0);

        let first = state.begin_load();
        let second = state.begin_load();
        assert_eq!(second, first + 1);
        assert_eq!(state.load, LoadState::Loading);
        assert!(!state.editor.is_open());
    }

    #[test]
    fn apply_roster_fills_grid_and_recap() {
        let mut state = state();
        state.apply_roster(Roster::demo());
        assert!(state.is_ready());
        assert_eq!(state.grid().rows.len(), 5);
        assert_eq!(state.recap().rows.len(), 5);
    }
}
