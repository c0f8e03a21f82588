//! Behavioural tests for the planning grid building blocks.

use chrono::{Datelike, NaiveDate, Weekday};
use planner_model::{
    EmployeeSchedule, PlanningGrid, Roster, ScheduleStore, StatusEditor, StatusValue,
    WeekNavigator, WeekWindow, start_of_week, supported_range, week_days,
};
use proptest::prelude::*;

use StatusValue::{Absent, Leave, Rest, Sick, Work};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn two_employee_store() -> ScheduleStore {
    ScheduleStore::new(vec![
        EmployeeSchedule::new("Ana", "Regulator", [Work, Work, Work, Rest, Rest, Work, Work]),
        EmployeeSchedule::new("Ben", "Driver", [Rest, Work, Sick, Work, Work, Rest, Absent]),
    ])
}

fn cells(store: &ScheduleStore) -> Vec<[StatusValue; 7]> {
    store.schedules().map(|s| s.schedule).collect()
}

// --- scenarios ---

#[test]
fn clicking_a_cell_and_selecting_leave_changes_only_that_cell() {
    let mut store = two_employee_store();
    let mut editor = StatusEditor::default();
    let before = cells(&store);
    assert_eq!(store.get(0, 2), Some(Work));

    editor.open(0, 2);
    let change = editor
        .select(Leave, &mut store)
        .expect("editor was open")
        .expect("coordinate in range");

    assert_eq!(change.previous, Work);
    assert_eq!(editor, StatusEditor::Closed);

    let after = cells(&store);
    assert_eq!(after[0], [Work, Work, Leave, Rest, Rest, Work, Work]);
    assert_eq!(after[1], before[1]);
}

#[test]
fn wednesday_with_sunday_anchor_starts_three_days_earlier() {
    let wednesday = date(2026, 10, 14);
    assert_eq!(wednesday.weekday(), Weekday::Wed);

    let start = start_of_week(wednesday, Weekday::Sun);
    assert_eq!(start, date(2026, 10, 11));
    assert_eq!(
        week_days(start),
        [
            date(2026, 10, 11),
            date(2026, 10, 12),
            date(2026, 10, 13),
            date(2026, 10, 14),
            date(2026, 10, 15),
            date(2026, 10, 16),
            date(2026, 10, 17),
        ]
    );
    assert_eq!(week_days(start)[6].weekday(), Weekday::Sat);
}

#[test]
fn previous_then_next_week_round_trips() {
    let mut nav = WeekNavigator::new(date(2026, 3, 1), Weekday::Sun);
    let original = nav.window();
    nav.previous_week();
    assert_ne!(nav.window(), original);
    nav.next_week();
    assert_eq!(nav.window(), original);
}

#[test]
fn opening_a_second_cell_abandons_the_first() {
    let mut store = two_employee_store();
    let mut editor = StatusEditor::default();
    let before = cells(&store);

    editor.open(0, 1);
    editor.open(1, 4);
    assert!(!editor.is_open_at(0, 1));
    assert!(editor.is_open_at(1, 4));
    assert_eq!(cells(&store), before);

    editor.select(Sick, &mut store);
    let after = cells(&store);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1][4], Sick);
}

#[test]
fn grid_reprojects_after_edit() {
    let roster = Roster::demo();
    let mut store = roster.store();
    let window = WeekWindow::containing(date(2026, 10, 16), Weekday::Sun);
    let mut editor = StatusEditor::default();

    editor.open(3, 2);
    let grid = PlanningGrid::project(&window, &store, &editor);
    assert!(grid.rows[3].cells[2].editing);

    editor.select(Work, &mut store);
    let grid = PlanningGrid::project(&window, &store, &editor);
    assert_eq!(grid.rows[3].cells[2].status, Work);
    assert!(grid.editing_cell().is_none());
    assert_eq!(grid.rows.len(), roster.schedules.len());
}

#[test]
fn roster_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roster.json");
    let roster = Roster::demo();
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&roster).expect("serialize roster"),
    )
    .expect("write roster");

    let loaded = Roster::from_path(&path).expect("load roster");
    assert_eq!(loaded, roster);
}

#[test]
fn missing_roster_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Roster::from_path(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, planner_model::RosterError::Io { .. }));
}

// --- properties ---

fn any_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ])
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. end of 2200
    (693_596i32..803_533).prop_map(|days| {
        NaiveDate::from_num_days_from_ce_opt(days).expect("in chrono's range")
    })
}

fn any_calendar_date() -> impl Strategy<Value = NaiveDate> {
    prop_oneof![
        (0u64..60).prop_map(|days| NaiveDate::MIN + chrono::Days::new(days)),
        (0u64..60).prop_map(|days| NaiveDate::MAX - chrono::Days::new(days)),
        any_date(),
    ]
}

fn any_status() -> impl Strategy<Value = StatusValue> {
    prop::sample::select(StatusValue::ALL.to_vec())
}

fn any_store() -> impl Strategy<Value = ScheduleStore> {
    prop::collection::vec(prop::array::uniform7(any_status()), 1..6).prop_map(|rows| {
        ScheduleStore::new(
            rows.into_iter()
                .enumerate()
                .map(|(i, schedule)| EmployeeSchedule::new(format!("E{i}"), "Crew", schedule))
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn week_start_has_anchor_weekday_and_covers_date(d in any_date(), anchor in any_weekday()) {
        let start = start_of_week(d, anchor);
        prop_assert_eq!(start.weekday(), anchor);
        prop_assert!(start <= d);
        prop_assert!(d < start + chrono::Days::new(7));
    }

    #[test]
    fn week_days_are_seven_consecutive_dates(d in any_date()) {
        let days = week_days(d);
        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0], d);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn week_navigation_round_trips(d in any_date(), anchor in any_weekday()) {
        let mut nav = WeekNavigator::new(d, anchor);
        let original = nav.window();
        nav.previous_week();
        nav.next_week();
        prop_assert_eq!(nav.window(), original);
        nav.next_week();
        nav.previous_week();
        prop_assert_eq!(nav.window(), original);
    }

    #[test]
    fn calendar_limits_keep_windows_well_formed(d in any_calendar_date(), anchor in any_weekday()) {
        let window = WeekWindow::containing(d, anchor);
        prop_assert_eq!(window.start.weekday(), anchor);
        prop_assert!(window.start <= *supported_range().end());
        for pair in window.days.windows(2) {
            prop_assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn accepted_week_steps_can_be_undone(d in any_calendar_date(), anchor in any_weekday()) {
        let mut nav = WeekNavigator::new(d, anchor);
        let original = nav.window();
        if nav.previous_week() {
            prop_assert!(nav.next_week());
            prop_assert_eq!(nav.window(), original);
        } else {
            prop_assert_eq!(nav.window(), original);
        }
        if nav.next_week() {
            prop_assert!(nav.previous_week());
            prop_assert_eq!(nav.window(), original);
        } else {
            prop_assert_eq!(nav.window(), original);
        }
    }

    #[test]
    fn update_status_touches_exactly_one_cell(
        store in any_store(),
        e_seed in any::<prop::sample::Index>(),
        d in 0usize..7,
        status in any_status(),
    ) {
        let mut store = store;
        let e = e_seed.index(store.len());
        let before = cells(&store);

        store.update_status(e, d, status).expect("indices in range");
        let after = cells(&store);

        for (ei, row) in after.iter().enumerate() {
            for (di, value) in row.iter().enumerate() {
                if (ei, di) == (e, d) {
                    prop_assert_eq!(*value, status);
                } else {
                    prop_assert_eq!(*value, before[ei][di]);
                }
            }
        }
    }

    #[test]
    fn update_status_is_idempotent(
        store in any_store(),
        e_seed in any::<prop::sample::Index>(),
        d in 0usize..7,
        status in any_status(),
    ) {
        let mut once = store.clone();
        let mut twice = store;
        let e = e_seed.index(once.len());

        once.update_status(e, d, status).expect("indices in range");
        twice.update_status(e, d, status).expect("indices in range");
        let second = twice.update_status(e, d, status).expect("indices in range");

        prop_assert!(second.is_noop());
        prop_assert_eq!(cells(&once), cells(&twice));
    }

    #[test]
    fn editor_never_has_two_open_cells(
        clicks in prop::collection::vec((0usize..5, 0usize..7), 1..20),
    ) {
        let mut editor = StatusEditor::default();
        for (e, d) in &clicks {
            editor.open(*e, *d);
        }
        let (last_e, last_d) = *clicks.last().expect("at least one click");
        prop_assert_eq!(editor.target(), Some((last_e, last_d)));
        for (e, d) in &clicks {
            prop_assert_eq!(editor.is_open_at(*e, *d), (*e, *d) == (last_e, last_d));
        }
    }
}
