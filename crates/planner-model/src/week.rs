//! Week and month arithmetic for the planning grid.
//!
//! A week starts on a configurable anchor weekday (Sunday by default). The
//! displayed [`WeekWindow`] is the seven days starting at the most recent
//! anchor weekday at or before the navigator's reference date.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::schedule::DAYS_PER_WEEK;

/// Weekday on which planning weeks begin unless configured otherwise.
pub const DEFAULT_ANCHOR: Weekday = Weekday::Sun;

/// Dates the week arithmetic accepts without clamping.
///
/// chrono's calendar ends a few days short of a full week at either limit,
/// so one week of margin is kept on both sides. Every date in this range has
/// a week start and seven following days inside chrono's calendar.
pub fn supported_range() -> RangeInclusive<NaiveDate> {
    let margin = Days::new(DAYS_PER_WEEK as u64);
    let first = NaiveDate::MIN.checked_add_days(margin).unwrap_or(NaiveDate::MIN);
    let last = NaiveDate::MAX.checked_sub_days(margin).unwrap_or(NaiveDate::MAX);
    first..=last
}

fn clamp_to_supported(date: NaiveDate) -> NaiveDate {
    let range = supported_range();
    date.clamp(*range.start(), *range.end())
}

/// Most recent `anchor` weekday at or before `date`.
///
/// Dates outside [`supported_range`] are clamped into it first.
pub fn start_of_week(date: NaiveDate, anchor: Weekday) -> NaiveDate {
    let date = clamp_to_supported(date);
    let offset = (date.weekday().num_days_from_monday() + 7 - anchor.num_days_from_monday()) % 7;
    // The margin of the supported range covers any offset below 7.
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// The seven consecutive dates starting at `start`.
///
/// A start after the end of [`supported_range`] is clamped to it, so the
/// result is always strictly increasing.
pub fn week_days(start: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let start = start.min(*supported_range().end());
    std::array::from_fn(|offset| {
        start
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Seven consecutive dates shown as the grid's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    /// Window containing `reference`, starting on `anchor`.
    pub fn containing(reference: NaiveDate, anchor: Weekday) -> Self {
        let start = start_of_week(reference, anchor);
        Self {
            start,
            days: week_days(start),
        }
    }

    /// Last date of the window.
    pub fn end(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }

    /// Day offset of `date` inside the window.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }
}

/// A calendar month selection, as used by the recap view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthYear {
    year: i32,
    month: u32,
}

impl MonthYear {
    /// `month` is 1-based; returns `None` outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        match self.month {
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            month => Self {
                year: self.year,
                month: month - 1,
            },
        }
    }

    pub fn next(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            month => Self {
                year: self.year,
                month: month + 1,
            },
        }
    }

    /// Long label such as `"October 2026"`.
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Reference date plus anchor weekday; the source of every [`WeekWindow`].
///
/// The reference always lies inside [`supported_range`]. A step that would
/// leave it is refused and reported as `false`, so a previous step followed
/// by a next step (or the reverse) returns to the same window whenever the
/// first step was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNavigator {
    reference: NaiveDate,
    anchor: Weekday,
}

impl WeekNavigator {
    /// References outside [`supported_range`] are clamped into it.
    pub fn new(reference: NaiveDate, anchor: Weekday) -> Self {
        Self {
            reference: clamp_to_supported(reference),
            anchor,
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn anchor(&self) -> Weekday {
        self.anchor
    }

    /// Change the anchor weekday without moving the reference date.
    pub fn set_anchor(&mut self, anchor: Weekday) {
        self.anchor = anchor;
    }

    /// Window containing the reference date.
    pub fn window(&self) -> WeekWindow {
        WeekWindow::containing(self.reference, self.anchor)
    }

    /// Month of the reference date; follows the reference across month boundaries.
    pub fn month(&self) -> MonthYear {
        MonthYear::of(self.reference)
    }

    pub fn previous_week(&mut self) -> bool {
        self.shift(
            self.reference.checked_sub_days(Days::new(7)),
            "previous week",
        )
    }

    pub fn next_week(&mut self) -> bool {
        self.shift(
            self.reference.checked_add_days(Days::new(7)),
            "next week",
        )
    }

    /// Move back one calendar month; the day is clamped to the month's length.
    pub fn previous_month(&mut self) -> bool {
        self.shift(
            self.reference.checked_sub_months(Months::new(1)),
            "previous month",
        )
    }

    /// Move forward one calendar month; the day is clamped to the month's length.
    pub fn next_month(&mut self) -> bool {
        self.shift(
            self.reference.checked_add_months(Months::new(1)),
            "next month",
        )
    }

    fn shift(&mut self, target: Option<NaiveDate>, direction: &str) -> bool {
        match target.filter(|date| supported_range().contains(date)) {
            Some(date) => {
                self.reference = date;
                true
            }
            None => {
                tracing::warn!(
                    reference = %self.reference,
                    direction,
                    "Navigation would leave the supported calendar range"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn anchor_day_is_its_own_week_start() {
        let sunday = date(2026, 10, 11);
        assert_eq!(start_of_week(sunday, Weekday::Sun), sunday);
    }

    #[test]
    fn monday_anchor_from_sunday_goes_back_six_days() {
        assert_eq!(start_of_week(date(2026, 10, 11), Weekday::Mon), date(2026, 10, 5));
    }

    #[test]
    fn window_reports_membership() {
        let window = WeekWindow::containing(date(2026, 10, 14), Weekday::Sun);
        assert!(window.contains(date(2026, 10, 17)));
        assert!(!window.contains(date(2026, 10, 18)));
        assert_eq!(window.position(date(2026, 10, 14)), Some(3));
        assert_eq!(window.end(), date(2026, 10, 17));
    }

    #[test]
    fn week_navigation_updates_month_across_boundary() {
        let mut nav = WeekNavigator::new(date(2026, 10, 28), Weekday::Sun);
        assert_eq!(nav.month(), MonthYear::new(2026, 10).expect("valid month"));
        nav.next_week();
        assert_eq!(nav.reference(), date(2026, 11, 4));
        assert_eq!(nav.month(), MonthYear::new(2026, 11).expect("valid month"));
    }

    #[test]
    fn month_navigation_clamps_day() {
        let mut nav = WeekNavigator::new(date(2024, 1, 31), Weekday::Sun);
        nav.next_month();
        assert_eq!(nav.reference(), date(2024, 2, 29));
        nav.previous_month();
        assert_eq!(nav.reference(), date(2024, 1, 29));
    }

    #[test]
    fn month_year_wraps_years() {
        let december = MonthYear::new(2025, 12).expect("valid month");
        assert_eq!(december.next(), MonthYear::new(2026, 1).expect("valid month"));
        assert_eq!(december.next().previous(), december);
        assert!(MonthYear::new(2025, 13).is_none());
        assert_eq!(december.label(), "December 2025");
    }

    #[test]
    fn navigation_at_calendar_limit_stays_put() {
        let mut nav = WeekNavigator::new(NaiveDate::MAX, Weekday::Sun);
        let last = *supported_range().end();
        assert_eq!(nav.reference(), last);
        assert!(!nav.next_week());
        assert!(!nav.next_month());
        assert_eq!(nav.reference(), last);
    }

    #[test]
    fn week_start_keeps_anchor_at_calendar_limits() {
        for anchor in [Weekday::Sun, Weekday::Mon, Weekday::Thu, Weekday::Sat] {
            for limit in [NaiveDate::MIN, NaiveDate::MAX] {
                let start = start_of_week(limit, anchor);
                assert_eq!(start.weekday(), anchor);
                assert!(start <= *supported_range().end());
            }
        }
    }

    #[test]
    fn week_days_increase_at_calendar_limits() {
        for start in [NaiveDate::MIN, NaiveDate::MAX] {
            let days = week_days(start);
            for pair in days.windows(2) {
                assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
            }
        }
    }

    #[test]
    fn windows_near_calendar_limits_round_trip() {
        let near_min = NaiveDate::MIN.checked_add_days(Days::new(3)).expect("valid date");
        let mut nav = WeekNavigator::new(near_min, Weekday::Sun);
        let first = nav.window();
        assert!(!nav.previous_week());
        assert_eq!(nav.window(), first);
        assert!(nav.next_week());
        assert!(nav.previous_week());
        assert_eq!(nav.window(), first);

        let mut nav = WeekNavigator::new(NaiveDate::MAX, Weekday::Mon);
        let last = nav.window();
        assert!(nav.previous_week());
        assert!(nav.next_week());
        assert_eq!(nav.window(), last);
        for day in last.days.windows(2) {
            assert!(day[0] < day[1]);
        }
    }
}
