//! State behind the start-date picker. The picker keeps a committed value and
//! a pending selection; only `confirm` moves the selection into the value.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::domain::START_DATE_ISO_FORMAT;

/// Cells in the month grid: six Monday-first weeks.
pub const CALENDAR_CELLS: usize = 42;
const YEAR_SPAN: i32 = 20;
const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const DEFAULT_PLACEHOLDER: &str = "Select date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub kind: CellKind,
    pub selected: bool,
}

/// Snapshot of the open picker for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Clone)]
pub struct DatePicker {
    value: Option<NaiveDate>,
    selected: Option<NaiveDate>,
    view_month: u32,
    view_year: i32,
    today: NaiveDate,
    open: bool,
    placeholder: String,
}

impl DatePicker {
    /// The grid starts on `today`'s month regardless of `value`.
    pub fn new(value: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            value,
            selected: value,
            view_month: today.month(),
            view_year: today.year(),
            today,
            open: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Committed value in the canonical `YYYY-MM-DD` form.
    pub fn value_iso(&self) -> Option<String> {
        self.value
            .map(|date| date.format(START_DATE_ISO_FORMAT).to_string())
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn view_month(&self) -> u32 {
        self.view_month
    }

    pub fn view_year(&self) -> i32 {
        self.view_year
    }

    /// `month` is 1-based. Out-of-range months are ignored.
    pub fn set_view_month(&mut self, month: u32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }
        self.view_month = month;
        true
    }

    pub fn set_view_year(&mut self, year: i32) {
        self.view_year = year;
    }

    /// Years offered by the year dropdown: ten back, ten forward.
    pub fn years(&self) -> Vec<i32> {
        let start = self.today.year() - YEAR_SPAN / 2;
        (start..start + YEAR_SPAN).collect()
    }

    /// Selects a day of the month currently in view.
    pub fn select_day(&mut self, day: u32) -> bool {
        match NaiveDate::from_ymd_opt(self.view_year, self.view_month, day) {
            Some(date) => {
                self.selected = Some(date);
                true
            }
            None => false,
        }
    }

    /// Selects any date; picking a trailing or leading cell also moves the
    /// view to that date's month.
    pub fn select(&mut self, date: NaiveDate) {
        self.view_month = date.month();
        self.view_year = date.year();
        self.selected = Some(date);
    }

    /// Commits the selection and closes. With nothing selected the picker
    /// stays open and `None` is returned.
    pub fn confirm(&mut self) -> Option<NaiveDate> {
        let selected = self.selected?;
        self.value = Some(selected);
        self.open = false;
        Some(selected)
    }

    /// Drops the pending selection and closes.
    pub fn cancel(&mut self) {
        self.selected = self.value;
        self.open = false;
    }

    pub fn display_label(&self) -> String {
        match self.selected {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => self.placeholder.clone(),
        }
    }

    pub fn calendar_view(&self) -> CalendarView {
        CalendarView {
            label: self.display_label(),
            year: self.view_year,
            month: self.view_month,
            cells: self.calendar_cells(),
        }
    }

    pub fn calendar_cells(&self) -> Vec<CalendarCell> {
        let Some(first) = NaiveDate::from_ymd_opt(self.view_year, self.view_month, 1) else {
            return Vec::new();
        };
        let lead = u64::from(first.weekday().num_days_from_monday());
        let Some(grid_start) = first.checked_sub_days(Days::new(lead)) else {
            return Vec::new();
        };

        grid_start
            .iter_days()
            .take(CALENDAR_CELLS)
            .map(|date| {
                let kind = if date < first {
                    CellKind::Previous
                } else if date.month() == self.view_month && date.year() == self.view_year {
                    CellKind::Current
                } else {
                    CellKind::Next
                };
                CalendarCell {
                    date,
                    kind,
                    selected: self.selected == Some(date),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/date_picker_tests.rs"]
mod tests;
