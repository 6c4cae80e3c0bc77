use crate::date_utils::add_months_to_month_year;
use crate::exceptions::CalendarError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

impl FromStr for SelectionMode {
    type Err = CalendarError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "range" => Ok(Self::Range),
            other => Err(CalendarError::Config(format!(
                "Unrecognised mode '{other}'. Expected single or range"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstDayOfWeek {
    #[default]
    Sunday,
    Monday,
}

impl FromStr for FirstDayOfWeek {
    type Err = CalendarError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            other => Err(CalendarError::Config(format!(
                "Unrecognised first day of week '{other}'. Expected sunday or monday"
            ))),
        }
    }
}

/// How many panes a range calendar shows: always one, always two, or
/// decided from the observed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeCalendars {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[default]
    #[serde(rename = "auto")]
    Auto,
}

impl FromStr for RangeCalendars {
    type Err = CalendarError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "auto" => Ok(Self::Auto),
            other => Err(CalendarError::Config(format!(
                "Unrecognised range calendars setting '{other}'. Expected 1, 2 or auto"
            ))),
        }
    }
}

/// Which displayed pane an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Single,
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Single => "single",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Side {
    type Err = CalendarError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(CalendarError::Config(format!(
                "Unrecognised side '{other}'. Expected single, left or right"
            ))),
        }
    }
}

/// One displayed pane. `month` is 0-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    /// Month numbers beyond 11 are clamped to December
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month: month.min(11),
            year,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn add_months(&self, delta: i32) -> Self {
        add_months_to_month_year(*self, delta)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month0() == self.month && date.year() == self.year
    }
}

impl Display for MonthYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerKind {
    Month,
    Year,
}

/// Overlay state. At most one overlay is open and closing always returns
/// to the default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerState {
    pub open: bool,
    pub kind: Option<PickerKind>,
    pub pane_index: usize,
}

/// Canonical selection. In range mode `selected_end` is only set once
/// `selected_start` is, and `selected_start <= selected_end` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub mode: SelectionMode,
    pub selected_date: Option<NaiveDate>,
    pub selected_start: Option<NaiveDate>,
    pub selected_end: Option<NaiveDate>,
    /// provisional range end while hovering after the start is chosen
    pub hover_date: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        self.selected_date = None;
        self.selected_start = None;
        self.selected_end = None;
        self.hover_date = None;
    }

    /// True when a range has a start but no end yet
    pub fn is_range_pending(&self) -> bool {
        self.mode == SelectionMode::Range
            && self.selected_start.is_some()
            && self.selected_end.is_none()
    }
}

/// Caller supplied annotation for a date, shown as a day badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMarker {
    pub date: String,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub foreground_color: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl EventMarker {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            background_color: None,
            foreground_color: None,
            tooltip: None,
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Host constraints on selectable dates. Consulted, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    pub disabled: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disabled_dates: Vec<NaiveDate>,
}
