/// Pane rewriting: programmatic navigation, header prev/next and the month/year pickers.
/// Every path funnels into `rewrite_pane`, which keeps the two panes adjacent.
use super::CalendarEngine;
use crate::config::{CALENDR_MAX_YEAR, CALENDR_MIN_YEAR};
use crate::date_utils::parse_iso_date;
use crate::exceptions::CalendarError;
use crate::header::HeaderIntent;
use crate::intents::CalendarIntent;
use crate::models::{MonthYear, PickerKind, PickerState, SelectionMode, Side};
use crate::picker::{ActivePicker, MonthPicker, YearPicker};
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

/// Options for `go_to_month`. `month` is 1-based and required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoToMonth {
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub side: Option<Side>,
}

impl GoToMonth {
    pub fn new(month: i32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
            side: None,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoToYear {
    pub year: Option<i32>,
    pub side: Option<Side>,
}

impl GoToYear {
    pub fn new(year: i32) -> Self {
        Self {
            year: Some(year),
            side: None,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

/// A date given either directly or as an ISO string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Iso(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Iso(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Iso(s)
    }
}

impl DateInput {
    pub fn resolve(&self) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Iso(s) => parse_iso_date(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoToDate {
    pub date: Option<DateInput>,
    pub side: Option<Side>,
}

impl GoToDate {
    pub fn new(date: impl Into<DateInput>) -> Self {
        Self {
            date: Some(date.into()),
            side: None,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

impl CalendarEngine {
    /// Copy of the displayed panes
    pub fn displayed_months(&self) -> Vec<MonthYear> {
        self.panes.clone()
    }

    /// Replace the displayed panes. At most two are kept; with two and
    /// `enforce_adjacency`, the second is forced to follow the first.
    pub fn set_displayed_months(&mut self, panes: &[MonthYear], enforce_adjacency: bool) {
        if panes.is_empty() {
            warn!("Ignoring empty pane list");
            return;
        }
        let mut panes: Vec<MonthYear> = panes.iter().take(2).copied().collect();
        if panes.len() == 2 && enforce_adjacency {
            panes[1] = panes[0].add_months(1);
        }
        self.panes = panes;
        debug!("Displayed months set to {:?}", self.panes);
    }

    /// Side used when an operation does not name one
    pub fn auto_side(&self) -> Side {
        if self.selection.mode == SelectionMode::Single || !self.is_dual() {
            Side::Single
        } else {
            Side::Left
        }
    }

    /// An explicit side is honoured where the current pane count allows it:
    /// `single` on two panes means the left one, `left`/`right` on one pane
    /// mean the sole pane.
    fn resolve_side(&self, side: Option<Side>) -> Side {
        match (side.unwrap_or_else(|| self.auto_side()), self.panes.len()) {
            (Side::Single, 2) => Side::Left,
            (_, len) if len < 2 => Side::Single,
            (side, _) => side,
        }
    }

    fn pane_for_side(&self, side: Side) -> MonthYear {
        let first = self.panes.first().copied().unwrap_or(MonthYear::of(self.today));
        match side {
            Side::Single | Side::Left => first,
            Side::Right => self
                .panes
                .get(1)
                .copied()
                .unwrap_or_else(|| first.add_months(1)),
        }
    }

    /// The single pane rewrite rule behind every navigation path
    fn rewrite_pane(&mut self, side: Side, target: MonthYear) {
        self.panes = match side {
            Side::Single => vec![target],
            Side::Left => vec![target, target.add_months(1)],
            Side::Right => vec![target.add_months(-1), target],
        };
        debug!("Panes rewritten via {} side: {:?}", side, self.panes);
    }

    /// Show `month` (1-12). Month numbers outside the range are clamped
    /// rather than rejected; a missing month is an error.
    pub fn go_to_month(&mut self, options: GoToMonth) -> Result<(), CalendarError> {
        let month = options.month.ok_or(CalendarError::MissingOption("month"))?;
        let side = self.resolve_side(options.side);
        let month0 = (month.clamp(1, 12) - 1) as u32;
        if let Some(year) = options.year {
            check_year(year, CALENDR_MIN_YEAR as i32, CALENDR_MAX_YEAR as i32)?;
        }
        let year = options.year.unwrap_or_else(|| self.pane_for_side(side).year);
        self.rewrite_pane(side, MonthYear::new(month0, year));
        Ok(())
    }

    /// Show `year` on the target side, keeping that side's month
    pub fn go_to_year(&mut self, options: GoToYear) -> Result<(), CalendarError> {
        let year = options.year.ok_or(CalendarError::MissingOption("year"))?;
        check_year(year, CALENDR_MIN_YEAR as i32, CALENDR_MAX_YEAR as i32)?;
        let side = self.resolve_side(options.side);
        let month0 = self.pane_for_side(side).month;
        self.rewrite_pane(side, MonthYear::new(month0, year));
        Ok(())
    }

    /// Show the month containing `date`, in one rewrite
    pub fn go_to_date(&mut self, options: GoToDate) -> Result<(), CalendarError> {
        let date = options
            .date
            .as_ref()
            .ok_or(CalendarError::MissingOption("date"))?
            .resolve()?;
        let side = self.resolve_side(options.side);
        self.rewrite_pane(side, MonthYear::new(date.month0(), date.year()));
        Ok(())
    }

    /// Header prev/next: shift the acted-on pane by `direction` months
    pub fn navigate(&mut self, direction: i32, side: Side) {
        let side = self.resolve_side(Some(side));
        let target = self.pane_for_side(side).add_months(direction);
        self.rewrite_pane(side, target);
        self.intents.push(CalendarIntent::Navigate { direction, side });
    }

    pub fn apply_header_intent(&mut self, intent: HeaderIntent) {
        match intent {
            HeaderIntent::Navigate { direction, side } => self.navigate(direction, side),
            HeaderIntent::OpenPicker { kind, pane_index } => self.open_picker(kind, pane_index),
        }
    }

    #[deprecated(note = "use go_to_month")]
    pub fn set_month(&mut self, month0: u32) {
        let side = self.resolve_side(None);
        let year = self.pane_for_side(side).year;
        self.rewrite_pane(side, MonthYear::new(month0, year));
    }

    #[deprecated(note = "use go_to_year")]
    pub fn set_year(&mut self, year: i32) {
        let side = self.resolve_side(None);
        let month0 = self.pane_for_side(side).month;
        self.rewrite_pane(side, MonthYear::new(month0, year));
    }

    // ===== Overlay pickers =====

    pub fn open_picker(&mut self, kind: PickerKind, pane_index: usize) {
        let pane_index = pane_index.min(self.panes.len().saturating_sub(1));
        let pane = self.pane_for_side(self.side_for_index(pane_index));
        self.active_picker = Some(match kind {
            PickerKind::Month => ActivePicker::Month(MonthPicker::new(pane.month)),
            PickerKind::Year => {
                ActivePicker::Year(YearPicker::new(pane.year, self.min_year, self.max_year))
            }
        });
        self.picker = PickerState {
            open: true,
            kind: Some(kind),
            pane_index,
        };
        debug!("Opened {:?} picker on pane {}", kind, pane_index);
    }

    pub fn close_picker(&mut self) {
        self.picker = PickerState::default();
        self.active_picker = None;
    }

    /// Commit a month (0-based) from the month picker to its pane
    pub fn select_month(&mut self, month0: u32) {
        let side = self.side_for_index(self.picker.pane_index);
        let year = self.pane_for_side(side).year;
        self.rewrite_pane(side, MonthYear::new(month0, year));
        self.intents.push(CalendarIntent::MonthSelected {
            month: month0.min(11) + 1,
        });
        self.close_picker();
    }

    /// Commit a year from the year picker to its pane
    pub fn select_year(&mut self, year: i32) -> Result<(), CalendarError> {
        check_year(year, self.min_year, self.max_year)?;
        let side = self.side_for_index(self.picker.pane_index);
        let month0 = self.pane_for_side(side).month;
        self.rewrite_pane(side, MonthYear::new(month0, year));
        self.intents.push(CalendarIntent::YearSelected { year });
        self.close_picker();
        Ok(())
    }

    /// Bring `date`'s month into view using the automatic side
    pub(super) fn center_on(&mut self, date: NaiveDate) {
        let side = self.resolve_side(None);
        self.rewrite_pane(side, MonthYear::of(date));
    }

    pub(super) fn is_visible(&self, date: NaiveDate) -> bool {
        self.panes.iter().any(|pane| pane.contains(date))
    }
}

fn check_year(year: i32, min: i32, max: i32) -> Result<(), CalendarError> {
    if year < min || year > max {
        return Err(CalendarError::YearOutOfRange { year, min, max });
    }
    Ok(())
}
