/// Host configuration surface for a calendar instance
use crate::config::{CALENDR_MAX_YEAR, CALENDR_MIN_YEAR};
use crate::date_utils::parse_iso_date;
use crate::get_calendr_setting;
use crate::models::{Constraints, EventMarker, FirstDayOfWeek, RangeCalendars, SelectionMode};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "date".to_string()
}

fn default_locale() -> String {
    get_calendr_setting!(CALENDR_DEFAULT_LOCALE)
}

fn default_min_year() -> i32 {
    CALENDR_MIN_YEAR as i32
}

fn default_max_year() -> i32 {
    CALENDR_MAX_YEAR as i32
}

/// Every field is optional when deserialising; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// form field name reported to the form sink
    #[serde(default = "default_name")]
    pub name: String,
    pub mode: SelectionMode,
    pub value: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub disabled_dates: Vec<String>,
    pub disabled: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
    pub first_day_of_week: FirstDayOfWeek,
    pub range_calendars: RangeCalendars,
    pub event_markers: Vec<EventMarker>,
    pub disable_keyboard_navigation: bool,
    pub disable_announce_selections: bool,
    pub hide_today: bool,
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            mode: SelectionMode::default(),
            value: None,
            start_date: None,
            end_date: None,
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            disabled: false,
            locale: default_locale(),
            first_day_of_week: FirstDayOfWeek::default(),
            range_calendars: RangeCalendars::default(),
            event_markers: Vec::new(),
            disable_keyboard_navigation: false,
            disable_announce_selections: false,
            hide_today: false,
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

/// Parse an optional host supplied date, logging and dropping bad input
pub(crate) fn lenient_date(field: &str, input: Option<&str>) -> Option<NaiveDate> {
    let input = input?;
    if input.trim().is_empty() {
        return None;
    }
    match parse_iso_date(input) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring {}: {}", field, e);
            None
        }
    }
}

impl CalendarConfig {
    pub fn range() -> Self {
        Self {
            mode: SelectionMode::Range,
            ..Default::default()
        }
    }

    pub fn constraints(&self) -> Constraints {
        Constraints {
            disabled: self.disabled,
            min_date: lenient_date("min_date", self.min_date.as_deref()),
            max_date: lenient_date("max_date", self.max_date.as_deref()),
            disabled_dates: self
                .disabled_dates
                .iter()
                .filter_map(|d| lenient_date("disabled date", Some(d)))
                .collect(),
        }
    }
}
