/// Pure date helpers shared by the grid, the pickers and the engine
use crate::exceptions::CalendarError;
use crate::models::{Constraints, FirstDayOfWeek, MonthYear};
use chrono::{Datelike, Days, Months, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Same calendar day. Missing dates never match.
pub fn is_same_day(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Canonical `YYYY-MM-DD` rendering used for values and the event index
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string. A full ISO timestamp is accepted and its
/// date part is used.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = input.trim();
    let date_part = match trimmed.find('T') {
        Some(ix) => &trimmed[..ix],
        None => trimmed,
    };
    NaiveDate::parse_from_str(date_part, ISO_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(input.to_string()))
}

/// Disabled when the whole widget is disabled, the date falls outside
/// `[min_date, max_date]`, or it is listed explicitly.
pub fn is_date_disabled(date: NaiveDate, constraints: &Constraints) -> bool {
    if constraints.disabled {
        return true;
    }
    if let Some(min) = constraints.min_date {
        if date < min {
            return true;
        }
    }
    if let Some(max) = constraints.max_date {
        if date > max {
            return true;
        }
    }
    constraints.disabled_dates.contains(&date)
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let this_month = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
    let next_month = this_month.and_then(|d| d.checked_add_months(Months::new(1)));
    match (this_month, next_month) {
        (Some(start), Some(end)) => (end - start).num_days() as u32,
        _ => 31,
    }
}

/// Saturates at the first and last month representable with an `i32` year
pub fn add_months_to_month_year(my: MonthYear, delta: i32) -> MonthYear {
    let total = my.year as i64 * 12 + my.month as i64 + delta as i64;
    match i32::try_from(total.div_euclid(12)) {
        Ok(year) => MonthYear {
            month: total.rem_euclid(12) as u32,
            year,
        },
        Err(_) if total < 0 => MonthYear {
            month: 0,
            year: i32::MIN,
        },
        Err(_) => MonthYear {
            month: 11,
            year: i32::MAX,
        },
    }
}

/// Move by whole months, clamping the day to the target month's length.
/// Out of range results leave the date unchanged.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let moved = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    moved.unwrap_or(date)
}

pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let moved = if delta >= 0 {
        date.checked_add_days(Days::new(delta as u64))
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
    };
    moved.unwrap_or(date)
}

/// Column of `date` in a week row that starts on `first_day`
pub fn weekday_column(date: NaiveDate, first_day: FirstDayOfWeek) -> u32 {
    let from_sunday = date.weekday().num_days_from_sunday();
    match first_day {
        FirstDayOfWeek::Sunday => from_sunday,
        // Sunday (0) moves to the end of the row
        FirstDayOfWeek::Monday => (from_sunday + 6) % 7,
    }
}

pub fn start_of_week(date: NaiveDate, first_day: FirstDayOfWeek) -> NaiveDate {
    add_days(date, -(weekday_column(date, first_day) as i64))
}

pub fn end_of_week(date: NaiveDate, first_day: FirstDayOfWeek) -> NaiveDate {
    add_days(date, 6 - weekday_column(date, first_day) as i64)
}
