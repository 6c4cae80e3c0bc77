/// Day grid computation for a single pane
use crate::date_utils::{days_in_month, format_date, is_date_disabled, is_same_day, weekday_column};
use crate::event_index::EventIndex;
use crate::models::{
    Constraints, EventMarker, FirstDayOfWeek, MonthYear, SelectionMode, SelectionState,
};
use chrono::NaiveDate;

/// Everything a pane grid is derived from. Borrowed from the engine for
/// the duration of one computation.
pub struct GridContext<'a> {
    pub selection: &'a SelectionState,
    pub constraints: &'a Constraints,
    pub events: &'a EventIndex,
    pub focused_date: Option<NaiveDate>,
    pub today: NaiveDate,
    pub hide_today: bool,
    pub first_day_of_week: FirstDayOfWeek,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Lead-in cell before the first of the month
    Empty,
    Day(Day),
}

impl DayCell {
    pub fn day(&self) -> Option<&Day> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub day: u32,
    pub iso: String,
    pub today: bool,
    pub selected: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub in_range: bool,
    pub hovered_range: bool,
    pub disabled: bool,
    pub focused: bool,
    pub events: Vec<EventMarker>,
}

/// Strictly between `a` and `b`, whichever order they come in
fn strictly_between(date: NaiveDate, a: NaiveDate, b: NaiveDate) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    date > lo && date < hi
}

pub fn leading_offset(pane: MonthYear, first_day: FirstDayOfWeek) -> u32 {
    pane.first_day()
        .map(|first| weekday_column(first, first_day))
        .unwrap_or(0)
}

/// Build the cells for `pane`: `offset` empty cells then one per day
pub fn build_day_grid(pane: MonthYear, ctx: &GridContext<'_>) -> Vec<DayCell> {
    let offset = leading_offset(pane, ctx.first_day_of_week);
    let length = days_in_month(pane.year, pane.month);
    let mut cells = Vec::with_capacity((offset + length) as usize);
    cells.extend((0..offset).map(|_| DayCell::Empty));

    for day in 1..=length {
        if let Some(date) = NaiveDate::from_ymd_opt(pane.year, pane.month + 1, day) {
            cells.push(DayCell::Day(build_day(date, ctx)));
        }
    }
    cells
}

fn build_day(date: NaiveDate, ctx: &GridContext<'_>) -> Day {
    let selection = ctx.selection;
    let start = selection.selected_start;
    let end = selection.selected_end;

    let in_range = match (start, end) {
        (Some(start), Some(end)) => strictly_between(date, start, end),
        _ => false,
    };
    let hovered_range = match (start, end, selection.hover_date) {
        (Some(start), None, Some(hover)) => strictly_between(date, start, hover),
        _ => false,
    };

    Day {
        date,
        day: chrono::Datelike::day(&date),
        iso: format_date(date),
        today: !ctx.hide_today && date == ctx.today,
        selected: selection.mode == SelectionMode::Single
            && is_same_day(Some(date), selection.selected_date),
        range_start: is_same_day(Some(date), start),
        range_end: is_same_day(Some(date), end),
        in_range,
        hovered_range,
        disabled: is_date_disabled(date, ctx.constraints),
        focused: is_same_day(Some(date), ctx.focused_date),
        events: ctx.events.events_for(date).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_utils::parse_iso_date;

    fn d(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    struct Fixture {
        selection: SelectionState,
        constraints: Constraints,
        events: EventIndex,
        hide_today: bool,
    }

    impl Fixture {
        fn new(mode: SelectionMode) -> Self {
            Self {
                selection: SelectionState::new(mode),
                constraints: Constraints::default(),
                events: EventIndex::default(),
                hide_today: false,
            }
        }

        fn grid(&self, pane: MonthYear, first_day: FirstDayOfWeek) -> Vec<DayCell> {
            let ctx = GridContext {
                selection: &self.selection,
                constraints: &self.constraints,
                events: &self.events,
                focused_date: Some(d("2024-01-03")),
                today: d("2024-01-02"),
                hide_today: self.hide_today,
                first_day_of_week: first_day,
            };
            build_day_grid(pane, &ctx)
        }
    }

    fn day<'a>(cells: &'a [DayCell], n: u32) -> &'a Day {
        cells
            .iter()
            .filter_map(|c| c.day())
            .find(|day| day.day == n)
            .unwrap()
    }

    #[test]
    fn test_leading_offset_respects_first_day() {
        let fixture = Fixture::new(SelectionMode::Single);
        // September 2024 starts on a Sunday
        let sept = MonthYear::new(8, 2024);
        let sunday_first = fixture.grid(sept, FirstDayOfWeek::Sunday);
        let monday_first = fixture.grid(sept, FirstDayOfWeek::Monday);
        assert_eq!(sunday_first.len(), 30);
        assert_eq!(monday_first.len(), 36);
        assert!(monday_first[..6].iter().all(|c| *c == DayCell::Empty));

        // January 2024 starts on a Monday
        let jan = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert_eq!(jan[0], DayCell::Empty);
        assert_eq!(jan[1].day().map(|d| d.day), Some(1));
    }

    #[test]
    fn test_today_focus_and_single_selection_flags() {
        let mut fixture = Fixture::new(SelectionMode::Single);
        fixture.selection.selected_date = Some(d("2024-01-15"));
        let cells = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert!(day(&cells, 2).today);
        assert!(day(&cells, 3).focused);
        assert!(day(&cells, 15).selected);
        assert!(!day(&cells, 16).selected);
    }

    #[test]
    fn test_hide_today_clears_today_flag() {
        let mut fixture = Fixture::new(SelectionMode::Single);
        fixture.hide_today = true;
        let cells = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert!(cells.iter().filter_map(|c| c.day()).all(|day| !day.today));
        // other flags are untouched
        assert!(day(&cells, 3).focused);
    }

    #[test]
    fn test_range_flags_exclude_endpoints() {
        let mut fixture = Fixture::new(SelectionMode::Range);
        fixture.selection.selected_start = Some(d("2024-01-10"));
        fixture.selection.selected_end = Some(d("2024-01-13"));
        let cells = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert!(day(&cells, 10).range_start);
        assert!(!day(&cells, 10).in_range);
        assert!(day(&cells, 11).in_range);
        assert!(day(&cells, 12).in_range);
        assert!(day(&cells, 13).range_end);
        assert!(!day(&cells, 13).in_range);
        assert!(!day(&cells, 10).selected);
    }

    #[test]
    fn test_hovered_range_works_backwards() {
        let mut fixture = Fixture::new(SelectionMode::Range);
        fixture.selection.selected_start = Some(d("2024-01-10"));
        fixture.selection.hover_date = Some(d("2024-01-06"));
        let cells = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert!(!day(&cells, 6).hovered_range);
        assert!(day(&cells, 7).hovered_range);
        assert!(day(&cells, 9).hovered_range);
        assert!(!day(&cells, 10).hovered_range);
        assert!(!day(&cells, 11).hovered_range);
    }

    #[test]
    fn test_disabled_and_events() {
        let mut fixture = Fixture::new(SelectionMode::Single);
        fixture.constraints.max_date = Some(d("2024-01-28"));
        fixture.events = EventIndex::from_markers(&[EventMarker::new("2024-01-05")]);
        let cells = fixture.grid(MonthYear::new(0, 2024), FirstDayOfWeek::Sunday);
        assert!(!day(&cells, 28).disabled);
        assert!(day(&cells, 29).disabled);
        assert_eq!(day(&cells, 5).events.len(), 1);
        assert_eq!(day(&cells, 5).iso, "2024-01-05");
    }
}
