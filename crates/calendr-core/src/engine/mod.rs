/// The calendar engine: owns the canonical selection, the displayed panes,
/// the picker overlay and the keyboard focus. All mutation goes through its
/// methods; hosts read derived views and drain emitted intents afterwards.
mod keyboard;
mod navigation;
mod selection;

pub use navigation::{DateInput, GoToDate, GoToMonth, GoToYear};

use crate::announcer::Announcer;
use crate::day_grid::{build_day_grid, DayCell, GridContext};
use crate::event_index::EventIndex;
use crate::header::HeaderView;
use crate::intents::{CalendarIntent, FormSink};
use crate::layout::{PaneLayoutPolicy, SizeObserver};
use crate::locale::{self, Locale};
use crate::models::{
    Constraints, EventMarker, FirstDayOfWeek, MonthYear, PickerState, RangeCalendars,
    SelectionMode, SelectionState, Side,
};
use crate::options::{lenient_date, CalendarConfig};
use crate::picker::ActivePicker;
use chrono::NaiveDate;
use log::{debug, info};

/// Everything needed to render one pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub index: usize,
    pub side: Side,
    pub pane: MonthYear,
    pub header: HeaderView,
    pub cells: Vec<DayCell>,
    /// overlay shown instead of the day grid, if one is open on this pane
    pub picker: Option<ActivePicker>,
}

pub struct CalendarEngine {
    name: String,
    locale: &'static Locale,
    first_day_of_week: FirstDayOfWeek,
    hide_today: bool,
    disable_keyboard_navigation: bool,
    disable_announce_selections: bool,
    min_year: i32,
    max_year: i32,

    selection: SelectionState,
    panes: Vec<MonthYear>,
    picker: PickerState,
    active_picker: Option<ActivePicker>,
    focused_date: Option<NaiveDate>,
    constraints: Constraints,
    events: EventIndex,
    layout: PaneLayoutPolicy,
    announcer: Announcer,
    intents: Vec<CalendarIntent>,
    form_sink: Option<Box<dyn FormSink>>,
    today: NaiveDate,
}

impl std::fmt::Debug for CalendarEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarEngine")
            .field("selection", &self.selection)
            .field("panes", &self.panes)
            .field("picker", &self.picker)
            .field("focused_date", &self.focused_date)
            .field("today", &self.today)
            .finish()
    }
}

impl CalendarEngine {
    /// Create an engine whose notion of "today" is the local date
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_today(config, chrono::Local::now().date_naive())
    }

    pub fn with_today(config: CalendarConfig, today: NaiveDate) -> Self {
        let mut selection = SelectionState::new(config.mode);
        match config.mode {
            SelectionMode::Single => {
                selection.selected_date = lenient_date("value", config.value.as_deref());
            }
            SelectionMode::Range => {
                let start = lenient_date("start_date", config.start_date.as_deref());
                let end = lenient_date("end_date", config.end_date.as_deref());
                match (start, end) {
                    (Some(start), Some(end)) if end < start => {
                        selection.selected_start = Some(end);
                        selection.selected_end = Some(start);
                    }
                    (Some(start), end) => {
                        selection.selected_start = Some(start);
                        selection.selected_end = end;
                    }
                    (None, Some(_)) => {
                        log::warn!("Ignoring end_date without a start_date");
                    }
                    (None, None) => {}
                }
            }
        }

        let mut engine = Self {
            name: config.name.clone(),
            locale: locale::lookup(&config.locale),
            first_day_of_week: config.first_day_of_week,
            hide_today: config.hide_today,
            disable_keyboard_navigation: config.disable_keyboard_navigation,
            disable_announce_selections: config.disable_announce_selections,
            min_year: config.min_year,
            max_year: config.max_year,
            selection,
            panes: Vec::new(),
            picker: PickerState::default(),
            active_picker: None,
            focused_date: None,
            constraints: config.constraints(),
            events: EventIndex::from_markers(&config.event_markers),
            layout: PaneLayoutPolicy::new(config.range_calendars),
            announcer: Announcer::default(),
            intents: Vec::new(),
            form_sink: None,
            today,
        };
        engine.seed_panes();
        info!(
            "Calendar '{}' initialised in {:?} mode showing {:?}",
            engine.name, engine.selection.mode, engine.panes
        );
        engine
    }

    pub fn set_form_sink(&mut self, sink: Box<dyn FormSink>) {
        self.form_sink = Some(sink);
    }

    pub fn set_layout_policy(&mut self, layout: PaneLayoutPolicy) {
        self.layout = layout;
        self.sync_pane_count();
    }

    // ===== Read access =====

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode
    }

    pub fn picker_state(&self) -> PickerState {
        self.picker
    }

    pub fn active_picker(&self) -> Option<&ActivePicker> {
        self.active_picker.as_ref()
    }

    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.focused_date
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    pub fn first_day_of_week(&self) -> FirstDayOfWeek {
        self.first_day_of_week
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn keyboard_enabled(&self) -> bool {
        !self.disable_keyboard_navigation
    }

    /// Display value in single mode
    pub fn value(&self) -> Option<String> {
        match self.selection.mode {
            SelectionMode::Single => self.selection.selected_date.map(crate::date_utils::format_date),
            SelectionMode::Range => None,
        }
    }

    pub fn start_date(&self) -> Option<String> {
        self.selection.selected_start.map(crate::date_utils::format_date)
    }

    pub fn end_date(&self) -> Option<String> {
        self.selection.selected_end.map(crate::date_utils::format_date)
    }

    pub fn is_dual(&self) -> bool {
        self.layout.is_dual(self.selection.mode)
    }

    pub fn layout(&self) -> &PaneLayoutPolicy {
        &self.layout
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcer.message()
    }

    pub fn announcement_generation(&self) -> u64 {
        self.announcer.generation()
    }

    pub fn clear_announcement(&mut self, generation: u64) -> bool {
        self.announcer.clear(generation)
    }

    /// Take every intent emitted since the last drain, oldest first
    pub fn drain_intents(&mut self) -> Vec<CalendarIntent> {
        std::mem::take(&mut self.intents)
    }

    pub fn weekday_labels(&self) -> Vec<&'static str> {
        self.locale.weekday_labels(self.first_day_of_week)
    }

    pub fn pane_views(&self) -> Vec<PaneView> {
        let ctx = GridContext {
            selection: &self.selection,
            constraints: &self.constraints,
            events: &self.events,
            focused_date: self.focused_date,
            today: self.today,
            hide_today: self.hide_today,
            first_day_of_week: self.first_day_of_week,
        };
        self.panes
            .iter()
            .enumerate()
            .map(|(index, pane)| {
                let side = self.side_for_index(index);
                let picker = match self.picker.open && self.picker.pane_index == index {
                    true => self.active_picker.clone(),
                    false => None,
                };
                PaneView {
                    index,
                    side,
                    pane: *pane,
                    header: HeaderView::new(*pane, index, side, self.locale, &self.constraints),
                    cells: build_day_grid(*pane, &ctx),
                    picker,
                }
            })
            .collect()
    }

    // ===== Host settable configuration =====

    /// Switching mode drops the current selection
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if mode == self.selection.mode {
            return;
        }
        debug!("Switching mode {:?} -> {:?}", self.selection.mode, mode);
        self.selection = SelectionState::new(mode);
        self.close_picker();
        self.sync_pane_count();
    }

    pub fn set_range_calendars(&mut self, setting: RangeCalendars) {
        self.layout.set_setting(setting);
        self.sync_pane_count();
    }

    pub fn set_event_markers(&mut self, markers: &[EventMarker]) {
        self.events.rebuild(markers);
    }

    /// Feed a (coalesced) width observation to the pane layout policy
    pub fn observe_width(&mut self, width: Option<usize>) {
        self.layout.observe_width(width);
        self.sync_pane_count();
    }

    /// Read the width once from a host width source
    pub fn observe_size(&mut self, observer: &dyn SizeObserver) {
        self.observe_width(observer.available_width());
    }

    // ===== Internal helpers =====

    fn announce(&mut self, message: String) {
        self.announcer.announce(message);
    }

    fn announce_selection(&mut self, message: String) {
        if !self.disable_announce_selections {
            self.announce(message);
        }
    }

    fn notify_form(&mut self, value: &str) {
        if let Some(sink) = self.form_sink.as_mut() {
            sink.set_form_value(&self.name, value);
        }
    }

    /// Seed panes from the selection anchor, or today when nothing is selected
    fn seed_panes(&mut self) {
        let anchor = match self.selection.mode {
            SelectionMode::Single => self.selection.selected_date,
            SelectionMode::Range => self.selection.selected_start,
        }
        .unwrap_or(self.today);
        self.panes = vec![MonthYear::of(anchor)];
        self.sync_pane_count();
    }

    /// Expand to two panes or collapse to one to match the dual flag
    fn sync_pane_count(&mut self) {
        if self.panes.is_empty() {
            self.panes.push(MonthYear::of(self.today));
        }
        let dual = self.is_dual();
        match (dual, self.panes.len()) {
            (true, 1) => {
                let second = self.panes[0].add_months(1);
                self.panes.push(second);
                debug!("Expanded to two panes: {:?}", self.panes);
            }
            (false, 2) => {
                self.panes.truncate(1);
                debug!("Collapsed to one pane: {:?}", self.panes);
            }
            _ => {}
        }
        if self.picker.open && self.picker.pane_index >= self.panes.len() {
            self.close_picker();
        }
    }

    fn side_for_index(&self, index: usize) -> Side {
        match (self.panes.len(), index) {
            (2, 0) => Side::Left,
            (2, _) => Side::Right,
            _ => Side::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_utils::parse_iso_date;

    fn d(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    #[test]
    fn test_seed_from_value() {
        let config = CalendarConfig {
            value: Some("2023-07-04".to_string()),
            ..Default::default()
        };
        let engine = CalendarEngine::with_today(config, d("2024-01-15"));
        assert_eq!(engine.value().as_deref(), Some("2023-07-04"));
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(6, 2023)]);
    }

    #[test]
    fn test_hide_today_reaches_pane_views() {
        let today = d("2024-01-15");
        let shown = CalendarEngine::with_today(CalendarConfig::default(), today);
        let is_today = |engine: &CalendarEngine| {
            engine.pane_views().iter().any(|view| {
                view.cells
                    .iter()
                    .filter_map(|c| c.day())
                    .any(|day| day.today)
            })
        };
        assert!(is_today(&shown));

        let config = CalendarConfig {
            hide_today: true,
            ..Default::default()
        };
        let hidden = CalendarEngine::with_today(config, today);
        assert!(!is_today(&hidden));
    }

    #[test]
    fn test_seed_defaults_to_today() {
        let engine = CalendarEngine::with_today(CalendarConfig::default(), d("2024-01-15"));
        assert_eq!(engine.value(), None);
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(0, 2024)]);
    }

    #[test]
    fn test_seed_range_swaps_reversed_bounds() {
        let config = CalendarConfig {
            start_date: Some("2024-03-20".to_string()),
            end_date: Some("2024-03-02".to_string()),
            range_calendars: RangeCalendars::Two,
            ..CalendarConfig::range()
        };
        let engine = CalendarEngine::with_today(config, d("2024-01-15"));
        assert_eq!(engine.start_date().as_deref(), Some("2024-03-02"));
        assert_eq!(engine.end_date().as_deref(), Some("2024-03-20"));
        assert_eq!(
            engine.displayed_months(),
            vec![MonthYear::new(2, 2024), MonthYear::new(3, 2024)]
        );
    }

    #[test]
    fn test_width_observation_expands_and_collapses() {
        let mut engine = CalendarEngine::with_today(CalendarConfig::range(), d("2024-01-15"));
        engine.set_layout_policy(PaneLayoutPolicy::with_threshold(RangeCalendars::Auto, 60));
        assert_eq!(engine.displayed_months().len(), 1);

        engine.observe_width(Some(80));
        assert_eq!(
            engine.displayed_months(),
            vec![MonthYear::new(0, 2024), MonthYear::new(1, 2024)]
        );

        engine.observe_width(Some(40));
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(0, 2024)]);
    }

    #[test]
    fn test_fixed_width_source_drives_auto_layout() {
        use crate::layout::FixedWidth;
        let mut engine = CalendarEngine::with_today(CalendarConfig::range(), d("2024-01-15"));
        engine.set_layout_policy(PaneLayoutPolicy::with_threshold(RangeCalendars::Auto, 60));
        engine.observe_size(&FixedWidth(Some(100)));
        assert!(engine.is_dual());
        engine.observe_size(&FixedWidth(None));
        assert!(!engine.is_dual());
    }

    #[test]
    fn test_set_mode_clears_selection() {
        let mut engine = CalendarEngine::with_today(CalendarConfig::default(), d("2024-01-15"));
        engine.select_date(d("2024-01-20"));
        engine.set_range_calendars(RangeCalendars::Two);
        assert_eq!(engine.displayed_months().len(), 1);
        engine.set_mode(SelectionMode::Range);
        assert_eq!(engine.value(), None);
        assert_eq!(engine.selection().selected_date, None);
        assert_eq!(engine.displayed_months().len(), 2);
    }

    #[test]
    fn test_pane_views_carry_headers_and_grids() {
        let config = CalendarConfig {
            range_calendars: RangeCalendars::Two,
            ..CalendarConfig::range()
        };
        let engine = CalendarEngine::with_today(config, d("2024-01-15"));
        let views = engine.pane_views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].side, Side::Left);
        assert_eq!(views[1].side, Side::Right);
        assert_eq!(views[1].header.month_label, "February");
        assert_eq!(views[1].cells.iter().filter(|c| c.day().is_some()).count(), 29);
        assert!(views.iter().all(|v| v.picker.is_none()));
    }
}
