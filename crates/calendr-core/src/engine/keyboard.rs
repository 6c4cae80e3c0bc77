/// Keyboard handling: routed to the open overlay if there is one, otherwise
/// moves the grid cursor
use super::CalendarEngine;
use crate::date_utils::{add_days, add_months, end_of_week, start_of_week};
use crate::keys::{KeyPress, NavKey};
use crate::models::SelectionMode;
use crate::picker::{ActivePicker, PickerResponse};
use chrono::NaiveDate;
use log::{debug, trace};

enum OverlayOutcome {
    Month(PickerResponse<u32>),
    Year(PickerResponse<i32>),
}

impl CalendarEngine {
    /// Where the cursor is, or would start on first keyboard interaction
    pub fn cursor(&self) -> NaiveDate {
        let selected = match self.selection.mode {
            SelectionMode::Single => self.selection.selected_date,
            SelectionMode::Range => self.selection.selected_start,
        };
        self.focused_date.or(selected).unwrap_or(self.today)
    }

    /// Returns true when the key was consumed
    pub fn handle_key(&mut self, press: impl Into<KeyPress>) -> bool {
        let press = press.into();
        if self.disable_keyboard_navigation {
            return false;
        }
        trace!("key {:?}", press);
        if self.active_picker.is_some() {
            return self.handle_overlay_key(press.key);
        }
        self.handle_grid_key(press)
    }

    fn handle_overlay_key(&mut self, key: NavKey) -> bool {
        if key == NavKey::Escape {
            self.close_picker();
            return true;
        }
        let outcome = match self.active_picker.as_mut() {
            Some(ActivePicker::Month(picker)) => OverlayOutcome::Month(picker.handle_key(key)),
            Some(ActivePicker::Year(picker)) => OverlayOutcome::Year(picker.handle_key(key)),
            None => return false,
        };
        match outcome {
            OverlayOutcome::Month(PickerResponse::Selected(month0)) => {
                self.select_month(month0);
                true
            }
            OverlayOutcome::Year(PickerResponse::Selected(year)) => {
                // the picker already refuses out-of-bounds years
                self.select_year(year).is_ok()
            }
            OverlayOutcome::Month(PickerResponse::Handled)
            | OverlayOutcome::Year(PickerResponse::Handled) => true,
            OverlayOutcome::Month(PickerResponse::Ignored)
            | OverlayOutcome::Year(PickerResponse::Ignored) => false,
        }
    }

    fn handle_grid_key(&mut self, press: KeyPress) -> bool {
        let cursor = self.cursor();
        let first_day = self.first_day_of_week;
        let target = match press.key {
            NavKey::ArrowLeft => add_days(cursor, -1),
            NavKey::ArrowRight => add_days(cursor, 1),
            NavKey::ArrowUp => add_days(cursor, -7),
            NavKey::ArrowDown => add_days(cursor, 7),
            NavKey::Home => start_of_week(cursor, first_day),
            NavKey::End => end_of_week(cursor, first_day),
            NavKey::PageUp => add_months(cursor, if press.shift { -12 } else { -1 }),
            NavKey::PageDown => add_months(cursor, if press.shift { 12 } else { 1 }),
            NavKey::Enter | NavKey::Space => {
                self.focused_date = Some(cursor);
                self.select_date(cursor);
                return true;
            }
            NavKey::Escape => {
                return self.focused_date.take().is_some();
            }
            NavKey::Today => {
                let today = self.today;
                self.focused_date = Some(today);
                self.center_on(today);
                self.announce(self.locale.focused_on_text(today));
                return true;
            }
        };
        self.move_focus(target);
        true
    }

    /// Move the cursor, bringing its month into view when it leaves the panes
    fn move_focus(&mut self, target: NaiveDate) {
        self.focused_date = Some(target);
        if !self.is_visible(target) {
            self.center_on(target);
            debug!("Focus moved off the panes, recentred on {}", target);
            self.announce(self.locale.focused_on_text(target));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::date_utils::parse_iso_date;
    use crate::engine::CalendarEngine;
    use crate::keys::{KeyPress, NavKey};
    use crate::models::{FirstDayOfWeek, MonthYear, PickerKind, RangeCalendars};
    use crate::options::CalendarConfig;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn engine(config: CalendarConfig) -> CalendarEngine {
        CalendarEngine::with_today(config, d("2024-01-15"))
    }

    #[test]
    fn test_cursor_starts_at_selection_then_today() {
        let selected = engine(CalendarConfig {
            value: Some("2024-01-20".to_string()),
            ..Default::default()
        });
        assert_eq!(selected.cursor(), d("2024-01-20"));
        assert_eq!(engine(CalendarConfig::default()).cursor(), d("2024-01-15"));
    }

    #[test]
    fn test_arrows_move_by_day_and_week() {
        let mut engine = engine(CalendarConfig::default());
        assert!(engine.handle_key(NavKey::ArrowRight));
        assert_eq!(engine.focused_date(), Some(d("2024-01-16")));
        engine.handle_key(NavKey::ArrowDown);
        assert_eq!(engine.focused_date(), Some(d("2024-01-23")));
        engine.handle_key(NavKey::ArrowUp);
        engine.handle_key(NavKey::ArrowLeft);
        assert_eq!(engine.focused_date(), Some(d("2024-01-15")));
        assert_eq!(engine.announcement(), None);
    }

    #[test]
    fn test_home_end_respect_first_day() {
        let mut engine = engine(CalendarConfig {
            first_day_of_week: FirstDayOfWeek::Monday,
            ..Default::default()
        });
        // 2024-01-15 is a Monday
        engine.handle_key(NavKey::End);
        assert_eq!(engine.focused_date(), Some(d("2024-01-21")));
        engine.handle_key(NavKey::Home);
        assert_eq!(engine.focused_date(), Some(d("2024-01-15")));
    }

    #[test]
    fn test_leaving_pane_recentres_and_announces() {
        let mut engine = engine(CalendarConfig::default());
        engine.handle_key(NavKey::PageDown);
        assert_eq!(engine.focused_date(), Some(d("2024-02-15")));
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(1, 2024)]);
        assert_eq!(
            engine.announcement(),
            Some("Focused on Thursday, February 15, 2024")
        );

        engine.handle_key(KeyPress::shifted(NavKey::PageUp));
        assert_eq!(engine.focused_date(), Some(d("2023-02-15")));
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(1, 2023)]);
    }

    #[test]
    fn test_moves_within_dual_panes_do_not_recentre() {
        let mut engine = engine(CalendarConfig {
            range_calendars: RangeCalendars::Two,
            ..CalendarConfig::range()
        });
        engine.handle_key(NavKey::PageDown);
        assert_eq!(
            engine.displayed_months(),
            vec![MonthYear::new(0, 2024), MonthYear::new(1, 2024)]
        );
        engine.handle_key(NavKey::PageDown);
        assert_eq!(
            engine.displayed_months(),
            vec![MonthYear::new(2, 2024), MonthYear::new(3, 2024)]
        );
    }

    #[test]
    fn test_enter_commits_and_escape_clears_focus() {
        let mut engine = engine(CalendarConfig::default());
        engine.handle_key(NavKey::ArrowRight);
        engine.handle_key(NavKey::Enter);
        assert_eq!(engine.value().as_deref(), Some("2024-01-16"));
        assert!(engine.handle_key(NavKey::Escape));
        assert_eq!(engine.focused_date(), None);
        assert!(!engine.handle_key(NavKey::Escape));
    }

    #[test]
    fn test_today_key_recentres() {
        let mut engine = engine(CalendarConfig {
            value: Some("2021-06-01".to_string()),
            ..Default::default()
        });
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(5, 2021)]);
        engine.handle_key(NavKey::Today);
        assert_eq!(engine.focused_date(), Some(d("2024-01-15")));
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(0, 2024)]);
    }

    #[test]
    fn test_keys_route_to_open_picker() {
        let mut engine = engine(CalendarConfig::default());
        engine.open_picker(PickerKind::Month, 0);
        engine.handle_key(NavKey::ArrowDown);
        assert_eq!(engine.focused_date(), None);
        engine.handle_key(NavKey::Enter);
        assert!(!engine.picker_state().open);
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(3, 2024)]);

        engine.open_picker(PickerKind::Year, 0);
        engine.handle_key(NavKey::ArrowLeft);
        engine.handle_key(NavKey::Space);
        assert_eq!(engine.displayed_months(), vec![MonthYear::new(3, 2023)]);

        engine.open_picker(PickerKind::Year, 0);
        assert!(engine.handle_key(NavKey::Escape));
        assert!(!engine.picker_state().open);
    }

    #[test]
    fn test_keyboard_can_be_disabled() {
        let mut engine = engine(CalendarConfig {
            disable_keyboard_navigation: true,
            ..Default::default()
        });
        assert!(!engine.handle_key(NavKey::ArrowRight));
        assert_eq!(engine.focused_date(), None);
    }
}
