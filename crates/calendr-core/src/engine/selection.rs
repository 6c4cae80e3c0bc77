/// Selection protocol: single dates, ranges with swap-on-select, day pointer events, reset
use super::CalendarEngine;
use crate::date_utils::{format_date, is_date_disabled};
use crate::intents::{CalendarIntent, DayPayload};
use crate::models::SelectionMode;
use chrono::{Datelike, NaiveDate};
use log::debug;
use serde_json::json;

impl CalendarEngine {
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_date_disabled(date, &self.constraints)
    }

    /// Select `date`. Disabled dates are ignored without error.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.is_disabled(date) {
            debug!("Ignoring selection of disabled date {}", date);
            return;
        }
        match self.selection.mode {
            SelectionMode::Single => self.select_single(date),
            SelectionMode::Range => self.select_range_endpoint(date),
        }
    }

    fn select_single(&mut self, date: NaiveDate) {
        self.selection.selected_date = Some(date);
        let value = format_date(date);
        self.notify_form(&value);
        self.intents.push(CalendarIntent::DateSelected {
            date: Some(date),
            value: Some(value.clone()),
        });
        self.intents.push(CalendarIntent::Change { value });
        self.announce_selection(self.locale.selected_text(date));
    }

    fn select_range_endpoint(&mut self, date: NaiveDate) {
        let start = match (self.selection.selected_start, self.selection.selected_end) {
            (Some(start), None) => start,
            _ => {
                // no range yet, or a complete one: start over
                self.selection.selected_start = Some(date);
                self.selection.selected_end = None;
                self.selection.hover_date = None;
                debug!("Range started at {}", date);
                self.announce_selection(self.locale.range_start_text(date));
                return;
            }
        };

        let (start, end) = if date < start { (date, start) } else { (start, date) };
        self.selection.selected_start = Some(start);
        self.selection.selected_end = Some(end);
        self.selection.hover_date = None;

        let start_value = format_date(start);
        let end_value = format_date(end);
        let form_value = json!({ "start": start_value, "end": end_value }).to_string();
        self.notify_form(&form_value);
        self.intents.push(CalendarIntent::RangeSelected {
            start_date: Some(start),
            end_date: Some(end),
            start_date_value: Some(start_value),
            end_date_value: Some(end_value),
        });
        self.intents.push(CalendarIntent::Change { value: form_value });
        debug!("Range completed {} -> {}", start, end);
        self.announce_selection(self.locale.range_selected_text(start, end));
    }

    fn day_payload(&self, date: NaiveDate) -> DayPayload {
        DayPayload {
            day: date.day(),
            date,
            events: self.events.events_for(date).to_vec(),
        }
    }

    /// Pointer activation of a day cell
    pub fn click_day(&mut self, date: NaiveDate) {
        if self.is_disabled(date) {
            return;
        }
        let payload = self.day_payload(date);
        self.intents.push(CalendarIntent::DayClick(payload));
        self.select_date(date);
    }

    /// Pointer entering a day cell. While a range is half complete the
    /// hovered day becomes the provisional end.
    pub fn hover_day(&mut self, date: NaiveDate) {
        if self.is_disabled(date) {
            return;
        }
        let payload = self.day_payload(date);
        self.intents.push(CalendarIntent::DayHover(payload));
        if self.selection.is_range_pending() {
            self.selection.hover_date = Some(date);
        }
    }

    pub fn leave_day(&mut self, date: NaiveDate) {
        let payload = self.day_payload(date);
        self.intents.push(CalendarIntent::DayLeave(payload));
        self.selection.hover_date = None;
    }

    pub fn reset_selection(&mut self) {
        self.selection.clear();
        debug!("Selection cleared");
    }

    /// Clear selection, overlay, focus and hover, then re-seed the panes from today
    pub fn reset(&mut self) {
        self.selection.clear();
        self.close_picker();
        self.focused_date = None;
        self.panes.clear();
        self.seed_panes();
        debug!("Calendar reset, showing {:?}", self.panes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_utils::parse_iso_date;
    use crate::intents::MemoryFormSink;
    use crate::models::EventMarker;
    use crate::options::CalendarConfig;

    fn d(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn engine(config: CalendarConfig) -> CalendarEngine {
        CalendarEngine::with_today(config, d("2024-01-15"))
    }

    #[test]
    fn test_single_selection_reports_to_form_and_intents() {
        let sink = MemoryFormSink::new();
        let mut engine = engine(CalendarConfig {
            name: "due".to_string(),
            ..Default::default()
        });
        engine.set_form_sink(Box::new(sink.clone()));
        engine.select_date(d("2024-01-15"));
        assert_eq!(engine.value().as_deref(), Some("2024-01-15"));
        assert_eq!(sink.get("due").as_deref(), Some("2024-01-15"));
        assert_eq!(
            engine.drain_intents(),
            vec![
                CalendarIntent::DateSelected {
                    date: Some(d("2024-01-15")),
                    value: Some("2024-01-15".to_string())
                },
                CalendarIntent::Change {
                    value: "2024-01-15".to_string()
                }
            ]
        );
        assert_eq!(
            engine.announcement(),
            Some("Selected Monday, January 15, 2024")
        );
    }

    #[test]
    fn test_range_form_value_is_json() {
        let sink = MemoryFormSink::new();
        let mut engine = engine(CalendarConfig::range());
        engine.set_form_sink(Box::new(sink.clone()));
        engine.select_date(d("2024-01-20"));
        assert_eq!(sink.get("date"), None);
        engine.select_date(d("2024-01-10"));
        let stored: serde_json::Value =
            serde_json::from_str(&sink.get("date").unwrap()).unwrap();
        assert_eq!(stored, json!({"start": "2024-01-10", "end": "2024-01-20"}));
    }

    #[test]
    fn test_disabled_date_is_a_no_op() {
        let mut engine = engine(CalendarConfig {
            value: Some("2024-01-02".to_string()),
            disabled_dates: vec!["2024-01-16".to_string()],
            ..Default::default()
        });
        engine.select_date(d("2024-01-16"));
        assert_eq!(engine.value().as_deref(), Some("2024-01-02"));
        assert!(engine.drain_intents().is_empty());
        assert_eq!(engine.announcement(), None);
    }

    #[test]
    fn test_announcements_can_be_disabled() {
        let mut engine = engine(CalendarConfig {
            disable_announce_selections: true,
            ..Default::default()
        });
        engine.select_date(d("2024-01-03"));
        assert_eq!(engine.announcement(), None);
        assert_eq!(engine.drain_intents().len(), 2);
    }

    #[test]
    fn test_hover_sets_provisional_end_only_while_pending() {
        let mut engine = engine(CalendarConfig::range());
        engine.hover_day(d("2024-01-12"));
        assert_eq!(engine.selection().hover_date, None);

        engine.select_date(d("2024-01-10"));
        engine.hover_day(d("2024-01-12"));
        assert_eq!(engine.selection().hover_date, Some(d("2024-01-12")));
        engine.leave_day(d("2024-01-12"));
        assert_eq!(engine.selection().hover_date, None);

        engine.hover_day(d("2024-01-14"));
        engine.select_date(d("2024-01-14"));
        assert_eq!(engine.selection().hover_date, None);
    }

    #[test]
    fn test_click_carries_events() {
        let mut engine = engine(CalendarConfig {
            event_markers: vec![EventMarker::new("2024-01-22").tooltip("launch")],
            ..Default::default()
        });
        engine.click_day(d("2024-01-22"));
        let intents = engine.drain_intents();
        match &intents[0] {
            CalendarIntent::DayClick(payload) => {
                assert_eq!(payload.day, 22);
                assert_eq!(payload.events[0].tooltip.as_deref(), Some("launch"));
            }
            other => panic!("unexpected intent {:?}", other),
        }
        assert_eq!(engine.value().as_deref(), Some("2024-01-22"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = engine(CalendarConfig {
            value: Some("2023-05-05".to_string()),
            ..Default::default()
        });
        engine.open_picker(crate::models::PickerKind::Month, 0);
        engine.reset();
        assert_eq!(engine.value(), None);
        assert!(!engine.picker_state().open);
        assert_eq!(engine.focused_date(), None);
        assert_eq!(
            engine.displayed_months(),
            vec![crate::models::MonthYear::new(0, 2024)]
        );
    }
}
