/// End to end behaviour of the calendar engine through its public API only.
use calendr_core::date_utils::{add_days, format_date, parse_iso_date};
use calendr_core::{
    CalendarConfig, CalendarEngine, CalendarIntent, GoToDate, GoToMonth, GoToYear, MonthYear,
    NavKey, RangeCalendars, SelectionMode, Side,
};
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    parse_iso_date(s).unwrap()
}

fn today() -> NaiveDate {
    d("2024-01-15")
}

fn range_engine(calendars: RangeCalendars) -> CalendarEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = CalendarConfig {
        range_calendars: calendars,
        ..CalendarConfig::range()
    };
    CalendarEngine::with_today(config, today())
}

fn assert_adjacent(engine: &CalendarEngine) {
    let panes = engine.displayed_months();
    if panes.len() == 2 {
        assert_eq!(panes[1], panes[0].add_months(1), "panes not adjacent: {:?}", panes);
    }
}

#[test]
fn single_selection_scenario() {
    let mut engine = CalendarEngine::with_today(CalendarConfig::default(), today());
    engine.select_date(d("2024-01-15"));
    assert_eq!(engine.value().as_deref(), Some("2024-01-15"));
    let intents = engine.drain_intents();
    assert!(intents.contains(&CalendarIntent::DateSelected {
        date: Some(d("2024-01-15")),
        value: Some("2024-01-15".to_string()),
    }));
}

#[test]
fn range_with_reversed_clicks_then_restart() {
    let mut engine = range_engine(RangeCalendars::One);
    engine.select_date(d("2024-01-20"));
    engine.select_date(d("2024-01-10"));
    assert_eq!(engine.start_date().as_deref(), Some("2024-01-10"));
    assert_eq!(engine.end_date().as_deref(), Some("2024-01-20"));
    assert!(engine.drain_intents().contains(&CalendarIntent::RangeSelected {
        start_date: Some(d("2024-01-10")),
        end_date: Some(d("2024-01-20")),
        start_date_value: Some("2024-01-10".to_string()),
        end_date_value: Some("2024-01-20".to_string()),
    }));

    engine.select_date(d("2024-02-01"));
    assert_eq!(engine.start_date().as_deref(), Some("2024-02-01"));
    assert_eq!(engine.end_date(), None);
    assert!(engine.drain_intents().is_empty());
}

#[test]
fn range_ordering_holds_for_any_click_order() {
    let base = d("2024-01-01");
    for a in 0..20 {
        for b in (0..20).step_by(3) {
            let mut engine = range_engine(RangeCalendars::One);
            let first = add_days(base, a);
            let second = add_days(base, b);
            engine.select_date(first);
            engine.select_date(second);
            let selection = engine.selection();
            assert_eq!(selection.selected_start, Some(first.min(second)));
            assert_eq!(selection.selected_end, Some(first.max(second)));
        }
    }
}

#[test]
fn dual_pane_navigation_scenario() {
    let mut engine = range_engine(RangeCalendars::Two);
    engine
        .go_to_month(GoToMonth::new(3, 2024).side(Side::Left))
        .unwrap();
    assert_eq!(
        engine.displayed_months(),
        vec![MonthYear::new(2, 2024), MonthYear::new(3, 2024)]
    );
}

#[test]
fn month_clamp_policy() {
    let mut engine = CalendarEngine::with_today(CalendarConfig::default(), today());
    engine.go_to_month(GoToMonth::new(13, 2024)).unwrap();
    assert_eq!(engine.displayed_months(), vec![MonthYear::new(11, 2024)]);
    engine.go_to_month(GoToMonth::new(0, 2024)).unwrap();
    assert_eq!(engine.displayed_months(), vec![MonthYear::new(0, 2024)]);
}

#[test]
fn disabled_selection_leaves_value_untouched() {
    let config = CalendarConfig {
        value: Some("2024-01-05".to_string()),
        min_date: Some("2024-01-03".to_string()),
        max_date: Some("2024-01-25".to_string()),
        disabled_dates: vec!["2024-01-12".to_string()],
        ..Default::default()
    };
    let mut engine = CalendarEngine::with_today(config, today());
    for blocked in ["2024-01-02", "2024-01-12", "2024-01-26"] {
        engine.select_date(d(blocked));
        assert_eq!(engine.value().as_deref(), Some("2024-01-05"));
        assert_eq!(engine.selection().selected_date, Some(d("2024-01-05")));
    }
}

#[test]
fn reset_is_idempotent() {
    let mut engine = range_engine(RangeCalendars::Two);
    engine.select_date(d("2024-03-02"));
    engine.handle_key(NavKey::PageDown);
    engine.go_to_year(GoToYear::new(2031)).unwrap();

    engine.reset();
    let once = (
        engine.selection().clone(),
        engine.displayed_months(),
        engine.picker_state(),
        engine.focused_date(),
    );
    engine.reset();
    let twice = (
        engine.selection().clone(),
        engine.displayed_months(),
        engine.picker_state(),
        engine.focused_date(),
    );
    assert_eq!(once, twice);
    assert_eq!(once.1, vec![MonthYear::new(0, 2024), MonthYear::new(1, 2024)]);
    assert_eq!(once.0.mode, SelectionMode::Range);
}

#[test]
fn adjacency_survives_every_navigation_path() {
    let mut engine = range_engine(RangeCalendars::Auto);
    engine.observe_width(Some(200));
    assert_adjacent(&engine);

    engine.go_to_month(GoToMonth::new(12, 2023).side(Side::Left)).unwrap();
    assert_adjacent(&engine);
    engine.go_to_month(GoToMonth::new(1, 2024).side(Side::Right)).unwrap();
    assert_adjacent(&engine);
    engine.go_to_year(GoToYear::new(1999).side(Side::Right)).unwrap();
    assert_adjacent(&engine);
    engine.go_to_date(GoToDate::new("2030-12-31")).unwrap();
    assert_adjacent(&engine);
    engine.navigate(-1, Side::Right);
    assert_adjacent(&engine);
    engine.navigate(1, Side::Left);
    assert_adjacent(&engine);

    for key in [NavKey::PageDown, NavKey::ArrowDown, NavKey::PageUp, NavKey::End, NavKey::Today] {
        for _ in 0..9 {
            engine.handle_key(key);
            assert_adjacent(&engine);
        }
    }

    engine.observe_width(Some(10));
    assert_eq!(engine.displayed_months().len(), 1);
    engine.observe_width(Some(120));
    assert_eq!(engine.displayed_months().len(), 2);
    assert_adjacent(&engine);
}

#[test]
fn iso_round_trip_over_a_leap_year() {
    let mut date = d("2024-01-01");
    while date < d("2025-01-01") {
        let s = format_date(date);
        assert_eq!(format_date(parse_iso_date(&s).unwrap()), s);
        date = add_days(date, 1);
    }
}
