/// Keyboard and mouse input mapping
use crate::actions::Action;
use crate::stores::{AppLogsStore, CalendarStore, UIStore};
use crate::ui::geometry::{Hit, hit_test, screen_chunks};
use calendr_core::{KeyPress, NavKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::crossterm;
use ratatui::layout::Rect;

/// Map a terminal key to the calendar's navigation keys
pub fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Left => Some(NavKey::ArrowLeft),
        KeyCode::Right => Some(NavKey::ArrowRight),
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        KeyCode::PageUp => Some(NavKey::PageUp),
        KeyCode::PageDown => Some(NavKey::PageDown),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Char(' ') => Some(NavKey::Space),
        KeyCode::Esc => Some(NavKey::Escape),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(NavKey::Today),
        _ => None,
    }
}

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    calendar_store: &CalendarStore,
    app_logs_store: &AppLogsStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }
    if ui_state.show_help {
        return match key_event.code {
            KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }
    if ui_state.show_logs {
        return handle_logs_keys(key_event, app_logs_store);
    }

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::ToggleLogs),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        _ => handle_calendar_keys(key_event, calendar_store),
    }
}

fn handle_calendar_keys(key_event: KeyEvent, calendar_store: &CalendarStore) -> Option<Action> {
    let calendar = calendar_store.get_state();
    let first = calendar.panes.first()?;
    let last = calendar.panes.last()?;

    match key_event.code {
        // Header controls, also available without keyboard grid navigation
        KeyCode::Char('[') => first.header.prev().map(Action::Header),
        KeyCode::Char(']') => last.header.next().map(Action::Header),
        KeyCode::Char('m') => Some(Action::Header(first.header.open_month_picker())),
        KeyCode::Char('M') => Some(Action::Header(last.header.open_month_picker())),
        KeyCode::Char('y') => Some(Action::Header(first.header.open_year_picker())),
        KeyCode::Char('Y') => Some(Action::Header(last.header.open_year_picker())),

        code => nav_key(code).map(|key| {
            Action::Key(KeyPress {
                key,
                shift: key_event.modifiers.contains(KeyModifiers::SHIFT),
            })
        }),
    }
}

fn handle_logs_keys(key_event: KeyEvent, app_logs_store: &AppLogsStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::ToggleLogs),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => {
            app_logs_store.scroll_down(1);
            None // No action needed, store updated directly
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app_logs_store.scroll_up(1);
            None
        }
        KeyCode::PageDown => {
            app_logs_store.scroll_down(10);
            None
        }
        KeyCode::PageUp => {
            app_logs_store.scroll_up(10);
            None
        }
        KeyCode::Char('g') => {
            app_logs_store.scroll_to_bottom();
            None
        }
        _ => None,
    }
}

/// Handle mouse input against the layout drawn on `screen`
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    screen: Rect,
    ui_store: &UIStore,
    calendar_store: &CalendarStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();
    if ui_state.show_help || ui_state.show_logs {
        return None;
    }
    let body = screen_chunks(screen).body;
    let calendar = calendar_store.get_state();
    let hit = hit_test(&calendar.panes, body, mouse_event.column, mouse_event.row);

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit? {
            Hit::Header(intent) => Some(Action::Header(intent)),
            Hit::Day(date) => Some(Action::ClickDay(date)),
            Hit::MonthCell(month0) => Some(Action::PickMonth(month0)),
            Hit::YearCell(year) => Some(Action::PickYear(year)),
        },
        MouseEventKind::Moved => {
            let day = match hit {
                Some(Hit::Day(date)) => Some(date),
                _ => None,
            };
            // only report changes
            (day != calendar.pointer_day).then_some(Action::PointerMoved(day))
        }
        _ => None,
    }
}
