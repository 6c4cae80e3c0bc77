/// Layout manager for the TUI application
use crate::stores::{AppLogsStore, CalendarSnapshot, CalendarStore, UIStore};
use crate::ui::geometry::{pane_rects, screen_chunks};
use crate::ui::{LogsPanel, PaneWidget};
use calendr_core::SelectionMode;
use calendr_core::models::PickerKind;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    calendar_store: &CalendarStore,
    ui_store: &UIStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();
    let chunks = screen_chunks(area);
    let calendar = calendar_store.get_state();
    let ui_state = ui_store.get_state();

    render_header(frame, chunks.header, &calendar);

    for (view, rect) in calendar.panes.iter().zip(pane_rects(chunks.body, calendar.panes.len())) {
        frame.render_widget(
            PaneWidget::new(view, &calendar.weekday_labels, calendar.locale),
            rect,
        );
    }

    render_status(frame, chunks.status, &calendar);
    render_footer(frame, chunks.footer, &calendar, ui_state.show_help);

    if ui_state.show_help {
        render_help(frame, centered_rect(60, 70, area));
    } else if ui_state.show_logs {
        LogsPanel::from_state(&app_logs_store.get_state())
            .render(centered_rect(90, 80, area), frame.buffer_mut());
    }
}

fn render_header(frame: &mut Frame, area: Rect, calendar: &CalendarSnapshot) {
    let mode = match calendar.mode {
        SelectionMode::Single => "single",
        SelectionMode::Range => "range",
    };
    let header_text = Line::from(vec![
        Span::styled(
            " CALENDR ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " | Mode: {} | Panes: {} | Locale: {} ",
            mode,
            calendar.panes.len(),
            calendar.locale.code
        )),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

/// The selection summary line, e.g. `Value: 2024-01-15`
pub fn selection_summary(calendar: &CalendarSnapshot) -> String {
    let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "(none)".to_string());
    match calendar.mode {
        SelectionMode::Single => format!("Value: {}", or_none(&calendar.value)),
        SelectionMode::Range => format!(
            "Range: {} -> {}",
            or_none(&calendar.start_date),
            or_none(&calendar.end_date)
        ),
    }
}

/// Tooltips of the day under the pointer, or else the focused day
pub fn event_summary(calendar: &CalendarSnapshot) -> Option<String> {
    let date = calendar.pointer_day.or(calendar.focused_date)?;
    let tooltips: Vec<String> = calendar
        .panes
        .iter()
        .flat_map(|pane| pane.cells.iter())
        .filter_map(|cell| cell.day())
        .filter(|day| day.date == date)
        .flat_map(|day| day.events.iter())
        .filter_map(|marker| marker.tooltip.clone())
        .collect();
    (!tooltips.is_empty()).then(|| tooltips.join(", "))
}

fn render_status(frame: &mut Frame, area: Rect, calendar: &CalendarSnapshot) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            selection_summary(calendar),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(events) = event_summary(calendar) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(events, Style::default().fg(Color::Magenta)));
    }
    if let Some(message) = &calendar.announcement {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Selection "))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, calendar: &CalendarSnapshot, show_help: bool) {
    let help_text = if show_help {
        "Press ? to hide help"
    } else if calendar.picker.open {
        match calendar.picker.kind {
            Some(PickerKind::Year) => "arrows:Move | PgUp/PgDn:Page | Enter:Pick | Esc:Close",
            _ => "arrows:Move | Enter:Pick | Esc:Close",
        }
    } else if calendar.keyboard_enabled {
        "q:Quit | arrows:Move | Enter:Select | [/]:Month | m/y:Pickers | t:Today | r:Reset | l:Logs | ?:Help"
    } else {
        "q:Quit | click:Select | r:Reset | l:Logs | ?:Help"
    };

    Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(help_text)]))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let rows = [
        ("Arrows", "Move focus by day / week"),
        ("Home / End", "Start / end of week"),
        ("PgUp / PgDn", "Previous / next month (Shift: year)"),
        ("Enter / Space", "Select focused day"),
        ("Esc", "Close picker, then clear focus"),
        ("[ / ]", "Previous / next month"),
        ("m / M", "Month picker on first / last pane"),
        ("y / Y", "Year picker on first / last pane"),
        ("t", "Jump to today"),
        ("r", "Reset selection"),
        ("l", "Application logs"),
        ("q", "Quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("{:>14}  ", key), Style::default().fg(Color::Yellow)),
                Span::raw(*text),
            ])
        })
        .collect();

    Clear.render(area, frame.buffer_mut());
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, frame.buffer_mut());
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
