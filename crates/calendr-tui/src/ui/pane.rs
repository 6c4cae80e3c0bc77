/// One calendar pane: header controls, weekday row and the day grid,
/// or the month/year picker when one is open on this pane
use crate::ui::geometry::{MONTH_PICKER_COLUMNS, PaneGeometry, YEAR_PICKER_COLUMNS};
use calendr_core::PaneView;
use calendr_core::day_grid::{Day, DayCell};
use calendr_core::locale::Locale;
use calendr_core::picker::ActivePicker;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::str::FromStr;

pub struct PaneWidget<'a> {
    view: &'a PaneView,
    weekdays: &'a [&'static str],
    locale: &'static Locale,
}

impl<'a> PaneWidget<'a> {
    pub fn new(view: &'a PaneView, weekdays: &'a [&'static str], locale: &'static Locale) -> Self {
        Self {
            view,
            weekdays,
            locale,
        }
    }

    fn render_header(&self, geometry: &PaneGeometry, buf: &mut Buffer) {
        let header = &self.view.header;
        let control = |disabled: bool| {
            if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            }
        };
        if header.show_prev {
            put(buf, geometry.prev, "<", control(header.prev_disabled));
        }
        if header.show_next {
            put(buf, geometry.next, ">", control(header.next_disabled));
        }
        put(
            buf,
            geometry.month_label,
            header.month_label,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        put(
            buf,
            geometry.year_label,
            &header.year_label,
            Style::default().fg(Color::Yellow),
        );
    }

    fn render_grid(&self, geometry: &PaneGeometry, buf: &mut Buffer) {
        let weekdays = self
            .weekdays
            .iter()
            .map(|label| format!("{:<3}", label))
            .collect::<String>();
        put(buf, geometry.weekdays, &weekdays, Style::default().fg(Color::Yellow));

        for (index, cell) in self.view.cells.iter().enumerate() {
            if let DayCell::Day(day) = cell {
                let marker = if day.events.is_empty() { " " } else { "•" };
                put(
                    buf,
                    geometry.day_cell(index),
                    &format!("{:>2}{}", day.day, marker),
                    day_style(day),
                );
            }
        }
    }

    fn render_picker(&self, picker: &ActivePicker, geometry: &PaneGeometry, buf: &mut Buffer) {
        match picker {
            ActivePicker::Month(picker) => {
                let cells = picker.cells(self.locale);
                let rects = geometry.picker_cells(MONTH_PICKER_COLUMNS, cells.len());
                for (cell, rect) in cells.iter().zip(rects) {
                    let width = (rect.width as usize).saturating_sub(1);
                    let label: String = cell.label.chars().take(width).collect();
                    put(buf, rect, &label, picker_style(cell.focused, cell.current, false));
                }
            }
            ActivePicker::Year(picker) => {
                let cells = picker.cells();
                let rects = geometry.picker_cells(YEAR_PICKER_COLUMNS, cells.len());
                for (cell, rect) in cells.iter().zip(rects) {
                    put(
                        buf,
                        rect,
                        &cell.year.to_string(),
                        picker_style(cell.focused, cell.current, cell.disabled),
                    );
                }
            }
        }
    }
}

impl Widget for PaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.view.picker.is_some() {
            Color::Yellow
        } else {
            Color::Cyan
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let geometry = PaneGeometry::new(area, &self.view.header);
        self.render_header(&geometry, buf);
        match &self.view.picker {
            Some(picker) => self.render_picker(picker, &geometry, buf),
            None => self.render_grid(&geometry, buf),
        }
    }
}

/// Write `text` at the start of `rect`, clipped to the buffer and the rect
fn put(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 || !buf.area.contains(Position::new(rect.x, rect.y)) {
        return;
    }
    let width = rect.width.min(buf.area.right() - rect.x);
    buf.set_stringn(rect.x, rect.y, text, width as usize, style);
}

pub fn day_style(day: &Day) -> Style {
    let mut style = Style::default().fg(Color::White);
    if let Some(marker) = day.events.first() {
        if let Some(bg) = marker.background_color.as_deref().and_then(parse_color) {
            style = style.bg(bg);
        }
        if let Some(fg) = marker.foreground_color.as_deref().and_then(parse_color) {
            style = style.fg(fg);
        }
    }
    if day.today {
        style = style.fg(Color::Green).add_modifier(Modifier::UNDERLINED);
    }
    if day.in_range {
        style = style.bg(Color::Blue);
    } else if day.hovered_range {
        style = style.bg(Color::DarkGray);
    }
    if day.selected || day.range_start || day.range_end {
        style = style
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }
    if day.disabled {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
    }
    if day.focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn picker_style(focused: bool, current: bool, disabled: bool) -> Style {
    let mut style = Style::default().fg(Color::White);
    if current {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if disabled {
        style = style.fg(Color::DarkGray);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn parse_color(name: &str) -> Option<Color> {
    match Color::from_str(name) {
        Ok(color) => Some(color),
        Err(_) => {
            log::debug!("Unknown marker colour {:?}", name);
            None
        }
    }
}
