/// Screen geometry shared by rendering and mouse hit-testing, so a click
/// always lands on what was drawn there
use calendr_core::PaneView;
use calendr_core::day_grid::DayCell;
use calendr_core::header::{HeaderIntent, HeaderView};
use calendr_core::picker::ActivePicker;
use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

pub const CELL_WIDTH: u16 = 3;
pub const GRID_COLUMNS: u16 = 7;
pub const GRID_WIDTH: u16 = CELL_WIDTH * GRID_COLUMNS;
/// grid plus one column of padding and a border on each side
pub const PANE_WIDTH: u16 = GRID_WIDTH + 4;
/// header, weekday row and six weeks inside the borders
pub const PANE_HEIGHT: u16 = 10;
pub const PANE_GAP: u16 = 2;

pub const MONTH_PICKER_COLUMNS: u16 = 3;
pub const YEAR_PICKER_COLUMNS: u16 = 4;

/// Top level regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChunks {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Panes
            Constraint::Length(3), // Status
            Constraint::Length(3), // Footer
        ])
        .split(area);
    ScreenChunks {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

/// Pane rectangles centred horizontally in `body`
pub fn pane_rects(body: Rect, count: usize) -> Vec<Rect> {
    let count = count as u16;
    if count == 0 {
        return Vec::new();
    }
    let total = count * PANE_WIDTH + (count - 1) * PANE_GAP;
    let x0 = body.x + body.width.saturating_sub(total) / 2;
    (0..count)
        .map(|i| {
            Rect::new(
                x0 + i * (PANE_WIDTH + PANE_GAP),
                body.y,
                PANE_WIDTH,
                PANE_HEIGHT.min(body.height),
            )
            .intersection(body)
        })
        .collect()
}

/// Positions of everything inside one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    pub area: Rect,
    pub inner: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub month_label: Rect,
    pub year_label: Rect,
    pub weekdays: Rect,
    pub grid: Rect,
}

impl PaneGeometry {
    pub fn new(area: Rect, header: &HeaderView) -> Self {
        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let row = inner.y;
        let month_width = header.month_label.width() as u16;
        let year_width = header.year_label.width() as u16;
        let label_x = inner.x + inner.width.saturating_sub(month_width + 1 + year_width) / 2;
        let grid_x = inner.x + inner.width.saturating_sub(GRID_WIDTH) / 2;

        Self {
            area,
            inner,
            prev: Rect::new(inner.x, row, 1, 1),
            next: Rect::new(inner.right().saturating_sub(1), row, 1, 1),
            month_label: Rect::new(label_x, row, month_width, 1),
            year_label: Rect::new(label_x + month_width + 1, row, year_width, 1),
            weekdays: Rect::new(grid_x, row + 1, GRID_WIDTH, 1),
            grid: Rect::new(grid_x, row + 2, GRID_WIDTH, inner.height.saturating_sub(2)),
        }
    }

    /// Rectangle of the day cell at `index` in the grid
    pub fn day_cell(&self, index: usize) -> Rect {
        let index = index as u16;
        Rect::new(
            self.grid.x + (index % GRID_COLUMNS) * CELL_WIDTH,
            self.grid.y + index / GRID_COLUMNS,
            CELL_WIDTH,
            1,
        )
    }

    /// Cell rectangles of a picker overlay laid out in `columns`, starting
    /// one blank row under the header
    pub fn picker_cells(&self, columns: u16, count: usize) -> Vec<Rect> {
        let width = self.inner.width / columns.max(1);
        (0..count as u16)
            .map(|i| {
                Rect::new(
                    self.inner.x + (i % columns) * width,
                    self.inner.y + 2 + i / columns,
                    width,
                    1,
                )
            })
            .collect()
    }
}

/// What a pointer position lands on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Header(HeaderIntent),
    Day(NaiveDate),
    MonthCell(u32),
    YearCell(i32),
}

pub fn hit_test(views: &[PaneView], body: Rect, column: u16, row: u16) -> Option<Hit> {
    let position = Position::new(column, row);
    let rects = pane_rects(body, views.len());
    let (view, area) = views
        .iter()
        .zip(rects)
        .find(|(_, area)| area.contains(position))?;
    let geometry = PaneGeometry::new(area, &view.header);

    if geometry.prev.contains(position) {
        return view.header.prev().map(Hit::Header);
    }
    if geometry.next.contains(position) {
        return view.header.next().map(Hit::Header);
    }
    if geometry.month_label.contains(position) {
        return Some(Hit::Header(view.header.open_month_picker()));
    }
    if geometry.year_label.contains(position) {
        return Some(Hit::Header(view.header.open_year_picker()));
    }

    match &view.picker {
        Some(ActivePicker::Month(_)) => geometry
            .picker_cells(MONTH_PICKER_COLUMNS, 12)
            .iter()
            .position(|cell| cell.contains(position))
            .map(|i| Hit::MonthCell(i as u32)),
        Some(ActivePicker::Year(picker)) => {
            let cells = picker.cells();
            geometry
                .picker_cells(YEAR_PICKER_COLUMNS, cells.len())
                .iter()
                .position(|cell| cell.contains(position))
                .and_then(|i| cells.get(i))
                .filter(|cell| !cell.disabled)
                .map(|cell| Hit::YearCell(cell.year))
        }
        None => view
            .cells
            .iter()
            .enumerate()
            .find(|(i, _)| geometry.day_cell(*i).contains(position))
            .and_then(|(_, cell)| match cell {
                DayCell::Day(day) if !day.disabled => Some(Hit::Day(day.date)),
                _ => None,
            }),
    }
}
