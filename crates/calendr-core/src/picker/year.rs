use super::PickerResponse;
use crate::keys::NavKey;

const YEAR_COLUMNS: i32 = 4;
const YEAR_WINDOW: i32 = 12;

/// Paginated year grid. Twelve years are shown at a time; moving the
/// cursor past the window edge pages the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPicker {
    window_start: i32,
    focused: i32,
    current: i32,
    min_year: i32,
    max_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub focused: bool,
    pub current: bool,
    /// outside `[min_year, max_year]`, cannot be committed
    pub disabled: bool,
}

fn window_for(year: i32) -> i32 {
    year.saturating_sub(year.rem_euclid(YEAR_WINDOW))
}

impl YearPicker {
    pub fn new(current: i32, min_year: i32, max_year: i32) -> Self {
        Self {
            window_start: window_for(current),
            focused: current,
            current,
            min_year,
            max_year,
        }
    }

    pub fn focused(&self) -> i32 {
        self.focused
    }

    pub fn window(&self) -> (i32, i32) {
        (self.window_start, self.window_start.saturating_add(YEAR_WINDOW - 1))
    }

    pub fn cells(&self) -> Vec<YearCell> {
        (self.window_start..=self.window().1)
            .map(|year| YearCell {
                year,
                focused: year == self.focused,
                current: year == self.current,
                disabled: !self.in_bounds(year),
            })
            .collect()
    }

    fn in_bounds(&self, year: i32) -> bool {
        year >= self.min_year && year <= self.max_year
    }

    fn move_by(&mut self, delta: i32) {
        self.focused = self.focused.saturating_add(delta);
        self.window_start = window_for(self.focused);
    }

    /// Page the window and re-clamp the cursor into it
    fn page(&mut self, pages: i32) {
        let step = pages.saturating_mul(YEAR_WINDOW);
        self.window_start = window_for(self.window_start.saturating_add(step));
        let (first, last) = self.window();
        self.focused = self.focused.saturating_add(step).clamp(first, last);
    }

    pub fn handle_key(&mut self, key: NavKey) -> PickerResponse<i32> {
        match key {
            NavKey::ArrowLeft => self.move_by(-1),
            NavKey::ArrowRight => self.move_by(1),
            NavKey::ArrowUp => self.move_by(-YEAR_COLUMNS),
            NavKey::ArrowDown => self.move_by(YEAR_COLUMNS),
            NavKey::Home => self.focused = self.window_start,
            NavKey::End => self.focused = self.window().1,
            NavKey::PageUp => self.page(-1),
            NavKey::PageDown => self.page(1),
            NavKey::Enter | NavKey::Space => {
                if self.in_bounds(self.focused) {
                    return PickerResponse::Selected(self.focused);
                }
                log::debug!(
                    "Year {} is outside [{}, {}], not committing",
                    self.focused,
                    self.min_year,
                    self.max_year
                );
            }
            _ => return PickerResponse::Ignored,
        }
        PickerResponse::Handled
    }
}
