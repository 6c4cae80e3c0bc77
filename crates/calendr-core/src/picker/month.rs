use super::PickerResponse;
use crate::keys::NavKey;
use crate::locale::Locale;

const MONTH_COLUMNS: i32 = 3;
const MONTH_CELLS: i32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPicker {
    /// 0-based month under the cursor
    focused: u32,
    /// 0-based month shown by the pane the picker was opened from
    current: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    pub month: u32,
    pub label: &'static str,
    pub focused: bool,
    pub current: bool,
}

impl MonthPicker {
    pub fn new(current: u32) -> Self {
        let current = current.min(11);
        Self {
            focused: current,
            current,
        }
    }

    pub fn focused(&self) -> u32 {
        self.focused
    }

    pub fn cells(&self, locale: &Locale) -> Vec<MonthCell> {
        (0..MONTH_CELLS as u32)
            .map(|month| MonthCell {
                month,
                label: locale.month_name(month),
                focused: month == self.focused,
                current: month == self.current,
            })
            .collect()
    }

    /// Cursor movement clamps at the grid edges
    fn move_by(&mut self, delta: i32) {
        let target = (self.focused as i32 + delta).clamp(0, MONTH_CELLS - 1);
        self.focused = target as u32;
    }

    pub fn handle_key(&mut self, key: NavKey) -> PickerResponse<u32> {
        match key {
            NavKey::ArrowLeft => self.move_by(-1),
            NavKey::ArrowRight => self.move_by(1),
            NavKey::ArrowUp => self.move_by(-MONTH_COLUMNS),
            NavKey::ArrowDown => self.move_by(MONTH_COLUMNS),
            NavKey::Home => self.focused = 0,
            NavKey::End => self.focused = (MONTH_CELLS - 1) as u32,
            NavKey::Enter | NavKey::Space => return PickerResponse::Selected(self.focused),
            _ => return PickerResponse::Ignored,
        }
        PickerResponse::Handled
    }
}
