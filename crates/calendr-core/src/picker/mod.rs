/// Month and year overlay grids
mod month;
mod year;

pub use month::{MonthCell, MonthPicker};
pub use year::{YearCell, YearPicker};

/// Result of feeding a key to a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerResponse<T> {
    /// the focused cell was committed
    Selected(T),
    /// the key was consumed (cursor moved or commit refused)
    Handled,
    Ignored,
}

/// The overlay currently shown in place of a pane's day grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePicker {
    Month(MonthPicker),
    Year(YearPicker),
}
