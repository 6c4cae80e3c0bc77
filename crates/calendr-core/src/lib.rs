pub mod announcer;
pub mod config;
pub mod date_utils;
pub mod day_grid;
pub mod engine;
pub mod event_index;
pub mod exceptions;
pub mod header;
pub mod intents;
pub mod keys;
pub mod layout;
pub mod locale;
mod macros;
pub mod models;
pub mod options;
pub mod picker;

// public api
pub use engine::{CalendarEngine, DateInput, GoToDate, GoToMonth, GoToYear, PaneView};
pub use exceptions::CalendarError;
pub use intents::{CalendarIntent, FormSink, MemoryFormSink};
pub use keys::{KeyPress, NavKey};
pub use models::{MonthYear, PickerKind, RangeCalendars, SelectionMode, Side};
pub use options::CalendarConfig;
