/// Intents emitted by the engine for the host to consume.
/// They are queued during an operation and drained by the host afterwards.
use crate::models::{EventMarker, Side};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CalendarIntent {
    DateSelected {
        date: Option<NaiveDate>,
        value: Option<String>,
    },
    RangeSelected {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        start_date_value: Option<String>,
        end_date_value: Option<String>,
    },
    DayClick(DayPayload),
    DayHover(DayPayload),
    DayLeave(DayPayload),
    MonthSelected {
        /// 1-based month
        month: u32,
    },
    YearSelected {
        year: i32,
    },
    Navigate {
        direction: i32,
        side: Side,
    },
    /// Mirrors date/range selection for host form integration
    Change {
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPayload {
    pub day: u32,
    pub date: NaiveDate,
    pub events: Vec<EventMarker>,
}

/// Capability object the engine reports finalized selections to.
/// Ranges are reported as a JSON object `{"start": .., "end": ..}`.
pub trait FormSink: Send + Sync {
    fn set_form_value(&mut self, name: &str, value: &str);
}

/// Form sink that remembers the last value per field. Clones share the
/// same storage, so a host can hand one clone to the engine and read the
/// other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFormSink {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryFormSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.read().unwrap().get(name).cloned()
    }
}

impl FormSink for MemoryFormSink {
    fn set_form_value(&mut self, name: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}
